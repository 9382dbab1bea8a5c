
use failure::Fail;



pub type AppResult<T> = Result<T, AppError>;


#[derive(Fail, Debug)]
pub enum AppError {
    #[fail(display = "IO error: {}", _0)]
    Io(std::io::Error),
    #[fail(display = "Not enough argument")]
    NotEnoughArgument,
    #[fail(display = "{}", _0)]
    Png(png_header::PngError),
    #[fail(display = "Too many arguments: {}", _0)]
    TooManyArguments(String),
    #[fail(display = "Unknown option: {}", _0)]
    UnknownOption(String),
}

macro_rules! define_error {
    ($source:ty, $kind:ident) => {
        impl From<$source> for AppError {
            fn from(error: $source) -> AppError {
                AppError::$kind(error)
            }
        }
    }
}

define_error!(std::io::Error, Io);
define_error!(png_header::PngError, Png);

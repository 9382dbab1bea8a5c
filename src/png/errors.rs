
use failure::Fail;
use std::io::Error as IOError;

use super::ChunkType;


pub type PngResult<T> = Result<T, PngError>;



#[derive(Fail, Debug)]
pub enum PngError {
    #[fail(display = "CRC mismatch: expected={:#010x}, actual={:#010x}", expected, actual)]
    CrcMismatch { expected: u32, actual: u32 },
    #[fail(display = "Invalid bit depth {} for colour type {}", bit_depth, colour_type)]
    InvalidBitDepth { colour_type: u8, bit_depth: u8 },
    #[fail(display = "Invalid image dimensions: {}x{}", _0, _1)]
    InvalidDimensions(u32, u32),
    #[fail(display = "Not a PNG: invalid signature")]
    InvalidSignature,
    #[fail(display = "IO error: {}", _0)]
    Io(IOError),
    #[fail(display = "Truncated chunk CRC")]
    TruncatedCrc,
    #[fail(display = "Truncated chunk header")]
    TruncatedHeader,
    #[fail(display = "Truncated payload: expected={}, actual={}", expected, actual)]
    TruncatedPayload { expected: u32, actual: usize },
    #[fail(display = "Unexpected chunk: expected={}, actual={}", expected, actual)]
    UnexpectedChunk { expected: ChunkType, actual: ChunkType },
    #[fail(display = "Unexpected chunk length: expected={}, actual={}", expected, actual)]
    UnexpectedLength { expected: u32, actual: u32 },
    #[fail(display = "Unknown colour type: {}", _0)]
    UnknownColourType(u8),
    #[fail(display = "Unsupported {} method: {}", _0, _1)]
    UnsupportedMethod(&'static str, u8),
}

macro_rules! define_error {
    ($source:ty, $kind:tt) => {
        impl From<$source> for PngError {
            fn from(error: $source) -> PngError {
                PngError::$kind(error)
            }
        }
    }
}

define_error!(std::io::Error, Io);

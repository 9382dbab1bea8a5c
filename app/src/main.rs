use std::env;
use std::fs::File;
use std::io::{stdout, BufReader, Write};
use std::process::exit;

use failure::Fail;
use tracing::info;
use tracing_subscriber::EnvFilter;

use png_header::png::validators::validate_header;
use png_header::{ChunkReader, ChunkType, ImageHeader};
use png_header::png::IHDR_LENGTH;

mod errors;

use crate::errors::{AppResult, AppError};



#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Setting {
    filepath: String,
    strict: bool,
    verbose: bool,
    verify_crc: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Parsed {
    Help,
    Run(Setting),
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Report {
    header: ImageHeader,
    crc: Option<u32>,
}


fn main() {
    exit(run(env::args().skip(1)));
}

/// Returns the process exit status.
fn run<T: Iterator<Item = String>>(args: T) -> i32 {
    let err = match app(args) {
        Ok(()) => return 0,
        Err(err) => err,
    };

    let mut fail: &dyn Fail = &err;
    let mut message = err.to_string();
    while let Some(cause) = fail.cause() {
        message.push_str(&format!("\n\tcaused by: {}", cause));
        fail = cause;
    }
    eprintln!("{}", message);
    if is_usage_error(&err) {
        eprintln!();
        print_usage();
    }
    1
}

fn print_usage() {
    eprint!(include_str!("usage.txt"));
}

fn is_usage_error(err: &AppError) -> bool {
    match err {
        AppError::NotEnoughArgument | AppError::TooManyArguments(_) | AppError::UnknownOption(_) => true,
        _ => false,
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn app<T: Iterator<Item = String>>(args: T) -> AppResult<()> {
    let setting = match parse_args(args)? {
        Parsed::Help => {
            print_usage();
            return Ok(());
        },
        Parsed::Run(setting) => setting,
    };

    init_tracing(setting.verbose);
    info!(file = %setting.filepath, "reading");

    // Closed on drop, including every early return below.
    let file = File::open(&setting.filepath)?;
    let report = inspect(BufReader::new(file), &setting)?;

    let out = stdout();
    let mut out = out.lock();
    print_report(&mut out, &report)?;
    Ok(())
}


fn parse_args<T: Iterator<Item = String>>(mut args: T) -> AppResult<Parsed> {
    let mut setting = Setting::default();
    let mut filepath = None;

    while let Some(arg) = args.next() {
        match &*arg {
            "-h" | "--help" =>
                return Ok(Parsed::Help),
            "-c" | "--verify-crc" =>
                setting.verify_crc = true,
            "-s" | "--strict" =>
                setting.strict = true,
            "-v" | "--verbose" =>
                setting.verbose = true,
            option if option.starts_with('-') && option.len() > 1 =>
                return Err(AppError::UnknownOption(option.to_owned())),
            path => {
                if filepath.is_some() {
                    return Err(AppError::TooManyArguments(path.to_owned()));
                }
                filepath = Some(path.to_owned());
            }
        }
    }

    setting.filepath = filepath.ok_or(AppError::NotEnoughArgument)?;
    Ok(Parsed::Run(setting))
}


fn inspect<R: std::io::Read>(source: R, setting: &Setting) -> AppResult<Report> {
    let mut reader = ChunkReader::new(source);
    reader.validate_signature()?;
    let chunk_header = reader.read_chunk_header()?;
    let payload = reader.read_fixed_payload(&chunk_header, ChunkType::IHDR, IHDR_LENGTH)?;

    let header = ImageHeader::from_payload(&payload)?;

    let crc = if setting.verify_crc {
        Some(reader.verify_crc(&chunk_header, &payload)?)
    } else {
        None
    };

    if setting.strict {
        validate_header(&header)?;
    }

    Ok(Report { header, crc })
}


fn print_report<W: Write>(out: &mut W, report: &Report) -> AppResult<()> {
    let header = &report.header;

    writeln!(out, "PNG signature OK")?;
    writeln!(out, "Width       : {}", header.width)?;
    writeln!(out, "Height      : {}", header.height)?;
    writeln!(out, "Bit-depth   : {}", header.bit_depth)?;
    match header.colour() {
        Some(colour) => {
            writeln!(out, "Colour type : {} ({})", header.colour_type, colour)?;
            writeln!(out, "Channels    : {}", colour.channels())?;
        },
        None => writeln!(out, "Colour type : {} (unknown)", header.colour_type)?,
    }
    writeln!(out, "Compression : {}", header.compression_method)?;
    writeln!(out, "Filter      : {}", header.filter_method)?;
    match header.interlace() {
        Some(interlace) => writeln!(out, "Interlace   : {} ({:?})", header.interlace_method, interlace)?,
        None => writeln!(out, "Interlace   : {} (unknown)", header.interlace_method)?,
    }
    if let Some(crc) = report.crc {
        writeln!(out, "CRC OK      : {:#010x}", crc)?;
    }

    Ok(())
}


pub mod png;

pub use crate::png::errors::{PngError, PngResult};
pub use crate::png::reader::{check_signature, parse_bytes, parse_file, parse_header, ChunkReader};
pub use crate::png::{ChunkHeader, ChunkType, ColourType, ImageHeader, Interlace};

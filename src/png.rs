use std::fmt;

use enum_iterator::IntoEnumIterator;

pub mod chunks;
pub mod errors;
pub mod reader;
pub mod validators;

pub use self::chunks::{be32, ChunkHeader, ChunkType};

use self::errors::{PngError, PngResult};



/// The eight bytes every PNG datastream starts with.
pub const SIGNATURE: [u8;8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

/// Length of an `IHDR` payload.
pub const IHDR_LENGTH: u32 = 13;


/// Decoded `IHDR` payload.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub colour_type: u8,
    pub compression_method: u8,
    pub filter_method: u8,
    pub interlace_method: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, enum_iterator_derive::IntoEnumIterator)]
pub enum ColourType {
    Greyscale = 0,
    Truecolour = 2,
    Indexed = 3,
    GreyscaleAlpha = 4,
    TruecolourAlpha = 6,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Interlace {
    None = 0,
    Adam7 = 1,
}


impl ImageHeader {
    /// Decodes the fixed layout field by field. Integers are big-endian on the wire.
    pub fn from_bytes(payload: &[u8; IHDR_LENGTH as usize]) -> Self {
        ImageHeader {
            width: be32([payload[0], payload[1], payload[2], payload[3]]),
            height: be32([payload[4], payload[5], payload[6], payload[7]]),
            bit_depth: payload[8],
            colour_type: payload[9],
            compression_method: payload[10],
            filter_method: payload[11],
            interlace_method: payload[12],
        }
    }

    /// Like `from_bytes`, but for a payload whose length is not yet known.
    pub fn from_payload(payload: &[u8]) -> PngResult<Self> {
        if payload.len() != IHDR_LENGTH as usize {
            return Err(PngError::UnexpectedLength { expected: IHDR_LENGTH, actual: payload.len() as u32 });
        }
        let mut buffer = [0u8; IHDR_LENGTH as usize];
        buffer.copy_from_slice(payload);
        Ok(Self::from_bytes(&buffer))
    }

    pub fn colour(&self) -> Option<ColourType> {
        ColourType::from_u8(self.colour_type)
    }

    pub fn interlace(&self) -> Option<Interlace> {
        match self.interlace_method {
            0 => Some(Interlace::None),
            1 => Some(Interlace::Adam7),
            _ => None,
        }
    }
}


impl ColourType {
    pub fn from_u8(value: u8) -> Option<Self> {
        ColourType::into_enum_iter().find(|it| *it as u8 == value)
    }

    pub fn channels(self) -> usize {
        use self::ColourType::*;

        match self {
            Greyscale | Indexed => 1,
            GreyscaleAlpha => 2,
            Truecolour => 3,
            TruecolourAlpha => 4,
        }
    }

    pub fn allowed_bit_depths(self) -> &'static [u8] {
        use self::ColourType::*;

        match self {
            Greyscale => &[1, 2, 4, 8, 16],
            Indexed => &[1, 2, 4, 8],
            GreyscaleAlpha | Truecolour | TruecolourAlpha => &[8, 16],
        }
    }
}

impl fmt::Display for ColourType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::ColourType::*;

        let name = match self {
            Greyscale => "greyscale",
            Truecolour => "truecolour",
            Indexed => "indexed-colour",
            GreyscaleAlpha => "greyscale with alpha",
            TruecolourAlpha => "truecolour with alpha",
        };
        write!(f, "{}", name)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        let payload = [
            0x00, 0x00, 0x03, 0x20, // 800
            0x00, 0x00, 0x02, 0x58, // 600
            8, 2, 0, 0, 1,
        ];
        let header = ImageHeader::from_bytes(&payload);
        assert_eq!(header.width, 800);
        assert_eq!(header.height, 600);
        assert_eq!(header.bit_depth, 8);
        assert_eq!(header.colour(), Some(ColourType::Truecolour));
        assert_eq!(header.interlace(), Some(Interlace::Adam7));
    }

    #[test]
    fn test_from_payload() {
        let payload = [0, 0, 0, 1, 0, 0, 0, 1, 16, 0, 0, 0, 0];
        let header = ImageHeader::from_payload(&payload).unwrap();
        assert_eq!(header, ImageHeader { width: 1, height: 1, bit_depth: 16, ..Default::default() });
    }

    #[test]#[should_panic(expected="UnexpectedLength { expected: 13, actual: 12 }")]
    fn test_from_short_payload() {
        ImageHeader::from_payload(&[0; 12]).unwrap();
    }

    #[test]
    fn test_colour_type_from_u8() {
        for colour in ColourType::into_enum_iter() {
            assert_eq!(ColourType::from_u8(colour as u8), Some(colour));
        }
        for value in &[1, 5, 7, 0xff] {
            assert_eq!(ColourType::from_u8(*value), None);
        }
    }

    #[test]
    fn test_channels() {
        assert_eq!(ColourType::Indexed.channels(), 1);
        assert_eq!(ColourType::TruecolourAlpha.channels(), 4);
    }
}

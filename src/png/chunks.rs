use std::fmt;

use byteorder::{BigEndian, ByteOrder};



/// Four byte chunk type tag, compared byte for byte.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ChunkType(pub [u8;4]);

/// Length and type read from the front of a chunk.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChunkHeader {
    pub length: u32,
    pub chunk_type: ChunkType,
}


impl ChunkType {
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    pub fn as_bytes(&self) -> &[u8;4] {
        &self.0
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for b in &self.0 {
            if b.is_ascii_graphic() {
                write!(f, "{}", *b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ChunkType({})", self)
    }
}

impl ChunkHeader {
    /// Splits the eight header bytes into the big-endian length and the type tag.
    pub fn from_bytes(bytes: &[u8;8]) -> Self {
        ChunkHeader {
            length: be32([bytes[0], bytes[1], bytes[2], bytes[3]]),
            chunk_type: ChunkType([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }
}


/// Big-endian to native, independent of the host byte order.
pub fn be32(bytes: [u8;4]) -> u32 {
    BigEndian::read_u32(&bytes)
}

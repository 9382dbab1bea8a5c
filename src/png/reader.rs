
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::Crc;
use tracing::{debug, trace};

use super::errors::{PngError, PngResult};
use super::{be32, ChunkHeader, ChunkType, ImageHeader, IHDR_LENGTH, SIGNATURE};



/// Sequential reader over a PNG datastream.
///
/// Every operation consumes bytes in order and never seeks back. On error the
/// cursor position is unspecified and the parse should be abandoned.
pub struct ChunkReader<R: Read> {
    reader: R,
}


impl<R: Read> ChunkReader<R> {
    pub fn new(reader: R) -> Self {
        ChunkReader { reader }
    }

    /// Reads eight bytes and compares them with the PNG signature.
    /// A short read counts as a mismatch.
    pub fn validate_signature(&mut self) -> PngResult<()> {
        let bytes = self.read_up_to(SIGNATURE.len())?;
        if !check_signature(&bytes) {
            return Err(PngError::InvalidSignature);
        }
        trace!("signature ok");
        Ok(())
    }

    pub fn read_chunk_header(&mut self) -> PngResult<ChunkHeader> {
        let bytes = self.read_up_to(8)?;
        if bytes.len() < 8 {
            return Err(PngError::TruncatedHeader);
        }
        let mut buffer = [0u8;8];
        buffer.copy_from_slice(&bytes);
        let header = ChunkHeader::from_bytes(&buffer);
        debug!(length = header.length, chunk_type = %header.chunk_type, "chunk header");
        Ok(header)
    }

    /// Checks `header` against the expected type and length, then consumes the
    /// whole declared payload.
    pub fn read_fixed_payload(&mut self, header: &ChunkHeader, expected_type: ChunkType, expected_length: u32) -> PngResult<Vec<u8>> {
        if header.chunk_type != expected_type {
            return Err(PngError::UnexpectedChunk { expected: expected_type, actual: header.chunk_type });
        }
        if header.length != expected_length {
            return Err(PngError::UnexpectedLength { expected: expected_length, actual: header.length });
        }

        let payload = self.read_up_to(header.length as usize)?;
        if payload.len() < header.length as usize {
            return Err(PngError::TruncatedPayload { expected: header.length, actual: payload.len() });
        }
        Ok(payload)
    }

    pub fn read_image_header(&mut self, header: &ChunkHeader) -> PngResult<ImageHeader> {
        let payload = self.read_fixed_payload(header, ChunkType::IHDR, IHDR_LENGTH)?;
        let image_header = ImageHeader::from_payload(&payload)?;
        debug!(
            width = image_header.width,
            height = image_header.height,
            bit_depth = image_header.bit_depth,
            colour_type = image_header.colour_type,
            "image header");
        Ok(image_header)
    }

    /// Reads the CRC that follows a chunk payload and checks it against the
    /// type tag and payload. Returns the stored CRC.
    pub fn verify_crc(&mut self, header: &ChunkHeader, payload: &[u8]) -> PngResult<u32> {
        let bytes = self.read_up_to(4)?;
        if bytes.len() < 4 {
            return Err(PngError::TruncatedCrc);
        }
        let expected = be32([bytes[0], bytes[1], bytes[2], bytes[3]]);

        let mut crc = Crc::new();
        crc.update(header.chunk_type.as_bytes());
        crc.update(payload);
        let actual = crc.sum();

        if expected != actual {
            return Err(PngError::CrcMismatch { expected, actual });
        }
        trace!(crc = expected, "crc ok");
        Ok(expected)
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    // Stops early only at end of input.
    fn read_up_to(&mut self, size: usize) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(size);
        (&mut self.reader).take(size as u64).read_to_end(&mut buffer)?;
        Ok(buffer)
    }
}


pub fn check_signature(bytes: &[u8]) -> bool {
    bytes == SIGNATURE
}

/// Validates the signature and decodes the leading `IHDR` chunk.
pub fn parse_header<R: Read>(reader: R) -> PngResult<ImageHeader> {
    let mut reader = ChunkReader::new(reader);
    reader.validate_signature()?;
    let header = reader.read_chunk_header()?;
    reader.read_image_header(&header)
}

pub fn parse_bytes(bytes: &[u8]) -> PngResult<ImageHeader> {
    parse_header(bytes)
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> PngResult<ImageHeader> {
    let file = File::open(path)?;
    parse_header(BufReader::new(file))
}

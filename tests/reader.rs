use std::fs::{create_dir, File};
use std::io::Write;

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};
use image::ColorType;
use image::png::PNGEncoder;
use rand::prelude::*;

use png_header::png::chunks::be32;
use png_header::png::SIGNATURE;
use png_header::{parse_bytes, parse_file, ChunkReader, ChunkType, ImageHeader, PngError};



fn png_bytes(length: u32, chunk_type: &[u8;4], width: u32, height: u32) -> Vec<u8> {
    let mut buffer = SIGNATURE.to_vec();
    buffer.write_u32::<BigEndian>(length).unwrap();
    buffer.write_all(chunk_type).unwrap();
    buffer.write_u32::<BigEndian>(width).unwrap();
    buffer.write_u32::<BigEndian>(height).unwrap();
    // bit depth, colour type, then three arbitrary bytes
    buffer.write_all(&[8, 2, 0xaa, 0xbb, 0xcc]).unwrap();
    buffer
}

fn create_file(filename: &str) -> File {
    let _ = create_dir("test-output");
    File::create(format!("test-output/{}", filename)).unwrap()
}


#[test]
fn test_decode_header() {
    let header = parse_bytes(&png_bytes(13, b"IHDR", 800, 600)).unwrap();
    assert_eq!(header.width, 800);
    assert_eq!(header.height, 600);
    assert_eq!(header.bit_depth, 8);
    assert_eq!(header.colour_type, 2);
}

#[test]#[should_panic(expected="UnexpectedLength { expected: 13, actual: 10 }")]
fn test_wrong_length() {
    parse_bytes(&png_bytes(10, b"IHDR", 800, 600)).unwrap();
}

#[test]#[should_panic(expected="UnexpectedChunk")]
fn test_wrong_chunk_type() {
    parse_bytes(&png_bytes(13, b"IDAT", 800, 600)).unwrap();
}

#[test]#[should_panic(expected="UnexpectedChunk")]
fn test_wrong_chunk_type_and_length() {
    parse_bytes(&png_bytes(10, b"IDAT", 800, 600)).unwrap();
}

#[test]#[should_panic(expected="InvalidSignature")]
fn test_zero_signature() {
    let mut data = png_bytes(13, b"IHDR", 800, 600);
    for b in &mut data[..8] {
        *b = 0;
    }
    parse_bytes(&data).unwrap();
}

#[test]#[should_panic(expected="InvalidSignature")]
fn test_empty() {
    parse_bytes(&[]).unwrap();
}

#[test]#[should_panic(expected="TruncatedHeader")]
fn test_truncated_to_ten_bytes() {
    parse_bytes(&png_bytes(13, b"IHDR", 800, 600)[..10]).unwrap();
}

#[test]
fn test_truncated_payload() {
    let data = png_bytes(13, b"IHDR", 800, 600);
    match parse_bytes(&data[..20]) {
        Err(PngError::TruncatedPayload { expected: 13, actual: 4 }) => (),
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_chunk_header_boundaries() {
    for length in &[0, 13, 0xffff_ffff] {
        let mut data = vec![];
        data.write_u32::<BigEndian>(*length).unwrap();
        data.write_all(b"abcd").unwrap();
        let header = ChunkReader::new(&data[..]).read_chunk_header().unwrap();
        assert_eq!(header.length, *length);
        assert_eq!(header.chunk_type, ChunkType(*b"abcd"));
    }
}

#[test]
fn test_be32_random() {
    let mut rng = thread_rng();
    let mut values: Vec<u32> = (0 .. 1000).map(|_| rng.gen()).collect();
    values.extend_from_slice(&[0, 1, 0xff, 0x100, 0xffff_ffff]);
    for value in values {
        let mut bytes = [0u8;4];
        BigEndian::write_u32(&mut bytes, value);
        assert_eq!(be32(bytes), value);
    }
}

#[test]
fn test_reader_is_positioned_after_payload() {
    let mut data = png_bytes(13, b"IHDR", 1, 1);
    data.extend_from_slice(b"rest");
    let mut reader = ChunkReader::new(&data[..]);
    reader.validate_signature().unwrap();
    let header = reader.read_chunk_header().unwrap();
    let image_header = reader.read_image_header(&header).unwrap();
    assert_eq!(image_header.compression_method, 0xaa);
    assert_eq!(image_header.interlace_method, 0xcc);
    assert_eq!(reader.into_inner(), b"rest");
}

#[test]
fn test_image_encoded_file() {
    let (width, height) = (3, 2);
    let pixels = vec![0x7f; (width * height * 4) as usize];
    PNGEncoder::new(create_file("rgba.png")).encode(&pixels, width, height, ColorType::RGBA(8)).unwrap();

    let header = parse_file("test-output/rgba.png").unwrap();
    assert_eq!(header, ImageHeader { width, height, bit_depth: 8, colour_type: 6, ..Default::default() });
}

#[test]
fn test_crc_of_encoded_file() {
    let mut data = vec![];
    PNGEncoder::new(&mut data).encode(&[0, 0xff], 2, 1, ColorType::Gray(8)).unwrap();

    let mut reader = ChunkReader::new(&data[..]);
    reader.validate_signature().unwrap();
    let header = reader.read_chunk_header().unwrap();
    let payload = reader.read_fixed_payload(&header, ChunkType::IHDR, 13).unwrap();
    reader.verify_crc(&header, &payload).unwrap();
    assert_eq!(reader.read_chunk_header().unwrap().chunk_type, ChunkType::IDAT);
}

#[test]
fn test_missing_file() {
    match parse_file("test-output/no-such-file.png") {
        Err(PngError::Io(_)) => (),
        other => panic!("{:?}", other),
    }
}

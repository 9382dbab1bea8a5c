
use super::{ColourType, ImageHeader};
use super::errors::{PngError, PngResult};



pub fn validate_header(header: &ImageHeader) -> PngResult<()> {
    if header.width == 0 || header.height == 0 {
        return Err(PngError::InvalidDimensions(header.width, header.height));
    }

    validate_colour(header.colour_type, header.bit_depth)?;

    if header.compression_method != 0 {
        return Err(PngError::UnsupportedMethod("compression", header.compression_method));
    }
    if header.filter_method != 0 {
        return Err(PngError::UnsupportedMethod("filter", header.filter_method));
    }
    if header.interlace().is_none() {
        return Err(PngError::UnsupportedMethod("interlace", header.interlace_method));
    }

    Ok(())
}

pub fn validate_colour(colour_type: u8, bit_depth: u8) -> PngResult<ColourType> {
    let colour = ColourType::from_u8(colour_type).ok_or(PngError::UnknownColourType(colour_type))?;
    if !colour.allowed_bit_depths().contains(&bit_depth) {
        return Err(PngError::InvalidBitDepth { colour_type, bit_depth });
    }
    Ok(colour)
}

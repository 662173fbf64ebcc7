use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::raster_image::{RasterData, RasterImage, RasterImageError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratePixelBufferError {
    RasterImage(RasterImageError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RasterImage(err) => write!(f, "raster image error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RasterImage(err) => Some(err),
        }
    }
}

impl From<RasterImageError> for GeneratePixelBufferError {
    fn from(err: RasterImageError) -> Self {
        Self::RasterImage(err)
    }
}

/// Colours row-major per-pixel values into a raster of the given size.
///
/// Fails if `input` does not hold exactly `width * height` values.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    input: Vec<CMap::Input>,
    mapper: &CMap,
    width: u32,
    height: u32,
) -> Result<RasterImage, GeneratePixelBufferError> {
    let mut buffer: RasterData = Vec::with_capacity(input.len() * 3);

    for value in input {
        let Colour { r, g, b } = mapper.map(value);

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(RasterImage::from_data(width, height, buffer)?)
}

use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn dimensions_to_buffer_size(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum RasterImageError {
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for RasterImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch { expected, actual } => {
                write!(
                    f,
                    "raster expects {} bytes but buffer holds {}",
                    expected, actual
                )
            }
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} raster",
                    pixel.x, pixel.y, width, height
                )
            }
        }
    }
}

impl Error for RasterImageError {}

pub type RasterData = Vec<u8>;

/// An owned RGB raster, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: RasterData,
}

impl RasterImage {
    /// Allocates a raster filled with black.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; dimensions_to_buffer_size(width, height)],
        }
    }

    pub fn from_data(width: u32, height: u32, data: RasterData) -> Result<Self, RasterImageError> {
        let expected = dimensions_to_buffer_size(width, height);

        if expected != data.len() {
            return Err(RasterImageError::BoundsMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_bytes(self) -> RasterData {
        self.data
    }

    fn index_of(&self, pixel: Point) -> Result<usize, RasterImageError> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return Err(RasterImageError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            });
        }

        Ok((pixel.y as usize * self.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn get_pixel(&self, pixel: Point) -> Result<Colour, RasterImageError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), RasterImageError> {
        let index = self.index_of(pixel)?;

        self.data[index] = colour.r;
        self.data[index + 1] = colour.g;
        self.data[index + 2] = colour.b;

        Ok(())
    }

    /// Iterates colours in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Colour> + '_ {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|rgb| Colour {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            })
    }

    #[must_use]
    pub fn count_pixels(&self, colour: Colour) -> usize {
        self.pixels().filter(|&c| c == colour).count()
    }
}

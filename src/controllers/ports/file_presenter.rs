use std::error::Error;
use std::fmt;
use std::path::Path;

use crate::core::data::raster_image::RasterImage;

#[derive(Debug)]
pub enum PresentError {
    Io(std::io::Error),
    Encode(image::ImageError),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {}", err),
            Self::Encode(err) => write!(f, "encode error: {}", err),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PresentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for PresentError {
    fn from(err: image::ImageError) -> Self {
        Self::Encode(err)
    }
}

pub trait FilePresenterPort {
    fn present(&self, raster: &RasterImage, filepath: impl AsRef<Path>) -> Result<(), PresentError>;
}

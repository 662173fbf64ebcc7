use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::raster_image::RasterImage;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_png<W: Write>(raster: &RasterImage, writer: W) -> ImageResult<()> {
    PngEncoder::new(writer).write_image(
        raster.as_bytes(),
        raster.width(),
        raster.height(),
        ExtendedColorType::Rgb8,
    )
}

/// Encodes the raster as an in-memory PNG.
pub fn encode_png(raster: &RasterImage) -> ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_png(raster, &mut bytes)?;

    Ok(bytes)
}

#[derive(Debug, Default)]
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, raster: &RasterImage, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        let mut writer = BufWriter::new(File::create(filepath)?);
        write_png(raster, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

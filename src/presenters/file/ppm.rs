use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::raster_image::RasterImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_ppm<W: Write>(raster: &RasterImage, writer: &mut W) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", raster.width(), raster.height())?;
    writeln!(writer, "255")?;
    writer.write_all(raster.as_bytes())?;

    Ok(())
}

#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, raster: &RasterImage, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        let mut writer = BufWriter::new(File::create(filepath)?);
        write_ppm(raster, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

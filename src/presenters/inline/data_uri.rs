use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageResult;

use crate::core::data::raster_image::RasterImage;
use crate::presenters::file::png::encode_png;

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encodes the raster as a PNG `data:` URI suitable for an `<img src>`.
/// Nothing is written to disk.
pub fn png_data_uri(raster: &RasterImage) -> ImageResult<String> {
    let png = encode_png(raster)?;

    Ok(format!("{}{}", PNG_DATA_URI_PREFIX, STANDARD.encode(png)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_round_trips_through_base64() {
        let raster = RasterImage::new(4, 4);

        let uri = png_data_uri(&raster).unwrap();
        let payload = uri.strip_prefix(PNG_DATA_URI_PREFIX).unwrap();
        let decoded = STANDARD.decode(payload).unwrap();

        assert_eq!(decoded, encode_png(&raster).unwrap());
    }

    #[test]
    fn test_data_uri_is_deterministic() {
        let raster = RasterImage::new(8, 2);

        assert_eq!(png_data_uri(&raster).unwrap(), png_data_uri(&raster).unwrap());
    }
}

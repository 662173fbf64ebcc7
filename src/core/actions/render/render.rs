use std::error::Error;
use std::fmt;
use std::time::Instant;

use tracing::{debug, info};

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::raster_image::RasterImage;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::hsv_gradient::MandelbrotHsvGradient;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ExecutionStrategy, RenderConfig};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    InvalidViewport(ViewportError),
    PixelBuffer(GeneratePixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport(err) => write!(f, "invalid viewport: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidViewport(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ViewportError> for RenderError {
    fn from(err: ViewportError) -> Self {
        Self::InvalidViewport(err)
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Renders the Mandelbrot set over `viewport`.
///
/// The returned raster is exactly `pixel_width x pixel_height` and depends
/// only on the arguments; the execution strategy never changes a pixel.
pub fn render(viewport: &Viewport, config: &RenderConfig) -> Result<RasterImage, RenderError> {
    let width = viewport.pixel_width();
    let height = viewport.pixel_height();

    info!(
        width,
        height,
        center_x = viewport.center().real,
        center_y = viewport.center().imag,
        domain_width = viewport.domain_width(),
        max_iterations = config.max_iterations(),
        strategy = ?config.strategy(),
        "rendering mandelbrot set"
    );

    let start = Instant::now();
    let algorithm = MandelbrotAlgorithm::new(*viewport, config);
    let escape_results = match config.strategy() {
        ExecutionStrategy::Serial => generate_fractal_serial(&algorithm),
        ExecutionStrategy::Parallel => generate_fractal_parallel_rayon(&algorithm),
    };
    debug!(elapsed = ?start.elapsed(), pixels = escape_results.len(), "escape times computed");

    let colour_map = MandelbrotHsvGradient::from_config(config);
    debug!(colour_map = colour_map.display_name(), "colouring escape times");
    let raster = generate_pixel_buffer(escape_results, &colour_map, width, height)?;

    info!(elapsed = ?start.elapsed(), "render finished");

    Ok(raster)
}

/// Validates the region and renders it; see [`render`].
pub fn render_region(
    center_x: f64,
    center_y: f64,
    domain_width: f64,
    pixel_width: u32,
    pixel_height: u32,
    config: &RenderConfig,
) -> Result<RasterImage, RenderError> {
    let viewport = Viewport::new(center_x, center_y, domain_width, pixel_width, pixel_height)?;

    render(&viewport, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::escape_result::EscapeResult;
    use crate::core::data::point::Point;

    fn serial() -> RenderConfig {
        RenderConfig::default().with_strategy(ExecutionStrategy::Serial)
    }

    #[test]
    fn raster_matches_viewport_dimensions() {
        for (width, height) in [(1, 1), (7, 3), (3, 7), (64, 48)] {
            let viewport = Viewport::default_view(width, height).unwrap();

            let raster = render(&viewport, &RenderConfig::default()).unwrap();

            assert_eq!(raster.width(), width);
            assert_eq!(raster.height(), height);
            assert_eq!(raster.as_bytes().len(), (width * height * 3) as usize);
        }
    }

    #[test]
    fn render_is_deterministic() {
        let viewport = Viewport::new(-0.743, 0.131, 0.02, 96, 64).unwrap();
        let config = RenderConfig::default();

        let first = render(&viewport, &config).unwrap();
        let second = render(&viewport, &config).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn serial_and_parallel_are_bit_identical() {
        let viewport = Viewport::default_view(120, 90).unwrap();

        let parallel = render(&viewport, &RenderConfig::default()).unwrap();
        let serial = render(&viewport, &serial()).unwrap();

        assert_eq!(parallel.as_bytes(), serial.as_bytes());
    }

    #[test]
    fn known_points_are_coloured() {
        // columns map to re = -1, 0, 1, 2; row 1 maps to im = 0
        let viewport = Viewport::new(1.0, 0.0, 4.0, 4, 2).unwrap();
        let config = RenderConfig::default();
        let gradient = MandelbrotHsvGradient::from_config(&config);

        let raster = render(&viewport, &config).unwrap();

        assert_eq!(raster.get_pixel(Point { x: 0, y: 1 }), Ok(Colour::BLACK));
        assert_eq!(raster.get_pixel(Point { x: 1, y: 1 }), Ok(Colour::BLACK));
        assert_eq!(
            raster.get_pixel(Point { x: 2, y: 1 }),
            Ok(gradient.map(EscapeResult::Escaped { iteration: 1 }))
        );
        assert_eq!(
            raster.get_pixel(Point { x: 3, y: 1 }),
            Ok(gradient.map(EscapeResult::Escaped { iteration: 0 }))
        );
    }

    #[test]
    fn zero_iteration_budget_renders_black() {
        let viewport = Viewport::default_view(32, 24).unwrap();
        let config = RenderConfig::default().with_max_iterations(0);

        let raster = render(&viewport, &config).unwrap();

        assert_eq!(raster.count_pixels(Colour::BLACK), 32 * 24);
    }

    #[test]
    fn home_view_regression() {
        let viewport = Viewport::default_view(720, 540).unwrap();

        let raster = render(&viewport, &RenderConfig::default()).unwrap();
        let total = 720 * 540;
        let in_set = raster.count_pixels(Colour::BLACK);

        // about 17.5% of this view lies in the set
        assert!(in_set > total * 15 / 100, "too few set pixels: {}", in_set);
        assert!(in_set < total * 20 / 100, "too many set pixels: {}", in_set);

        assert_eq!(raster.get_pixel(Point { x: 360, y: 270 }), Ok(Colour::BLACK));
        for corner in [
            Point { x: 0, y: 0 },
            Point { x: 719, y: 0 },
            Point { x: 0, y: 539 },
            Point { x: 719, y: 539 },
        ] {
            assert!(!raster.get_pixel(corner).unwrap().is_black());
        }
    }

    #[test]
    fn render_region_rejects_invalid_viewport() {
        let config = RenderConfig::default();

        assert_eq!(
            render_region(-0.65, 0.0, 3.4, 0, 540, &config),
            Err(RenderError::InvalidViewport(
                ViewportError::NonPositivePixelDimensions {
                    width: 0,
                    height: 540
                }
            ))
        );
        assert_eq!(
            render_region(-0.65, 0.0, -3.4, 720, 540, &config),
            Err(RenderError::InvalidViewport(
                ViewportError::NonPositiveDomainWidth(-3.4)
            ))
        );
    }

    #[test]
    fn render_region_matches_render() {
        let config = RenderConfig::default();
        let viewport = Viewport::new(-0.5, 0.25, 1.5, 40, 30).unwrap();

        assert_eq!(
            render_region(-0.5, 0.25, 1.5, 40, 30, &config),
            render(&viewport, &config)
        );
    }
}

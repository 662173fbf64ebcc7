mod controllers;
mod core;
mod presenters;

pub use controllers::explorer::{ExplorerController, ExplorerError};
pub use controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use presenters::file::png::{PngFilePresenter, encode_png};
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::inline::data_uri::png_data_uri;

pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
pub use crate::core::actions::render::render::{RenderError, render, render_region};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_result::EscapeResult;
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::raster_image::{RasterImage, RasterImageError};
pub use crate::core::data::viewport::{DEFAULT_CENTER, DEFAULT_DOMAIN_WIDTH, Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use crate::core::fractals::mandelbrot::colour_maps::hsv_gradient::MandelbrotHsvGradient;
pub use crate::core::fractals::mandelbrot::errors::RenderConfigError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_DIVERGENCE_THRESHOLD, DEFAULT_MAX_ITERATIONS, DEFAULT_SATURATION, DEFAULT_VALUE,
    ExecutionStrategy, RenderConfig,
};
pub use crate::core::navigation::history::ViewHistory;
pub use crate::core::navigation::zoom::{ZoomError, zoom_to_selection};
pub use crate::core::util::hsv_to_rgb::hsv_to_rgb;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

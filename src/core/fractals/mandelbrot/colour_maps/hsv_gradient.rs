use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderConfig;
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

/// Colours escaped points by sweeping the hue wheel with the escape iteration.
///
/// Fast escapes are red; slower ones move through yellow, green, cyan, blue
/// and magenta. Points in the set are black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotHsvGradient {
    max_iterations: u32,
    saturation: f64,
    value: f64,
}

impl ColourMap for MandelbrotHsvGradient {
    type Input = EscapeResult;

    fn map(&self, result: EscapeResult) -> Colour {
        match result {
            EscapeResult::Escaped { iteration } => {
                hsv_to_rgb(self.hue(iteration), self.saturation, self.value)
            }
            EscapeResult::Bounded => Colour::BLACK,
        }
    }

    fn display_name(&self) -> &str {
        "HSV gradient"
    }
}

impl MandelbrotHsvGradient {
    #[must_use]
    pub fn new(max_iterations: u32, saturation: f64, value: f64) -> Self {
        Self {
            max_iterations,
            saturation,
            value,
        }
    }

    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.max_iterations(), config.saturation(), config.value())
    }

    /// Fraction of the iteration budget used before escaping, in `[0, 1)`.
    #[must_use]
    pub fn hue(&self, iteration: u32) -> f64 {
        if self.max_iterations == 0 {
            return 0.0;
        }

        f64::from(iteration) / f64::from(self.max_iterations)
    }
}

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderConfig;
use std::ops::ControlFlow;

/// Iterates `z -> z² + c` starting from `z = c`.
///
/// Iteration `i` (for `i` in `0..=max_iterations`) computes the next term and
/// tests `|z|² > divergence_threshold`. Only escapes at `i < max_iterations`
/// count; an orbit first crossing the threshold at `i == max_iterations` is
/// classified with the orbits that never cross it.
///
/// Overflow is an escape: infinite magnitudes compare greater than the
/// threshold and NaN magnitudes (from `inf - inf`) are treated the same way.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32, divergence_threshold: f64) -> EscapeResult {
    let outcome = (0..=max_iterations).try_fold(c, |z, iteration| {
        let next = z * z + c;
        let magnitude = next.magnitude_squared();

        if magnitude > divergence_threshold || magnitude.is_nan() {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) if iteration < max_iterations => {
            EscapeResult::Escaped { iteration }
        }
        _ => EscapeResult::Bounded,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
    divergence_threshold: f64,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeResult;

    fn compute(&self, pixel: Point) -> Self::Success {
        let c = self.viewport.pixel_to_complex(pixel);

        escape_time(c, self.max_iterations, self.divergence_threshold)
    }

    fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, config: &RenderConfig) -> Self {
        Self {
            viewport,
            max_iterations: config.max_iterations(),
            divergence_threshold: config.divergence_threshold(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

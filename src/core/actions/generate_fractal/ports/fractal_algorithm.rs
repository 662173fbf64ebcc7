use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Per-pixel computation driven by the fractal generators.
///
/// Implementations must be pure: the same pixel always yields the same output,
/// whatever order or thread it is computed on.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;

    fn viewport(&self) -> &Viewport;
}

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel of the algorithm's viewport on the calling thread,
/// in row-major order.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Success> {
    let viewport = algorithm.viewport();
    let width = viewport.pixel_width();

    (0..viewport.pixel_height())
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work. Each row is computed into its own vector and
/// the rows are concatenated in order, so the output is row-major and
/// identical to [`generate_fractal_serial`].
///
/// [`generate_fractal_serial`]: crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let viewport = algorithm.viewport();
    let width = viewport.pixel_width();

    let rows: Vec<Vec<Alg::Success>> = (0..viewport.pixel_height())
        .into_par_iter()
        .map(|y| (0..width).map(|x| algorithm.compute(Point { x, y })).collect())
        .collect();

    let mut results = Vec::with_capacity(viewport.pixel_count());
    for row in rows {
        results.extend(row);
    }

    results
}

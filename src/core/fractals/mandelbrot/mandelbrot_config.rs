use crate::core::fractals::mandelbrot::errors::RenderConfigError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 500;
pub const DEFAULT_DIVERGENCE_THRESHOLD: f64 = 4.0;
pub const DEFAULT_SATURATION: f64 = 0.7;
pub const DEFAULT_VALUE: f64 = 1.0;

/// How the raster's pixels are scheduled. Both produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    Serial,
    #[default]
    Parallel,
}

/// Parameters for one render, independent of the region being rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    max_iterations: u32,
    divergence_threshold: f64,
    saturation: f64,
    value: f64,
    strategy: ExecutionStrategy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            divergence_threshold: DEFAULT_DIVERGENCE_THRESHOLD,
            saturation: DEFAULT_SATURATION,
            value: DEFAULT_VALUE,
            strategy: ExecutionStrategy::default(),
        }
    }
}

fn unit_interval(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

impl RenderConfig {
    pub fn new(max_iterations: u32, divergence_threshold: f64) -> Result<Self, RenderConfigError> {
        Self::default()
            .with_max_iterations(max_iterations)
            .with_divergence_threshold(divergence_threshold)
    }

    #[must_use]
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    pub fn with_divergence_threshold(self, divergence_threshold: f64) -> Result<Self, RenderConfigError> {
        if !(divergence_threshold.is_finite() && divergence_threshold > 0.0) {
            return Err(RenderConfigError::InvalidDivergenceThreshold(
                divergence_threshold,
            ));
        }

        Ok(Self {
            divergence_threshold,
            ..self
        })
    }

    pub fn with_colour(self, saturation: f64, value: f64) -> Result<Self, RenderConfigError> {
        if !unit_interval(saturation) {
            return Err(RenderConfigError::InvalidSaturation(saturation));
        }

        if !unit_interval(value) {
            return Err(RenderConfigError::InvalidValue(value));
        }

        Ok(Self {
            saturation,
            value,
            ..self
        })
    }

    #[must_use]
    pub fn with_strategy(self, strategy: ExecutionStrategy) -> Self {
        Self { strategy, ..self }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn divergence_threshold(&self) -> f64 {
        self.divergence_threshold
    }

    #[must_use]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn strategy(&self) -> ExecutionStrategy {
        self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = RenderConfig::default();

        assert_eq!(config.max_iterations(), 500);
        assert_eq!(config.divergence_threshold(), 4.0);
        assert_eq!(config.saturation(), 0.7);
        assert_eq!(config.value(), 1.0);
        assert_eq!(config.strategy(), ExecutionStrategy::Parallel);
    }

    #[test]
    fn new_sets_iterations_and_threshold() {
        let config = RenderConfig::new(700, 9.0).unwrap();

        assert_eq!(config.max_iterations(), 700);
        assert_eq!(config.divergence_threshold(), 9.0);
    }

    #[test]
    fn zero_max_iterations_is_accepted() {
        assert!(RenderConfig::new(0, 4.0).is_ok());
    }

    #[test]
    fn threshold_must_be_positive_and_finite() {
        assert_eq!(
            RenderConfig::new(500, 0.0),
            Err(RenderConfigError::InvalidDivergenceThreshold(0.0))
        );
        assert_eq!(
            RenderConfig::new(500, -4.0),
            Err(RenderConfigError::InvalidDivergenceThreshold(-4.0))
        );
        assert!(RenderConfig::new(500, f64::NAN).is_err());
        assert!(RenderConfig::new(500, f64::INFINITY).is_err());
    }

    #[test]
    fn colour_parameters_must_be_in_unit_interval() {
        let config = RenderConfig::default();

        assert_eq!(
            config.with_colour(1.5, 1.0),
            Err(RenderConfigError::InvalidSaturation(1.5))
        );
        assert_eq!(
            config.with_colour(0.5, -0.1),
            Err(RenderConfigError::InvalidValue(-0.1))
        );

        let muted = config.with_colour(0.3, 0.9).unwrap();
        assert_eq!(muted.saturation(), 0.3);
        assert_eq!(muted.value(), 0.9);
    }

    #[test]
    fn builders_leave_other_fields_untouched() {
        let config = RenderConfig::default()
            .with_strategy(ExecutionStrategy::Serial)
            .with_max_iterations(64);

        assert_eq!(config.strategy(), ExecutionStrategy::Serial);
        assert_eq!(config.max_iterations(), 64);
        assert_eq!(config.divergence_threshold(), DEFAULT_DIVERGENCE_THRESHOLD);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            format!("{}", RenderConfigError::InvalidDivergenceThreshold(-1.0)),
            "divergence threshold must be positive and finite: -1"
        );
    }
}

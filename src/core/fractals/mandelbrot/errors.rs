use std::{error::Error, fmt};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderConfigError {
    InvalidDivergenceThreshold(f64),
    InvalidSaturation(f64),
    InvalidValue(f64),
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDivergenceThreshold(threshold) => {
                write!(
                    f,
                    "divergence threshold must be positive and finite: {}",
                    threshold
                )
            }
            Self::InvalidSaturation(saturation) => {
                write!(f, "saturation must be within [0, 1]: {}", saturation)
            }
            Self::InvalidValue(value) => {
                write!(f, "value must be within [0, 1]: {}", value)
            }
        }
    }
}

impl Error for RenderConfigError {}

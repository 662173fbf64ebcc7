use std::ops::{Add, Mul};

// kept hand-rolled; the iteration only needs add, mul and |z|²
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex {
            real: 3.0,
            imag: 4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_real_and_imag() {
        let c = Complex {
            real: -3.0,
            imag: -4.0,
        };
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_magnitude_squared_zero() {
        assert_eq!(Complex::ZERO.magnitude_squared(), 0.0);
    }

    #[test]
    fn test_magnitude_squared_overflow_is_infinite() {
        let c = Complex {
            real: f64::MAX,
            imag: 0.0,
        };
        assert!(c.magnitude_squared().is_infinite());
        assert!(c.magnitude_squared() > 4.0);
    }

    #[test]
    fn test_add() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: -3.0,
            imag: -7.0,
        };
        let result = a + b;
        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, -5.0);
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        let c = Complex {
            real: 2.0,
            imag: 3.0,
        };
        let result = c * c;
        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, 12.0);
    }

    #[test]
    fn test_conjugate() {
        let c = Complex {
            real: -0.5,
            imag: 0.25,
        };
        assert_eq!(
            c.conjugate(),
            Complex {
                real: -0.5,
                imag: -0.25
            }
        );
        assert_eq!(c.conjugate().conjugate(), c);
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::ZERO.is_finite());
        assert!(
            !Complex {
                real: f64::NAN,
                imag: 0.0
            }
            .is_finite()
        );
        assert!(
            !Complex {
                real: 0.0,
                imag: f64::INFINITY
            }
            .is_finite()
        );
    }
}

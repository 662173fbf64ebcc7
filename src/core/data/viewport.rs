use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER: Complex = Complex {
    real: -0.65,
    imag: 0.0,
};
pub const DEFAULT_DOMAIN_WIDTH: f64 = 3.4;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonPositivePixelDimensions { width: u32, height: u32 },
    NonPositiveDomainWidth(f64),
    NonFiniteCenter { x: f64, y: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositivePixelDimensions { width, height } => {
                write!(f, "viewport pixel size must be positive: {}x{}", width, height)
            }
            Self::NonPositiveDomainWidth(width) => {
                write!(f, "viewport domain width must be positive and finite: {}", width)
            }
            Self::NonFiniteCenter { x, y } => {
                write!(f, "viewport center must be finite: ({}, {})", x, y)
            }
        }
    }
}

impl Error for ViewportError {}

/// A rectangular region of the complex plane mapped onto a raster.
///
/// The horizontal extent is `domain_width`; the vertical extent follows from
/// the raster's aspect ratio so pixels are square. Row 0 is the top of the
/// image and maps to the largest imaginary value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center: Complex,
    domain_width: f64,
    pixel_width: u32,
    pixel_height: u32,
    domain_height: f64,
    x_min: f64,
    y_max: f64,
    x_scale: f64,
    y_scale: f64,
}

impl Viewport {
    pub fn new(
        center_x: f64,
        center_y: f64,
        domain_width: f64,
        pixel_width: u32,
        pixel_height: u32,
    ) -> Result<Self, ViewportError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(ViewportError::NonPositivePixelDimensions {
                width: pixel_width,
                height: pixel_height,
            });
        }

        if !(domain_width.is_finite() && domain_width > 0.0) {
            return Err(ViewportError::NonPositiveDomainWidth(domain_width));
        }

        if !(center_x.is_finite() && center_y.is_finite()) {
            return Err(ViewportError::NonFiniteCenter {
                x: center_x,
                y: center_y,
            });
        }

        let aspect_ratio = f64::from(pixel_width) / f64::from(pixel_height);
        let domain_height = domain_width / aspect_ratio;

        Ok(Self {
            center: Complex {
                real: center_x,
                imag: center_y,
            },
            domain_width,
            pixel_width,
            pixel_height,
            domain_height,
            x_min: center_x - domain_width / 2.0,
            y_max: center_y + domain_height / 2.0,
            x_scale: domain_width / f64::from(pixel_width),
            y_scale: domain_height / f64::from(pixel_height),
        })
    }

    /// The home view: the whole set, centred slightly left of the origin.
    pub fn default_view(pixel_width: u32, pixel_height: u32) -> Result<Self, ViewportError> {
        Self::new(
            DEFAULT_CENTER.real,
            DEFAULT_CENTER.imag,
            DEFAULT_DOMAIN_WIDTH,
            pixel_width,
            pixel_height,
        )
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn domain_width(&self) -> f64 {
        self.domain_width
    }

    #[must_use]
    pub fn domain_height(&self) -> f64 {
        self.domain_height
    }

    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.pixel_width) / f64::from(self.pixel_height)
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_min + self.domain_width
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_max - self.domain_height
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Plane rectangle as `(x_min, y_min, x_max, y_max)`.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x_min, self.y_min(), self.x_max(), self.y_max)
    }

    #[must_use]
    pub fn x_scale(&self) -> f64 {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> f64 {
        self.y_scale
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.pixel_width as usize * self.pixel_height as usize
    }

    #[must_use]
    pub fn contains_pixel(&self, pixel: Point) -> bool {
        pixel.x < self.pixel_width && pixel.y < self.pixel_height
    }

    /// Maps a pixel to the complex value used as the iteration constant.
    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        self.fractional_pixel_to_complex(f64::from(pixel.x), f64::from(pixel.y))
    }

    #[must_use]
    pub fn fractional_pixel_to_complex(&self, column: f64, row: f64) -> Complex {
        Complex {
            real: self.x_min + column * self.x_scale,
            imag: self.y_max - row * self.y_scale,
        }
    }

    /// Whether `point` lies inside the plane rectangle this viewport covers.
    #[must_use]
    pub fn contains(&self, point: Complex) -> bool {
        self.x_min <= point.real
            && point.real <= self.x_max()
            && self.y_min() <= point.imag
            && point.imag <= self.y_max
    }

    /// The pixel whose mapped value lies closest to `point`, if inside the raster.
    #[must_use]
    pub fn complex_to_pixel(&self, point: Complex) -> Option<Point> {
        let column = ((point.real - self.x_min) / self.x_scale).round();
        let row = ((self.y_max - point.imag) / self.y_scale).round();

        if !(column >= 0.0 && row >= 0.0) {
            return None;
        }

        let pixel = Point {
            x: column as u32,
            y: row as u32,
        };

        self.contains_pixel(pixel).then_some(pixel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn home_view() -> Viewport {
        Viewport::default_view(720, 540).unwrap()
    }

    #[test]
    fn test_derived_values() {
        let viewport = home_view();

        assert!((viewport.aspect_ratio() - 720.0 / 540.0).abs() < EPSILON);
        assert!((viewport.domain_height() - 2.55).abs() < EPSILON);
        assert!((viewport.x_min() - -2.35).abs() < EPSILON);
        assert!((viewport.y_max() - 1.275).abs() < EPSILON);
        assert!((viewport.x_scale() - 3.4 / 720.0).abs() < EPSILON);
        assert!((viewport.y_scale() - 2.55 / 540.0).abs() < EPSILON);
        assert_eq!(viewport.pixel_count(), 388_800);
    }

    #[test]
    fn test_bounds() {
        let viewport = Viewport::new(1.0, 0.0, 4.0, 4, 2).unwrap();

        assert_eq!(viewport.bounds(), (-1.0, -1.0, 3.0, 1.0));
    }

    #[test]
    fn test_top_left_pixel_maps_to_min_x_max_y() {
        let viewport = home_view();
        let c = viewport.pixel_to_complex(Point { x: 0, y: 0 });

        assert_eq!(c.real, viewport.x_min());
        assert_eq!(c.imag, viewport.y_max());
    }

    #[test]
    fn test_centre_pixel_maps_to_centre() {
        let viewport = home_view();
        let c = viewport.pixel_to_complex(Point { x: 360, y: 270 });

        assert!((c.real - -0.65).abs() < EPSILON);
        assert!(c.imag.abs() < EPSILON);
    }

    #[test]
    fn test_rows_go_down_the_plane_and_columns_go_right() {
        let viewport = home_view();
        let origin = viewport.pixel_to_complex(Point { x: 10, y: 10 });
        let right = viewport.pixel_to_complex(Point { x: 11, y: 10 });
        let below = viewport.pixel_to_complex(Point { x: 10, y: 11 });

        assert!(right.real > origin.real);
        assert_eq!(right.imag, origin.imag);
        assert!(below.imag < origin.imag);
        assert_eq!(below.real, origin.real);
    }

    #[test]
    fn test_zero_pixel_dimensions_fail() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, 0, 10),
            Err(ViewportError::NonPositivePixelDimensions {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, 1.0, 10, 0),
            Err(ViewportError::NonPositivePixelDimensions {
                width: 10,
                height: 0
            })
        );
    }

    #[test]
    fn test_non_positive_domain_width_fails() {
        assert_eq!(
            Viewport::new(0.0, 0.0, 0.0, 10, 10),
            Err(ViewportError::NonPositiveDomainWidth(0.0))
        );
        assert_eq!(
            Viewport::new(0.0, 0.0, -2.0, 10, 10),
            Err(ViewportError::NonPositiveDomainWidth(-2.0))
        );
        assert!(matches!(
            Viewport::new(0.0, 0.0, f64::NAN, 10, 10),
            Err(ViewportError::NonPositiveDomainWidth(_))
        ));
        assert!(matches!(
            Viewport::new(0.0, 0.0, f64::INFINITY, 10, 10),
            Err(ViewportError::NonPositiveDomainWidth(_))
        ));
    }

    #[test]
    fn test_non_finite_center_fails() {
        assert!(matches!(
            Viewport::new(f64::NAN, 0.0, 1.0, 10, 10),
            Err(ViewportError::NonFiniteCenter { .. })
        ));
    }

    #[test]
    fn test_single_pixel_viewport_is_valid() {
        let viewport = Viewport::new(0.0, 0.0, 1.0, 1, 1).unwrap();

        assert_eq!(
            viewport.pixel_to_complex(Point { x: 0, y: 0 }),
            Complex {
                real: -0.5,
                imag: 0.5
            }
        );
    }

    #[test]
    fn test_contains() {
        let viewport = home_view();

        assert!(viewport.contains(viewport.center()));
        assert!(viewport.contains(Complex {
            real: -2.0,
            imag: 1.0
        }));
        assert!(!viewport.contains(Complex {
            real: 1.1,
            imag: 0.0
        }));
        assert!(!viewport.contains(Complex {
            real: 0.0,
            imag: -1.3
        }));
    }

    #[test]
    fn test_complex_to_pixel_inverts_mapping() {
        let viewport = home_view();
        let pixel = Point { x: 123, y: 456 };

        assert_eq!(
            viewport.complex_to_pixel(viewport.pixel_to_complex(pixel)),
            Some(pixel)
        );
        assert_eq!(
            viewport.complex_to_pixel(Complex {
                real: 5.0,
                imag: 0.0
            }),
            None
        );
    }

    #[test]
    fn test_error_display() {
        let err = ViewportError::NonPositivePixelDimensions {
            width: 0,
            height: 540,
        };

        assert_eq!(format!("{}", err), "viewport pixel size must be positive: 0x540");
    }
}

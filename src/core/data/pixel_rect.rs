use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    Inverted { top_left: Point, bottom_right: Point },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted {
                top_left,
                bottom_right,
            } => {
                write!(
                    f,
                    "pixel rect corners are inverted: top-left (x: {}, y: {}) bottom-right (x: {}, y: {})",
                    top_left.x, top_left.y, bottom_right.x, bottom_right.y
                )
            }
        }
    }
}

impl Error for PixelRectError {}

/// An inclusive rectangle of pixels, e.g. a drag selection on a rendered raster.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        if bottom_right.x < top_left.x || bottom_right.y < top_left.y {
            return Err(PixelRectError::Inverted {
                top_left,
                bottom_right,
            });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Builds a rect from two opposite corners given in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            top_left: Point {
                x: a.x.min(b.x),
                y: a.y.min(b.y),
            },
            bottom_right: Point {
                x: a.x.max(b.x),
                y: a.y.max(b.y),
            },
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.bottom_right.x - self.top_left.x + 1
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom_right.y - self.top_left.y + 1
    }

    /// Centre in fractional pixel coordinates `(column, row)`, where pixel
    /// `(x, y)` covers the cell `[x, x + 1) x [y, y + 1)`.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.top_left.x) + f64::from(self.width()) / 2.0,
            f64::from(self.top_left.y) + f64::from(self.height()) / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }
}

use std::error::Error;
use std::fmt;

use tracing::debug;

use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::{Viewport, ViewportError};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomError {
    SelectionOutsideViewport {
        selection: PixelRect,
        width: u32,
        height: u32,
    },
    Viewport(ViewportError),
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectionOutsideViewport {
                selection,
                width,
                height,
            } => {
                write!(
                    f,
                    "selection top-left (x: {}, y: {}) bottom-right (x: {}, y: {}) is outside the {}x{} viewport",
                    selection.top_left().x,
                    selection.top_left().y,
                    selection.bottom_right().x,
                    selection.bottom_right().y,
                    width,
                    height
                )
            }
            Self::Viewport(err) => write!(f, "zoomed viewport is invalid: {}", err),
        }
    }
}

impl Error for ZoomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SelectionOutsideViewport { .. } => None,
            Self::Viewport(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ZoomError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

/// Turns a pixel selection on a raster rendered from `viewport` into the
/// viewport that fills the same raster size with the selected region.
///
/// The new centre is the plane point under the selection's centre; the new
/// domain width spans the selection's columns, so the zoomed raster's first
/// column samples the same real value as the selection's first column. The
/// vertical extent follows from the unchanged aspect ratio.
pub fn zoom_to_selection(viewport: &Viewport, selection: PixelRect) -> Result<Viewport, ZoomError> {
    let bottom_right = selection.bottom_right();

    if !viewport.contains_pixel(bottom_right) {
        return Err(ZoomError::SelectionOutsideViewport {
            selection,
            width: viewport.pixel_width(),
            height: viewport.pixel_height(),
        });
    }

    let (column, row) = selection.center();
    let center = viewport.fractional_pixel_to_complex(column, row);
    let domain_width = f64::from(selection.width()) * viewport.x_scale();

    debug!(
        center_x = center.real,
        center_y = center.imag,
        domain_width,
        magnification = viewport.domain_width() / domain_width,
        "zooming to selection"
    );

    Ok(Viewport::new(
        center.real,
        center.imag,
        domain_width,
        viewport.pixel_width(),
        viewport.pixel_height(),
    )?)
}

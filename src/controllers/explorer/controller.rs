use std::error::Error;
use std::fmt;
use std::path::Path;

use tracing::info;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::render::render::{RenderError, render};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::raster_image::RasterImage;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::RenderConfig;
use crate::core::navigation::history::ViewHistory;
use crate::core::navigation::zoom::{ZoomError, zoom_to_selection};

#[derive(Debug)]
pub enum ExplorerError {
    Render(RenderError),
    Zoom(ZoomError),
    Present(PresentError),
    PageOutOfRange { page: usize, page_count: usize },
    NothingRendered,
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Zoom(err) => write!(f, "zoom failed: {}", err),
            Self::Present(err) => write!(f, "present failed: {}", err),
            Self::PageOutOfRange { page, page_count } => {
                write!(f, "page {} does not exist, history has {} pages", page, page_count)
            }
            Self::NothingRendered => write!(f, "no image has been rendered yet"),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::Zoom(err) => Some(err),
            Self::Present(err) => Some(err),
            Self::PageOutOfRange { .. } | Self::NothingRendered => None,
        }
    }
}

impl From<RenderError> for ExplorerError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<ZoomError> for ExplorerError {
    fn from(err: ZoomError) -> Self {
        Self::Zoom(err)
    }
}

impl From<PresentError> for ExplorerError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}

/// Drives an exploration session: renders the current page of the view
/// history, zooms into pixel selections and hands the last raster to a
/// file presenter.
pub struct ExplorerController<P: FilePresenterPort> {
    presenter: P,
    config: RenderConfig,
    history: ViewHistory,
    raster: Option<RasterImage>,
}

impl<P: FilePresenterPort> ExplorerController<P> {
    pub fn new(presenter: P, home: Viewport, config: RenderConfig) -> Self {
        Self {
            presenter,
            config,
            history: ViewHistory::new(home),
            raster: None,
        }
    }

    pub fn render_current(&mut self) -> Result<&RasterImage, ExplorerError> {
        let raster = render(self.history.current(), &self.config)?;
        let raster: &RasterImage = self.raster.insert(raster);

        Ok(raster)
    }

    /// Zooms into `selection` (pixel coordinates of the current raster),
    /// records the result as a new page and renders it.
    pub fn zoom(&mut self, selection: PixelRect) -> Result<&RasterImage, ExplorerError> {
        let next = zoom_to_selection(self.history.current(), selection)?;
        let page = self.history.push(next);

        info!(
            page,
            center_x = next.center().real,
            center_y = next.center().imag,
            domain_width = next.domain_width(),
            "zoomed"
        );

        self.render_current()
    }

    pub fn go_to(&mut self, page: usize) -> Result<&RasterImage, ExplorerError> {
        let page_count = self.history.page_count();
        if self.history.go_to(page).is_none() {
            return Err(ExplorerError::PageOutOfRange { page, page_count });
        }

        self.render_current()
    }

    /// Returns `Ok(None)` when already on the first page.
    pub fn back(&mut self) -> Result<Option<&RasterImage>, ExplorerError> {
        if self.history.back().is_none() {
            return Ok(None);
        }

        self.render_current().map(Some)
    }

    /// Returns `Ok(None)` when already on the last page.
    pub fn forward(&mut self) -> Result<Option<&RasterImage>, ExplorerError> {
        if self.history.forward().is_none() {
            return Ok(None);
        }

        self.render_current().map(Some)
    }

    pub fn present(&self, filepath: impl AsRef<Path>) -> Result<(), ExplorerError> {
        let raster = self.raster.as_ref().ok_or(ExplorerError::NothingRendered)?;
        self.presenter.present(raster, filepath.as_ref())?;

        info!(path = %filepath.as_ref().display(), "image written");

        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        self.history.current()
    }

    #[must_use]
    pub fn history(&self) -> &ViewHistory {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn raster(&self) -> Option<&RasterImage> {
        self.raster.as_ref()
    }
}

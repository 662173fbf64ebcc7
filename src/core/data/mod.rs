pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod pixel_rect;
pub mod point;
pub mod raster_image;
pub mod viewport;

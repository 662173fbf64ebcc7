pub mod actions;
pub mod data;
pub mod fractals;
pub mod navigation;
pub mod util;

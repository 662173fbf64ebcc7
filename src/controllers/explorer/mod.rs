mod controller;

pub use controller::{ExplorerController, ExplorerError};

pub mod history;
pub mod zoom;

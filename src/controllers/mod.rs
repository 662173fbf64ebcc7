pub mod explorer;
pub mod ports;

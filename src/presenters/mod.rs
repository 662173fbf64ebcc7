pub mod file;
pub mod inline;

pub mod app;
pub mod draw;
pub mod proc;

pub type Err = Box<dyn std::error::Error>;
pub type Result<T> = std::result::Result<T, Err>;

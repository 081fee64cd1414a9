pub mod message;
pub mod event;
pub mod wire;
pub mod config;
pub mod error;


pub use error::WidgetError;
pub type Result<T> = std::result::Result<T, WidgetError>;

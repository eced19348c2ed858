pub mod cleaner;
pub mod prompt;
mod service;
mod types;

pub use service::*;
pub use types::*;

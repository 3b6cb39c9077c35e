pub mod error;
pub mod format;
pub mod logger;
pub mod output;

pub use error::*;
pub use output::*;

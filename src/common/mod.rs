/// Shared configuration, error types and logging setup
pub mod config;
pub mod error;
pub mod logging;
pub mod result;

pub use config::AnvilConfig;
pub use error::AnvilError;
pub use logging::LogConfig;
pub use result::AnvilResult;

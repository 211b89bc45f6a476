//! Persistent user preferences: theme, currency, locale and the last
//! category selection of the history filter.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::{Config, Theme};

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::{create_router, AppState, Server};
pub use config::lambda::LambdaConfig;
pub use config::toml_config::TomlConfig;
pub use core::roman::{arabic_to_roman, roman_to_arabic, RomanNumeral};
pub use core::service::ConversionService;
pub use utils::error::{AppError, ConversionError, Result};

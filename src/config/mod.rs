//! Storefront configuration: TOML file, defaults and validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, LoginConfig, UiConfig, DEFAULT_CATALOG_ENDPOINT};

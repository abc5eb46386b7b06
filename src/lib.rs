pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use core::engine::FetchEngine;
pub use domain::model::FetchReport;
pub use utils::error::{FetchError, Result};

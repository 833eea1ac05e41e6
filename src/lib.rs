pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::http::HttpRecommendationClient;
pub use core::{handler::SubmissionHandler, page::FormPage};
pub use utils::error::{AdvisorError, Result};

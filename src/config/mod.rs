#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::http::DEFAULT_ENDPOINT;
#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, FieldIds};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "crop-advisor")]
#[command(about = "Submit soil conditions and print crop recommendations")]
pub struct CliConfig {
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub base_url: String,

    #[arg(long, help = "TOML configuration file; overrides --base-url")]
    pub config: Option<String>,

    #[command(flatten)]
    pub form: cli::FormValues,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_path(&self) -> &str {
        DEFAULT_ENDPOINT
    }

    fn field_ids(&self) -> FieldIds {
        FieldIds::default()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("--base-url", &self.base_url)?;
        if let Some(path) = &self.config {
            validation::validate_non_empty_string("--config", path)?;
        }
        Ok(())
    }
}

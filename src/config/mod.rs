pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "realty-predict")]
#[command(about = "Serves a single-page form that predicts real-estate unit-area price")]
pub struct CliConfig {
    /// Path to the pre-trained model artifact (JSON)
    #[arg(long, default_value = "model.json")]
    pub model_path: String,

    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value = "8080")]
    pub port: u16,

    /// Optional TOML configuration file; takes precedence over the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_host(&self) -> &str {
        &self.host
    }

    fn bind_port(&self) -> u16 {
        self.port
    }

    fn model_path(&self) -> &str {
        &self.model_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("model_path", &self.model_path)?;
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_range("port", self.port, 1, 65535)?;
        Ok(())
    }
}

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

pub use adapters::linear_model::LinearModel;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::dispatcher::Dispatcher;
pub use domain::model::{FeatureInput, FeatureVector, FEATURE_COLUMNS};
pub use domain::ports::{ConfigProvider, Predictor};
pub use utils::error::{AppError, Result};

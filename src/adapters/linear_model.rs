use crate::core::{FeatureVector, Predictor, Result, FEATURE_COLUMNS};
use crate::utils::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pre-trained linear regression artifact, exported as a JSON document with
/// the trained column names, one coefficient per column, and the intercept.
/// Loaded once at startup and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        let model: LinearModel = serde_json::from_str(&content)?;
        model.validate_shape()?;

        tracing::info!(
            "Loaded linear model with {} feature columns from {}",
            model.feature_names.len(),
            path.as_ref().display()
        );
        Ok(model)
    }

    fn validate_shape(&self) -> Result<()> {
        if self.feature_names.is_empty() {
            return Err(AppError::ModelFormatError {
                message: "model has no feature columns".to_string(),
            });
        }

        if self.feature_names.len() != self.coefficients.len() {
            return Err(AppError::ModelFormatError {
                message: format!(
                    "{} feature names but {} coefficients",
                    self.feature_names.len(),
                    self.coefficients.len()
                ),
            });
        }

        Ok(())
    }

    /// The incoming record must carry exactly the columns the model was
    /// trained with, in the same order.
    fn check_column_contract(&self, row_len: usize) -> Result<()> {
        if self.feature_names.len() != row_len {
            return Err(AppError::PredictionError {
                message: format!(
                    "expected {} feature columns, got {}",
                    self.feature_names.len(),
                    row_len
                ),
            });
        }

        for (trained, sent) in self.feature_names.iter().zip(FEATURE_COLUMNS.iter()) {
            if trained != sent {
                return Err(AppError::PredictionError {
                    message: format!(
                        "feature column mismatch: model was trained with '{}', request sends '{}'",
                        trained, sent
                    ),
                });
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Predictor for LinearModel {
    async fn predict(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        let row = features.to_row();
        self.check_column_contract(row.len())?;

        let value = self.intercept
            + self
                .coefficients
                .iter()
                .zip(row.iter())
                .map(|(coefficient, x)| coefficient * x)
                .sum::<f64>();

        Ok(vec![value])
    }
}

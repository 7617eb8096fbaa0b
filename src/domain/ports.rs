use crate::domain::model::FeatureVector;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Inference capability of a pre-trained model. Implementations return a
/// sequence of predicted values (one per input row; this service always
/// sends exactly one row) and report failures as structured errors rather
/// than panicking.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, features: &FeatureVector) -> Result<Vec<f64>>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_host(&self) -> &str;
    fn bind_port(&self) -> u16;
    fn model_path(&self) -> &str;
}

pub mod dispatcher;

pub use crate::domain::model::{FeatureInput, FeatureVector, FEATURE_COLUMNS};
pub use crate::domain::ports::{ConfigProvider, Predictor};
pub use crate::utils::error::Result;

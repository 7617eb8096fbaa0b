use crate::core::{FeatureInput, FeatureVector, Predictor};

pub const MISSING_INPUT_MESSAGE: &str = "Please enter all values to get a prediction";

/// Decides whether to attempt a prediction for one submit action and renders
/// the outcome as a display string. Holds the loaded model behind the
/// `Predictor` port; it is the only long-lived state and is never mutated.
pub struct Dispatcher<P: Predictor> {
    predictor: P,
}

impl<P: Predictor> Dispatcher<P> {
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    /// `clicks` counts submit actions so far; 0 means the form has not been
    /// submitted yet and yields an empty string. Never returns an error:
    /// every failure is mapped to a display string. The predicted value is
    /// formatted to two decimal places with Rust's default float rounding
    /// (round half to even).
    pub async fn handle(&self, clicks: u64, input: &FeatureInput) -> String {
        if clicks == 0 {
            return String::new();
        }

        let features = match FeatureVector::from_input(input) {
            Some(features) => features,
            None => return MISSING_INPUT_MESSAGE.to_string(),
        };

        tracing::debug!("Running prediction for row: {:?}", features.to_row());

        match self.predictor.predict(&features).await {
            Ok(values) => match values.first() {
                Some(value) => format!("Predicted House Price of Unit Area: {:.2}", value),
                None => "Error during prediction: model returned no predictions".to_string(),
            },
            Err(e) => {
                tracing::warn!("Prediction failed: {}", e);
                format!("Error during prediction: {}", e)
            }
        }
    }
}

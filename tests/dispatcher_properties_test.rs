use async_trait::async_trait;
use realty_predict::{AppError, Dispatcher, FeatureInput, FeatureVector, Predictor, Result};

struct FixedPredictor {
    values: Vec<f64>,
}

#[async_trait]
impl Predictor for FixedPredictor {
    async fn predict(&self, _features: &FeatureVector) -> Result<Vec<f64>> {
        Ok(self.values.clone())
    }
}

struct FailingPredictor {
    description: String,
}

#[async_trait]
impl Predictor for FailingPredictor {
    async fn predict(&self, _features: &FeatureVector) -> Result<Vec<f64>> {
        Err(AppError::PredictionError {
            message: self.description.clone(),
        })
    }
}

fn complete_input() -> FeatureInput {
    FeatureInput {
        house_age: Some(8.0),
        distance_to_mrt: Some(104.81),
        num_convenience_stores: Some(5),
        latitude: Some(24.96674),
        longitude: Some(121.54067),
    }
}

#[tokio::test]
async fn test_zero_clicks_always_empty() {
    let dispatcher = Dispatcher::new(FixedPredictor {
        values: vec![123.456],
    });

    assert_eq!(dispatcher.handle(0, &complete_input()).await, "");
    assert_eq!(dispatcher.handle(0, &FeatureInput::default()).await, "");
}

#[tokio::test]
async fn test_any_missing_field_yields_instruction() {
    let dispatcher = Dispatcher::new(FixedPredictor {
        values: vec![123.456],
    });

    // each field absent in turn
    for missing in 0..5 {
        let mut input = complete_input();
        match missing {
            0 => input.house_age = None,
            1 => input.distance_to_mrt = None,
            2 => input.num_convenience_stores = None,
            3 => input.latitude = None,
            _ => input.longitude = None,
        }

        assert_eq!(
            dispatcher.handle(1, &input).await,
            "Please enter all values to get a prediction"
        );
    }
}

#[tokio::test]
async fn test_successful_prediction_message() {
    let dispatcher = Dispatcher::new(FixedPredictor {
        values: vec![123.456],
    });

    assert_eq!(
        dispatcher.handle(1, &complete_input()).await,
        "Predicted House Price of Unit Area: 123.46"
    );
}

#[tokio::test]
async fn test_failure_description_is_embedded_verbatim() {
    let dispatcher = Dispatcher::new(FailingPredictor {
        description: "bad shape".to_string(),
    });

    assert_eq!(
        dispatcher.handle(1, &complete_input()).await,
        "Error during prediction: bad shape"
    );
}

#[tokio::test]
async fn test_repeated_calls_are_deterministic() {
    let dispatcher = Dispatcher::new(FixedPredictor {
        values: vec![47.305],
    });

    let outputs = [
        dispatcher.handle(5, &complete_input()).await,
        dispatcher.handle(5, &complete_input()).await,
        dispatcher.handle(5, &complete_input()).await,
    ];

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}

use serde::{Deserialize, Serialize};

/// Column names the model artifact was trained with, in training order.
/// The order is part of the model contract and must never change.
pub const FEATURE_COLUMNS: [&str; 5] = [
    "House age",
    "Distance to the nearest MRT station",
    "Number of convenience stores",
    "Latitude",
    "Longitude",
];

/// Raw form values as submitted by the page; every field is independently
/// optional until the user has filled it in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureInput {
    pub house_age: Option<f64>,
    pub distance_to_mrt: Option<f64>,
    pub num_convenience_stores: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// One complete single-row feature record, built fresh per request and
/// discarded once the response is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub house_age: f64,
    pub distance_to_mrt: f64,
    pub num_convenience_stores: u32,
    pub latitude: f64,
    pub longitude: f64,
}

impl FeatureVector {
    /// Returns `None` unless all five fields are present.
    pub fn from_input(input: &FeatureInput) -> Option<Self> {
        Some(Self {
            house_age: input.house_age?,
            distance_to_mrt: input.distance_to_mrt?,
            num_convenience_stores: input.num_convenience_stores?,
            latitude: input.latitude?,
            longitude: input.longitude?,
        })
    }

    /// Values in the fixed `FEATURE_COLUMNS` order.
    pub fn to_row(&self) -> [f64; 5] {
        [
            self.house_age,
            self.distance_to_mrt,
            f64::from(self.num_convenience_stores),
            self.latitude,
            self.longitude,
        ]
    }
}

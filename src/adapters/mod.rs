// Adapters layer: concrete implementations for external systems (model artifacts, http surface).

pub mod linear_model;

use super::ml::SalaryModel;
use crate::domain::errors::InferenceError;
use crate::domain::features::FeatureRecord;
use std::sync::Arc;

/// Currency every prediction is denominated in.
pub const CURRENCY: &str = "THB";

/// A single rounded prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub salary: f64,
    pub currency: &'static str,
}

/// Wraps the loaded model and owns the invocation contract: fixed feature
/// order, single output, rounded to 2 decimal places.
///
/// The model is injected at construction so tests can substitute a stub.
pub struct PredictionService {
    model: Arc<dyn SalaryModel>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn SalaryModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Runs one inference and rounds the result. Backend failures
    /// propagate unretried; the boundary maps them to a 500.
    pub fn predict(&self, features: &FeatureRecord) -> Result<PredictionResult, InferenceError> {
        let raw = self.model.predict(features)?;
        Ok(PredictionResult {
            salary: round2(raw),
            currency: CURRENCY,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

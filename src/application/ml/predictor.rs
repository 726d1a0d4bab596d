use crate::domain::errors::InferenceError;
use crate::domain::features::FeatureRecord;

/// Interface for loaded salary regression models.
pub trait SalaryModel: Send + Sync + std::fmt::Debug {
    /// Runs a single inference over one validated record and returns the
    /// raw (unrounded) predicted salary.
    fn predict(&self, features: &FeatureRecord) -> Result<f64, InferenceError>;

    /// Get model name/type
    fn name(&self) -> &str;
}

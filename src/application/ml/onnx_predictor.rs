use super::predictor::SalaryModel;
use crate::domain::errors::{InferenceError, ModelError};
use crate::domain::features::{FEATURE_FIELDS, FeatureRecord};
use ort::session::Session;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// Salary regression backed by an ONNX artifact.
///
/// The session is created once at load time and never replaced. `ort`
/// requires exclusive access to the session for each run, so it sits
/// behind a `Mutex`; the artifact itself is never mutated.
#[derive(Debug)]
pub struct OnnxSalaryModel {
    session: Mutex<Session>,
    path: PathBuf,
}

impl OnnxSalaryModel {
    /// Loads the artifact and probe-runs a single row against it, so an
    /// artifact trained for a different input shape is rejected here
    /// rather than on the first live request.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let mut builder = Session::builder().map_err(|e| ModelError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let session = builder
            .commit_from_file(path)
            .map_err(|e| ModelError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let model = Self {
            session: Mutex::new(session),
            path: path.to_path_buf(),
        };

        let probe = FeatureRecord {
            age: 30,
            gender: 1,
            education_level: 1,
            years_experience: 5,
        };
        model.run(&probe).map_err(|e| ModelError::ShapeMismatch {
            path: model.path.clone(),
            expected: FEATURE_FIELDS.len(),
            reason: e.to_string(),
        })?;

        info!("Loaded ONNX model from {:?}", model.path);
        Ok(model)
    }

    fn run(&self, features: &FeatureRecord) -> Result<f64, InferenceError> {
        let input_vec = features.to_f32_vector();
        let shape = vec![1, input_vec.len()];

        let input_value = ort::value::Value::from_array((shape.as_slice(), input_vec))
            .map_err(|e| InferenceError::InputConstruction {
                reason: e.to_string(),
            })?;
        let inputs = ort::inputs![input_value];

        let mut session = self.session.lock().map_err(|e| InferenceError::Backend {
            reason: format!("Session lock poisoned: {}", e),
        })?;

        let outputs = session.run(inputs).map_err(|e| InferenceError::Backend {
            reason: e.to_string(),
        })?;
        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or(InferenceError::EmptyOutput)?;
        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Backend {
                reason: e.to_string(),
            })?;
        let first = data.1.iter().next().ok_or(InferenceError::EmptyOutput)?;
        Ok(*first as f64)
    }
}

impl SalaryModel for OnnxSalaryModel {
    fn predict(&self, features: &FeatureRecord) -> Result<f64, InferenceError> {
        self.run(features)
    }

    fn name(&self) -> &str {
        "ONNX Runtime regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_is_fatal() {
        let err = OnnxSalaryModel::load(Path::new("non_existent.onnx")).unwrap_err();
        assert!(matches!(err, ModelError::NotFound { .. }));
    }
}

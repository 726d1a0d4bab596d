use super::predictor::SalaryModel;
use crate::domain::errors::{InferenceError, ModelError};
use crate::domain::features::{FEATURE_FIELDS, FeatureRecord};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use std::path::Path;
use tracing::info;

/// Salary regression backed by a serde-serialized smartcore estimator.
///
/// The artifact is the JSON form of a fitted linear regression. Inference
/// takes `&self`, so the loaded model is shared across requests with no
/// locking.
#[derive(Debug)]
pub struct SmartCoreSalaryModel {
    model: LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>,
}

impl SmartCoreSalaryModel {
    /// Loads and probe-runs the artifact. Errors are fatal to startup.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path).map_err(|source| ModelError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let model = serde_json::from_slice(&bytes).map_err(|e| ModelError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let loaded = Self { model };

        let probe = FeatureRecord {
            age: 30,
            gender: 1,
            education_level: 1,
            years_experience: 5,
        };
        loaded.run(&probe).map_err(|e| ModelError::ShapeMismatch {
            path: path.to_path_buf(),
            expected: FEATURE_FIELDS.len(),
            reason: e.to_string(),
        })?;

        info!("Loaded smartcore model from {:?}", path);
        Ok(loaded)
    }

    fn run(&self, features: &FeatureRecord) -> Result<f64, InferenceError> {
        let row = features.to_f64_vector();
        let matrix = DenseMatrix::from_2d_vec(&vec![row]).map_err(|e| {
            InferenceError::InputConstruction {
                reason: e.to_string(),
            }
        })?;

        let predictions = self
            .model
            .predict(&matrix)
            .map_err(|e| InferenceError::Backend {
                reason: e.to_string(),
            })?;
        predictions
            .first()
            .copied()
            .ok_or(InferenceError::EmptyOutput)
    }
}

impl SalaryModel for SmartCoreSalaryModel {
    fn predict(&self, features: &FeatureRecord) -> Result<f64, InferenceError> {
        self.run(features)
    }

    fn name(&self) -> &str {
        "SmartCore linear regression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcore::linear::linear_regression::LinearRegressionParameters;

    #[test]
    fn test_missing_artifact_is_fatal() {
        let err = SmartCoreSalaryModel::load(Path::new("non_existent.json")).unwrap_err();
        assert!(matches!(err, ModelError::NotFound { .. }));
    }

    #[test]
    fn test_corrupt_artifact_is_fatal() {
        let path = std::env::temp_dir().join("salarycast_corrupt_model.json");
        std::fs::write(&path, b"{ not a model }").unwrap();

        let err = SmartCoreSalaryModel::load(&path).unwrap_err();
        assert!(matches!(err, ModelError::Corrupt { .. }));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_serialized_artifact_round_trip() {
        let x = DenseMatrix::from_2d_vec(&vec![
            vec![25.0, 0.0, 0.0, 2.0],
            vec![30.0, 1.0, 1.0, 5.0],
            vec![40.0, 0.0, 2.0, 15.0],
            vec![50.0, 1.0, 1.0, 25.0],
            vec![35.0, 1.0, 0.0, 10.0],
        ])
        .unwrap();
        let y = vec![30_000.0, 55_000.0, 90_000.0, 110_000.0, 60_000.0];
        let fitted = LinearRegression::fit(&x, &y, LinearRegressionParameters::default()).unwrap();

        let path = std::env::temp_dir().join("salarycast_roundtrip_model.json");
        std::fs::write(&path, serde_json::to_vec(&fitted).unwrap()).unwrap();

        let model = SmartCoreSalaryModel::load(&path).unwrap();
        let record = FeatureRecord {
            age: 30,
            gender: 1,
            education_level: 1,
            years_experience: 5,
        };

        // Fixed model + fixed input must be reproducible
        let first = model.run(&record).unwrap();
        let second = model.run(&record).unwrap();
        assert_eq!(first, second);
        assert!(first.is_finite());

        std::fs::remove_file(&path).ok();
    }
}

mod onnx_predictor;
mod predictor;
mod smartcore_predictor;

pub use onnx_predictor::OnnxSalaryModel;
pub use predictor::SalaryModel;
pub use smartcore_predictor::SmartCoreSalaryModel;

use crate::domain::errors::ModelError;
use std::path::Path;
use std::sync::Arc;

/// Loads the model artifact at `path`, picking the backend from the file
/// extension: `.onnx` for ONNX Runtime, `.json` for a serde-serialized
/// smartcore estimator.
///
/// Called once at startup. Any error here must abort the process before
/// the listener binds.
pub fn load_model(path: &Path) -> Result<Arc<dyn SalaryModel>, ModelError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("onnx") => Ok(Arc::new(OnnxSalaryModel::load(path)?)),
        Some("json") => Ok(Arc::new(SmartCoreSalaryModel::load(path)?)),
        _ => Err(ModelError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_rejected() {
        let err = load_model(Path::new("SalaryPredict.pkl")).unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_artifact_rejected() {
        let err = load_model(Path::new("no_such_model.json")).unwrap_err();
        assert!(matches!(err, ModelError::NotFound { .. }));
    }
}

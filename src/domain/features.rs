/// Closed integer bound for a single model input field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub min: i64,
    pub max: i64,
}

/// Ordered schema of the model's input fields.
/// This order MUST match exactly with the order used in the Python training
/// scripts. Any change here is a breaking change for deployed model artifacts.
pub const FEATURE_FIELDS: [FieldSpec; 4] = [
    FieldSpec {
        name: "Age",
        min: 20,
        max: 55,
    },
    FieldSpec {
        name: "Gender",
        min: 0,
        max: 1,
    },
    FieldSpec {
        name: "Education_Level",
        min: 0,
        max: 2,
    },
    FieldSpec {
        name: "Years_of_Experience",
        min: 0,
        max: 30,
    },
];

/// A fully validated input record.
///
/// `gender`: 0 = female, 1 = male. `education_level`: 0 = bachelor's,
/// 1 = master's, 2 = doctorate. Construction goes through
/// [`crate::domain::validation::validate`], which enforces the bounds in
/// [`FEATURE_FIELDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureRecord {
    pub age: i64,
    pub gender: i64,
    pub education_level: i64,
    pub years_experience: i64,
}

impl FeatureRecord {
    /// Converts the record into an f32 vector for ONNX inference.
    pub fn to_f32_vector(&self) -> Vec<f32> {
        vec![
            self.age as f32,
            self.gender as f32,
            self.education_level as f32,
            self.years_experience as f32,
        ]
    }

    /// Converts the record into an f64 vector for smartcore inference.
    /// Same order as `to_f32_vector`.
    pub fn to_f64_vector(&self) -> Vec<f64> {
        vec![
            self.age as f64,
            self.gender as f64,
            self.education_level as f64,
            self.years_experience as f64,
        ]
    }
}

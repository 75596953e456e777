use image::RgbImage;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("EngineUnavailable")]
    EngineUnavailable,
    #[error("UnsupportedInput: {0}")]
    UnsupportedInput(String),
    #[error("ModelError: {0}")]
    Model(String),
}

/// A pre-trained classifier. Returns labels ordered by descending confidence.
pub trait ImageClassifier: Send + Sync {
    fn classify(
        &self,
        frame: &RgbImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}

use crate::image_classifier::models::model_config::ModelConfig;
use chrono::{Offset, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineConfig {
    /// Scripted answer, no model needed.
    Fake,
    /// Random ranked labels, for demos.
    Random,
    Onnx(ModelConfig),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub logger_timezone: chrono::FixedOffset,
    pub engine: EngineConfig,
    /// How many ranked labels an engine keeps per image.
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logger_timezone: Utc.fix(),
            engine: EngineConfig::Random,
            top_k: 5,
        }
    }
}

pub mod impl_fake;
pub mod impl_random;
pub mod impl_tract_onnx;
pub mod interface;
pub mod labels;
pub mod models;
pub mod ranking;
pub mod tract;

use crate::config::{Config, EngineConfig};
use crate::library::logger::interface::Logger;
use impl_fake::ImageClassifierFake;
use impl_random::ImageClassifierRandom;
use impl_tract_onnx::ImageClassifierTractOnnx;
use interface::ImageClassifier;
use std::sync::Arc;

pub fn from_config(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn ImageClassifier + Send + Sync>, Box<dyn std::error::Error + Send + Sync>> {
    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = match &config.engine {
        EngineConfig::Fake => Arc::new(ImageClassifierFake::new(logger)),
        EngineConfig::Random => Arc::new(ImageClassifierRandom::new(logger, config.top_k)),
        EngineConfig::Onnx(model_config) => Arc::new(ImageClassifierTractOnnx::new(
            model_config.clone(),
            config.top_k,
            logger,
        )?),
    };

    Ok(image_classifier)
}

use crate::image_classifier::interface::{Classification, ClassifierError, ImageClassifier};
use crate::image_classifier::labels::load_labels;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::ranking::classify_scores;
use crate::image_classifier::tract::image::frame_to_tensor;
use crate::library::logger::interface::Logger;
use image::RgbImage;
use std::sync::Arc;
use tract_onnx::prelude::*;

/// ImageNet-style classifier (one score per class) run through tract.
pub struct ImageClassifierTractOnnx {
    model: TypedRunnableModel<TypedModel>,
    labels: Vec<String>,
    config: ModelConfig,
    top_k: usize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        top_k: usize,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger
            .with_namespace("image_classifier")
            .with_namespace("tract_onnx");

        let labels = load_labels(&config.labels_path)?;
        let (height, width) = config.input_shape;

        logger.info(&format!(
            "Loading model {} ({} labels)",
            config.onnx_model_path.display(),
            labels.len()
        ))?;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)?
            .with_input_fact(0, f32::fact([1, 3, height as usize, width as usize]).into())?
            .into_optimized()?
            .into_runnable()?;

        Ok(Self {
            model,
            labels,
            config,
            top_k: top_k.max(1),
            logger,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(
        &self,
        frame: &RgbImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let (height, width) = self.config.input_shape;
        let input = frame_to_tensor(frame, width, height, &self.config.normalization);

        let outputs = self.model.run(tvec!(input.into_tvalue()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifierError::Model("model produced no outputs".to_string()))?;

        let scores: Vec<f32> = output.to_array_view::<f32>()?.iter().copied().collect();

        if scores.is_empty() {
            return Err(ClassifierError::Model("model produced an empty output".to_string()).into());
        }

        let classifications = classify_scores(&scores, &self.labels, self.top_k);

        self.logger
            .info(&format!("Classifications: {:?}", classifications))?;

        Ok(classifications)
    }
}

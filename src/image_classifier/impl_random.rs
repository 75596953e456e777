use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::RgbImage;
use rand::distr::{Distribution, Uniform};
use rand::seq::SliceRandom;
use std::sync::Arc;

const OBJECTS: [&str; 18] = [
    "dog", "cat", "person", "car", "chair", "table", "bird", "tree", "bicycle", "book", "laptop",
    "phone", "cup", "bottle", "keyboard", "mouse", "plant", "clock",
];

/// Demo classifier that ranks a few random labels. Ignores the pixels.
pub struct ImageClassifierRandom {
    logger: Arc<dyn Logger + Send + Sync>,
    top_k: usize,
}

impl ImageClassifierRandom {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, top_k: usize) -> Self {
        Self {
            logger: logger
                .with_namespace("image_classifier")
                .with_namespace("random"),
            top_k: top_k.clamp(1, OBJECTS.len()),
        }
    }
}

impl ImageClassifier for ImageClassifierRandom {
    fn classify(
        &self,
        _frame: &RgbImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Classifying image with random classifier...")?;

        let mut rng = rand::rng();

        let confidence_dist = Uniform::new(0.0f32, 1.0)?;

        let mut labels = OBJECTS.to_vec();
        labels.shuffle(&mut rng);

        let mut classifications: Vec<Classification> = labels
            .into_iter()
            .take(self.top_k)
            .map(|label| Classification::new(label, confidence_dist.sample(&mut rng)))
            .collect();

        classifications.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        Ok(classifications)
    }
}

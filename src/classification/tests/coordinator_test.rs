use crate::classification::coordinator::{Coordinator, CoordinatorError};
use crate::classification::core::Outcome;
use crate::classification::tests::fixture::{unconvertible_image, valid_image, Fixture};
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::interface::{Classification, ClassifierError, ImageClassifier};
use crate::image_input::interface::ImageConversionError;
use crate::library::logger::impl_fake::LoggerFake;
use image::RgbImage;
use std::sync::Arc;

fn ready(label: &str) -> Outcome {
    Outcome::Ready {
        label: label.to_string(),
    }
}

#[test]
fn test_starts_idle() {
    let f = Fixture::new();

    assert_eq!(f.coordinator.current_outcome(), Outcome::Idle);
    assert!(!f.coordinator.is_busy());
}

#[test]
fn test_detect_publishes_top_label() {
    let f = Fixture::new();

    f.coordinator.detect(&valid_image()).unwrap();

    assert_eq!(f.coordinator.current_outcome(), ready("cat"));
    assert_eq!(f.image_classifier.calls(), 1);
}

#[test]
fn test_detect_uses_highest_confidence_not_position() {
    let logger = Arc::new(LoggerFake::new());
    let image_classifier = Arc::new(ImageClassifierFake::returning(
        logger.clone(),
        vec![
            Classification::new("bicycle", 0.2),
            Classification::new("laptop", 0.7),
        ],
    ));
    let f = Fixture::with(logger, image_classifier);

    f.coordinator.detect(&valid_image()).unwrap();

    assert_eq!(f.coordinator.current_outcome(), ready("laptop"));
}

#[test]
fn test_engine_error_publishes_failure() {
    let logger = Arc::new(LoggerFake::new());
    let image_classifier = Arc::new(ImageClassifierFake::failing(
        logger.clone(),
        ClassifierError::EngineUnavailable,
    ));
    let f = Fixture::with(logger, image_classifier);

    let result = f.coordinator.detect(&valid_image());

    assert_eq!(result, Ok(()));
    assert_eq!(
        f.coordinator.current_outcome(),
        Outcome::Failed {
            reason: "EngineUnavailable".to_string()
        }
    );
    assert!(f.logger.contains("Classifier failed: EngineUnavailable"));
}

#[test]
fn test_engine_error_reason_is_never_empty() {
    let logger = Arc::new(LoggerFake::new());
    let image_classifier = Arc::new(ImageClassifierFake::failing(
        logger.clone(),
        ClassifierError::Model("tensor shape mismatch".to_string()),
    ));
    let f = Fixture::with(logger, image_classifier);

    f.coordinator.detect(&valid_image()).unwrap();

    match f.coordinator.current_outcome() {
        Outcome::Failed { reason } => {
            assert_eq!(reason, "ModelError: tensor shape mismatch");
        }
        outcome => panic!("Unexpected outcome {:?}", outcome),
    }
}

#[test]
fn test_empty_ranked_list_publishes_failure() {
    let logger = Arc::new(LoggerFake::new());
    let image_classifier = Arc::new(ImageClassifierFake::returning(logger.clone(), vec![]));
    let f = Fixture::with(logger, image_classifier);

    f.coordinator.detect(&valid_image()).unwrap();

    assert!(matches!(
        f.coordinator.current_outcome(),
        Outcome::Failed { reason } if !reason.is_empty()
    ));
}

#[test]
fn test_conversion_failure_leaves_idle_and_skips_engine() {
    let f = Fixture::new();

    let result = f.coordinator.detect(&unconvertible_image());

    assert!(matches!(
        result,
        Err(CoordinatorError::ImageConversion(ImageConversionError::Decode(_)))
    ));
    assert_eq!(f.coordinator.current_outcome(), Outcome::Idle);
    assert_eq!(f.image_classifier.calls(), 0);
    assert!(f.logger.contains("Cannot convert image for classification"));
}

#[test]
fn test_conversion_failure_keeps_prior_result() {
    let f = Fixture::new();
    f.coordinator.detect(&valid_image()).unwrap();

    let _ = f.coordinator.detect(&unconvertible_image());

    assert_eq!(f.coordinator.current_outcome(), ready("cat"));
    assert_eq!(f.image_classifier.calls(), 1);
    assert!(!f.coordinator.is_busy());
}

#[test]
fn test_detect_twice_is_idempotent() {
    let f = Fixture::new();
    let outcomes = f.coordinator.subscribe();

    f.coordinator.detect(&valid_image()).unwrap();
    f.coordinator.detect(&valid_image()).unwrap();

    assert_eq!(outcomes.try_recv().unwrap(), ready("cat"));
    assert_eq!(outcomes.try_recv().unwrap(), ready("cat"));
    assert!(outcomes.try_recv().is_err());
    assert_eq!(f.image_classifier.calls(), 2);
}

#[test]
fn test_recovers_after_failure() {
    let f = Fixture::new();
    f.image_classifier
        .set_response(Err(ClassifierError::EngineUnavailable));
    f.coordinator.detect(&valid_image()).unwrap();

    f.image_classifier
        .set_response(Ok(vec![Classification::new("dog", 0.9)]));
    f.coordinator.detect(&valid_image()).unwrap();

    assert_eq!(f.coordinator.current_outcome(), ready("dog"));
}

#[test]
fn test_subscribers_are_not_notified_on_conversion_failure() {
    let f = Fixture::new();
    let outcomes = f.coordinator.subscribe();

    let _ = f.coordinator.detect(&unconvertible_image());

    assert!(outcomes.try_recv().is_err());
}

#[test]
fn test_overlapping_detect_is_rejected() {
    let logger = Arc::new(LoggerFake::new());
    let (image_classifier, gate) =
        ImageClassifierFake::gated(logger.clone(), vec![Classification::new("cat", 0.97)]);
    let f = Fixture::with(logger, Arc::new(image_classifier));

    let first = f.coordinator.spawn_detect(valid_image());
    gate.entered.recv().unwrap();
    assert!(f.coordinator.is_busy());

    let second = f.coordinator.detect(&valid_image());
    assert_eq!(second, Err(CoordinatorError::Busy));
    assert_eq!(f.coordinator.current_outcome(), Outcome::Idle);

    gate.release.send(()).unwrap();
    first.join().unwrap().unwrap();

    assert_eq!(f.coordinator.current_outcome(), ready("cat"));
    assert_eq!(f.image_classifier.calls(), 1);
    assert!(!f.coordinator.is_busy());
    assert!(f.logger.contains("already in flight"));
}

#[test]
fn test_spawn_detect_publishes_from_background_thread() {
    let f = Fixture::new();
    let outcomes = f.coordinator.subscribe();

    f.coordinator
        .spawn_detect(valid_image())
        .join()
        .unwrap()
        .unwrap();

    assert_eq!(outcomes.recv().unwrap(), ready("cat"));
}

struct PanickingClassifier;

impl ImageClassifier for PanickingClassifier {
    fn classify(
        &self,
        _frame: &RgbImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        panic!("model crashed");
    }
}

#[test]
fn test_panicking_engine_becomes_failure() {
    let logger = Arc::new(LoggerFake::new());
    let coordinator = Coordinator::new(logger.clone(), Arc::new(PanickingClassifier));

    coordinator.detect(&valid_image()).unwrap();

    assert_eq!(
        coordinator.current_outcome(),
        Outcome::Failed {
            reason: "classifier panicked".to_string()
        }
    );
    assert!(!coordinator.is_busy());
    assert!(logger.contains("Classifier panicked"));
}

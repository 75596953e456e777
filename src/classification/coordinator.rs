use crate::classification::core::{init, transition, Effect, Msg, Outcome};
use crate::image_classifier::interface::ImageClassifier;
use crate::image_input::interface::{Image, ImageConversionError};
use crate::library::logger::interface::Logger;
use crate::library::observable::Observable;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::thread::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinatorError {
    #[error("image conversion failed: {0}")]
    ImageConversion(#[from] ImageConversionError),
    #[error("a classification is already in flight")]
    Busy,
}

/// Clears the busy flag when the in-flight call finishes, even on unwind.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs one image at a time through the classifier and publishes the
/// outcome.
#[derive(Clone)]
pub struct Coordinator {
    outcome: Observable<Outcome>,
    busy: Arc<AtomicBool>,
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl Coordinator {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let (outcome, _) = init();

        Self {
            outcome: Observable::new(outcome),
            busy: Arc::new(AtomicBool::new(false)),
            logger: logger.with_namespace("coordinator"),
            image_classifier,
        }
    }

    /// Classifies `image` and publishes the result.
    ///
    /// Engine failures are published as [`Outcome::Failed`] and are not
    /// returned. An image that cannot be converted leaves the outcome
    /// untouched and is only reported through the returned error, as is a
    /// call made while another one is still in flight.
    pub fn detect(&self, image: &Image) -> Result<(), CoordinatorError> {
        let Some(_in_flight) = InFlight::acquire(&self.busy) else {
            let _ = self
                .logger
                .error("Rejected detect: a classification is already in flight");
            return Err(CoordinatorError::Busy);
        };

        let frame = image.to_pixel_buffer();
        let result = match &frame {
            Ok(_) => Ok(()),
            Err(error) => Err(CoordinatorError::ImageConversion(error.clone())),
        };

        self.update(Msg::DetectRequested(frame));

        result
    }

    /// Runs [`Coordinator::detect`] on a background thread.
    pub fn spawn_detect(&self, image: Image) -> JoinHandle<Result<(), CoordinatorError>> {
        let coordinator = self.clone();
        std::thread::spawn(move || coordinator.detect(&image))
    }

    pub fn current_outcome(&self) -> Outcome {
        self.outcome.get()
    }

    /// Receives every outcome published after this call.
    pub fn subscribe(&self) -> Receiver<Outcome> {
        self.outcome.subscribe()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn update(&self, msg: Msg) {
        let publishes = matches!(msg, Msg::ClassifyDone(_));
        let current = self.outcome.get();

        let (next, effects) = transition(current.clone(), msg);

        if publishes {
            let _ = self
                .logger
                .info(&format!("outcome: {:?} -> {:?}", current, next));
            self.outcome.set(next);
        }

        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::Classify { frame } => {
                let result = catch_unwind(AssertUnwindSafe(|| {
                    self.image_classifier.classify(&frame)
                }));

                let result = match result {
                    Ok(Ok(classifications)) => Ok(classifications),
                    Ok(Err(error)) => {
                        let _ = self.logger.error(&format!("Classifier failed: {}", error));
                        Err(error.to_string())
                    }
                    Err(_) => {
                        let _ = self.logger.error("Classifier panicked");
                        Err("classifier panicked".to_string())
                    }
                };

                self.update(Msg::ClassifyDone(result));
            }
            Effect::ReportConversionFailure { reason } => {
                let _ = self
                    .logger
                    .error(&format!("Cannot convert image for classification: {}", reason));
            }
        }
    }
}

use crate::image_classifier::interface::{Classification, ClassifierError, ImageClassifier};
use crate::library::logger::interface::Logger;
use image::RgbImage;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};

/// Lets a test hold a classification open until it decides to release it.
pub struct FakeGate {
    pub entered: Receiver<()>,
    pub release: Sender<()>,
}

/// Scripted classifier: always answers with the configured response.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    response: Mutex<Result<Vec<Classification>, ClassifierError>>,
    calls: AtomicUsize,
    gate: Mutex<Option<(Sender<()>, Receiver<()>)>>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::returning(
            logger,
            vec![
                Classification::new("cat", 0.97),
                Classification::new("dog", 0.02),
            ],
        )
    }

    pub fn returning(
        logger: Arc<dyn Logger + Send + Sync>,
        classifications: Vec<Classification>,
    ) -> Self {
        Self::with_response(logger, Ok(classifications))
    }

    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, error: ClassifierError) -> Self {
        Self::with_response(logger, Err(error))
    }

    pub fn gated(
        logger: Arc<dyn Logger + Send + Sync>,
        classifications: Vec<Classification>,
    ) -> (Self, FakeGate) {
        let (entered_sender, entered) = channel();
        let (release, release_receiver) = channel();
        let fake = Self::returning(logger, classifications);
        *fake.gate.lock().unwrap_or_else(PoisonError::into_inner) =
            Some((entered_sender, release_receiver));
        (fake, FakeGate { entered, release })
    }

    fn with_response(
        logger: Arc<dyn Logger + Send + Sync>,
        response: Result<Vec<Classification>, ClassifierError>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            response: Mutex::new(response),
            calls: AtomicUsize::new(0),
            gate: Mutex::new(None),
        }
    }

    pub fn set_response(&self, response: Result<Vec<Classification>, ClassifierError>) {
        *self.response.lock().unwrap_or_else(PoisonError::into_inner) = response;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        frame: &RgbImage,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.logger.info(&format!(
            "Classifying {}x{} frame...",
            frame.width(),
            frame.height()
        ))?;

        if let Some((entered, release)) = self
            .gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            let _ = entered.send(());
            let _ = release.recv();
        }

        let response = self
            .response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        response.map_err(Into::into)
    }
}

use crate::image_classifier::interface::Classification;
use crate::image_input::interface::ImageConversionError;
use image::RgbImage;

pub const NO_USABLE_RESULT: &str = "classifier returned no usable result";
pub const UNKNOWN_FAILURE: &str = "classifier failed without a description";

/// What the presentation layer watches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Idle,
    Ready {
        label: String,
    },
    Failed {
        reason: String,
    },
}

impl Outcome {
    pub fn label(&self) -> Option<&str> {
        match self {
            Outcome::Ready { label } => Some(label),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum Msg {
    DetectRequested(Result<RgbImage, ImageConversionError>),
    ClassifyDone(Result<Vec<Classification>, String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Classify { frame: RgbImage },
    ReportConversionFailure { reason: String },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::Classify { frame } => {
                format!("Classify {{ frame: {}x{} }}", frame.width(), frame.height())
            }
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (Outcome, Vec<Effect>) {
    (Outcome::Idle, vec![])
}

pub fn transition(outcome: Outcome, msg: Msg) -> (Outcome, Vec<Effect>) {
    match msg {
        Msg::DetectRequested(Ok(frame)) => (outcome, vec![Effect::Classify { frame }]),

        // Conversion failures never reach the engine and leave the outcome as is.
        Msg::DetectRequested(Err(error)) => (
            outcome,
            vec![Effect::ReportConversionFailure {
                reason: error.to_string(),
            }],
        ),

        Msg::ClassifyDone(Ok(classifications)) => match select_top(&classifications) {
            Some(top) => (
                Outcome::Ready {
                    label: top.label.clone(),
                },
                vec![],
            ),
            None => (
                Outcome::Failed {
                    reason: NO_USABLE_RESULT.to_string(),
                },
                vec![],
            ),
        },

        Msg::ClassifyDone(Err(reason)) => {
            let reason = if reason.trim().is_empty() {
                UNKNOWN_FAILURE.to_string()
            } else {
                reason
            };
            (Outcome::Failed { reason }, vec![])
        }
    }
}

/// Highest confidence wins; on a tie the earlier entry is kept. Entries with
/// a NaN confidence or a blank label are skipped.
pub fn select_top(classifications: &[Classification]) -> Option<&Classification> {
    classifications
        .iter()
        .filter(|c| !c.confidence.is_nan() && !c.label.trim().is_empty())
        .fold(None, |best: Option<&Classification>, c| match best {
            Some(best) if best.confidence >= c.confidence => Some(best),
            _ => Some(c),
        })
}

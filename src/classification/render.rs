use crate::classification::core::Outcome;
use crate::result_display::interface::ResultDisplay;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Render {
    result_display: Arc<Mutex<dyn ResultDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(result_display: Arc<Mutex<dyn ResultDisplay + Send + Sync>>) -> Self {
        Self { result_display }
    }

    pub fn render(&self, outcome: &Outcome) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut result_display = self.result_display.lock().map_err(|e| e.to_string())?;

        result_display.clear()?;

        match outcome {
            Outcome::Idle => {
                result_display.write_line(0, "Submit Image for Analysis")?;
                result_display.write_line(1, "Snap a Photo or Share an existing Image")?;
            }
            Outcome::Ready { label } => {
                result_display.write_line(0, "Image categories:")?;
                result_display.write_line(1, label)?;
            }
            Outcome::Failed { reason } => {
                result_display.write_line(0, "Image categories:")?;
                result_display.write_line(1, &format!("Error: {}", reason))?;
            }
        }

        result_display.show()
    }

    /// Re-renders each outcome as it arrives until the sender side is gone.
    pub fn follow(
        &self,
        outcomes: Receiver<Outcome>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        for outcome in outcomes {
            self.render(&outcome)?;
        }
        Ok(())
    }
}

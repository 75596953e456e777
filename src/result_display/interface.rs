use std::error::Error;

/// A small text panel the presentation layer shows results on.
pub trait ResultDisplay: Send + Sync {
    /// Clear all text from the panel
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a line (0-based). Text longer than a line is truncated.
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Push the buffered lines to the screen
    fn show(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn num_lines(&self) -> u8 {
        2
    }

    fn chars_per_line(&self) -> usize {
        40
    }
}

use crate::result_display::interface::ResultDisplay;
use std::error::Error;

/// Keeps every shown screen in memory.
#[derive(Debug)]
pub struct ResultDisplayFake {
    lines: Vec<String>,
    shown: Vec<Vec<String>>,
}

impl ResultDisplayFake {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new(); 2],
            shown: Vec::new(),
        }
    }

    pub fn last_shown(&self) -> Option<&[String]> {
        self.shown.last().map(Vec::as_slice)
    }

    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }
}

impl ResultDisplay for ResultDisplayFake {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines = vec![String::new(); self.num_lines() as usize];
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }
        self.lines[line as usize] = text.chars().take(self.chars_per_line()).collect();
        Ok(())
    }

    fn show(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.shown.push(self.lines.clone());
        Ok(())
    }
}

use crate::result_display::interface::ResultDisplay;
use std::error::Error;

pub struct ResultDisplayConsole {
    display_buffer: Vec<String>,
}

impl ResultDisplayConsole {
    pub fn new() -> Self {
        Self {
            display_buffer: vec![String::new(); 2],
        }
    }
}

impl Default for ResultDisplayConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultDisplay for ResultDisplayConsole {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        for line in self.display_buffer.iter_mut() {
            line.clear();
        }
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }

        self.display_buffer[line as usize] = text.chars().take(self.chars_per_line()).collect();
        Ok(())
    }

    fn show(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let width = self.chars_per_line();
        println!("┌{}┐", "─".repeat(width));
        for row in &self.display_buffer {
            println!("│{:<width$}│", row, width = width);
        }
        println!("└{}┘", "─".repeat(width));
        Ok(())
    }
}

//! Terminal presentation: banner, prompt, thinking pause, colored replies.
//!
//! Cosmetic only. Nothing in this module affects which reply is chosen.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use pippin_core::Result;

const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Width of the erase that removes the thinking indicator line.
const THINKING_LINE_WIDTH: usize = 30;

/// Writes the user-facing side of the conversation to stdout.
pub struct Presenter {
    color: bool,
    clear_screen: bool,
    thinking_delay: Duration,
}

impl Presenter {
    pub fn new(color: bool, clear_screen: bool, thinking_delay_ms: u64) -> Self {
        Self {
            color,
            clear_screen,
            thinking_delay: Duration::from_millis(thinking_delay_ms),
        }
    }

    /// Clear the terminal (when enabled) and print the welcome banner.
    pub fn greet(&self) -> Result<()> {
        let mut out = io::stdout();
        if self.clear_screen {
            write!(out, "{}", CLEAR_SCREEN)?;
        }
        writeln!(out, "============================================")?;
        writeln!(out, "           Welcome to Pippin GPT            ")?;
        writeln!(out, "============================================")?;
        writeln!(
            out,
            "Pippin: Hello! I am Pippin. I'm ready to help you explore ideas or answer your questions delicately."
        )?;
        writeln!(out, "(Type 'exit' or 'quit' to leave the woods)")?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    /// Print the input prompt without a trailing newline.
    pub fn prompt(&self) -> Result<()> {
        let mut out = io::stdout();
        write!(out, "You: ")?;
        out.flush()?;
        Ok(())
    }

    /// Show the thinking indicator for the configured pause, then erase it
    /// with a carriage return.
    pub fn think(&self) -> Result<()> {
        let mut out = io::stdout();
        write!(out, "Pippin is thinking... \u{1f984}")?;
        out.flush()?;
        thread::sleep(self.thinking_delay);
        write!(out, "\r{}\r", " ".repeat(THINKING_LINE_WIDTH))?;
        out.flush()?;
        Ok(())
    }

    /// Print one of Pippin's replies, in green when color is enabled,
    /// followed by a blank line.
    pub fn say(&self, response: &str) -> Result<()> {
        let mut out = io::stdout();
        if self.color {
            writeln!(out, "{}Pippin: {}{}", GREEN, response, RESET)?;
        } else {
            writeln!(out, "Pippin: {}", response)?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    /// Print the goodbye line.
    pub fn farewell(&self) -> Result<()> {
        let mut out = io::stdout();
        writeln!(out, "Pippin: Goodbye! May your path be gentle. \u{1f984}")?;
        out.flush()?;
        Ok(())
    }
}

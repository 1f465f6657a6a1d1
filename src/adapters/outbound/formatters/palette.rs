//! Terminal colors used across the reports.
//!
//! A disabled palette returns text unchanged, which is what file output,
//! pipes and `--no-color` get.

use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Palette that never emits escape sequences
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn blue(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.blue().to_string()
    }

    pub fn red(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.red().to_string()
    }

    pub fn yellow(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.yellow().to_string()
    }

    pub fn green(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.green().to_string()
    }

    pub fn gray(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.bright_black().to_string()
    }

    pub fn bold(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.bold().to_string()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}

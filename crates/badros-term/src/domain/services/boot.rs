#[cfg(test)]
#[path = "boot_test.rs"]
mod tests;

use std::time::Duration;

use super::Scheduler;
use crate::domain::models::content::BOOT_MESSAGES;
use crate::domain::models::Step;

pub const BOOT_START_DELAY: Duration = Duration::from_millis(500);
pub const BOOT_LINE_DELAY: Duration = Duration::from_millis(1000);
pub const BOOT_CURSOR_HOLD: Duration = Duration::from_millis(2000);
pub const BOOT_FADE: Duration = Duration::from_millis(1000);

/// Startup splash: prints one message per tick, then a cursor line, then
/// fades out and hands over to the dashboard.
#[derive(Debug, Clone)]
pub struct BootSequence {
    messages: Vec<String>,
    index: usize,
    pub cursor_shown: bool,
    pub fading: bool,
    pub finished: bool,
}

impl Default for BootSequence {
    fn default() -> BootSequence {
        BootSequence::new(BOOT_MESSAGES.iter().map(|e| e.to_string()).collect())
    }
}

impl BootSequence {
    pub fn new(messages: Vec<String>) -> BootSequence {
        BootSequence {
            messages,
            index: 0,
            cursor_shown: false,
            fading: false,
            finished: false,
        }
    }

    pub fn start(&self, scheduler: &mut Scheduler) {
        scheduler.schedule(BOOT_START_DELAY, Step::BootLine);
    }

    pub fn lines(&self) -> &[String] {
        &self.messages[..self.index]
    }

    /// Handles `Step::BootLine`: shows the next message, or the cursor marker
    /// once every message is on screen.
    pub fn advance(&mut self, scheduler: &mut Scheduler) {
        if self.finished || self.cursor_shown {
            return;
        }

        if self.index < self.messages.len() {
            self.index += 1;
            scheduler.schedule(BOOT_LINE_DELAY, Step::BootLine);
            return;
        }

        self.cursor_shown = true;
        scheduler.schedule(BOOT_CURSOR_HOLD, Step::BootFade);
    }

    pub fn fade(&mut self, scheduler: &mut Scheduler) {
        if self.finished || self.fading {
            return;
        }

        self.fading = true;
        scheduler.schedule(BOOT_FADE, Step::BootComplete);
    }

    pub fn finish(&mut self) {
        self.index = self.messages.len();
        self.cursor_shown = true;
        self.finished = true;
    }

    pub fn total_duration(&self) -> Duration {
        BOOT_START_DELAY
            + BOOT_LINE_DELAY * self.messages.len() as u32
            + BOOT_CURSOR_HOLD
            + BOOT_FADE
    }
}

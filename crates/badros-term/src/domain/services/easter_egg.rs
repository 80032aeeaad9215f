#[cfg(test)]
#[path = "easter_egg_test.rs"]
mod tests;

use std::time::Duration;

use super::Scheduler;
use crate::domain::models::Step;

pub const EGG_THRESHOLD: u32 = 5;
pub const EGG_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Default)]
pub struct EasterEgg {
    clicks: u32,
    generation: u64,
    overlay: bool,
}

impl EasterEgg {
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay
    }

    /// Counts one click on the trigger. Returns true when this click set off
    /// the overlay.
    pub fn click(&mut self, scheduler: &mut Scheduler) -> bool {
        self.clicks += 1;
        if self.clicks < EGG_THRESHOLD {
            return false;
        }

        self.clicks = 0;
        self.generation += 1;
        self.overlay = true;
        scheduler.schedule(
            EGG_DURATION,
            Step::EasterEggExpire {
                generation: self.generation,
            },
        );
        tracing::info!("easter egg triggered");

        true
    }

    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation {
            self.overlay = false;
        }
    }
}

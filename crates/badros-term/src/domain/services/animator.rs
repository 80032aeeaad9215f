#[cfg(test)]
#[path = "animator_test.rs"]
mod tests;

use std::collections::HashMap;
use std::time::Duration;

use super::Scheduler;
use crate::domain::models::PanelId;
use crate::domain::models::Step;

pub const REVEAL_STAGGER: Duration = Duration::from_millis(150);
pub const GLITCH_DURATION: Duration = Duration::from_millis(500);

/// Per-panel reveal progress. Items start hidden and turn visible one at a
/// time as their `Step::Reveal` fires.
///
/// Every reveal and glitch carries a generation number. Steps left over from
/// an earlier open of the same panel no longer match and are dropped.
#[derive(Debug, Default)]
pub struct Animator {
    reveals: HashMap<PanelId, (u64, Vec<bool>)>,
    glitching: Option<(PanelId, u64)>,
    generation: u64,
}

impl Animator {
    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Resets `panel` to fully hidden and staggers its items back in. A panel
    /// without a reveal target is skipped.
    pub fn reveal(&mut self, scheduler: &mut Scheduler, panel: PanelId, len: Option<usize>) {
        let len = match len {
            Some(len) if len > 0 => len,
            _ => {
                tracing::warn!(panel = %panel, "reveal target missing, skipping animation");
                return;
            }
        };

        let generation = self.next_generation();
        self.reveals.insert(panel, (generation, vec![false; len]));
        for index in 0..len {
            scheduler.schedule(
                REVEAL_STAGGER * index as u32,
                Step::Reveal {
                    panel,
                    index,
                    generation,
                },
            );
        }
    }

    pub fn show(&mut self, panel: PanelId, index: usize, generation: u64) {
        let Some((current, items)) = self.reveals.get_mut(&panel) else {
            tracing::debug!(panel = %panel, index = index, "reveal target missing");
            return;
        };

        if *current != generation {
            return;
        }

        match items.get_mut(index) {
            Some(visible) => *visible = true,
            None => {
                tracing::debug!(panel = %panel, index = index, "reveal item missing");
            }
        }
    }

    /// Whether item `index` of `panel` is currently visible. Panels that never
    /// animate are always visible.
    pub fn is_visible(&self, panel: PanelId, index: usize) -> bool {
        match self.reveals.get(&panel) {
            Some((_, items)) => items.get(index).copied().unwrap_or(false),
            None => true,
        }
    }

    pub fn visible_count(&self, panel: PanelId) -> Option<usize> {
        self.reveals
            .get(&panel)
            .map(|(_, items)| items.iter().filter(|e| **e).count())
    }

    pub fn glitch(&mut self, scheduler: &mut Scheduler, panel: PanelId) {
        let generation = self.next_generation();
        self.glitching = Some((panel, generation));
        scheduler.schedule(GLITCH_DURATION, Step::GlitchEnd { panel, generation });
    }

    pub fn end_glitch(&mut self, panel: PanelId, generation: u64) {
        if self.glitching == Some((panel, generation)) {
            self.glitching = None;
        }
    }

    pub fn is_glitching(&self, panel: PanelId) -> bool {
        matches!(self.glitching, Some((current, _)) if current == panel)
    }
}

#[cfg(test)]
#[path = "panels_test.rs"]
mod tests;

use strum::IntoEnumIterator;

use crate::domain::models::PanelId;

/// Tracks which module screen is showing. `None` is the dashboard.
///
/// Every transition clears all panels before activating one, so at most one
/// panel is ever active.
#[derive(Debug, Default)]
pub struct PanelController {
    active: Option<PanelId>,
}

impl PanelController {
    pub fn active(&self) -> Option<PanelId> {
        self.active
    }

    pub fn is_dashboard(&self) -> bool {
        self.active.is_none()
    }

    pub fn is_active(&self, panel: PanelId) -> bool {
        self.active == Some(panel)
    }

    /// Panels currently flagged active. Always zero or one entries.
    pub fn active_panels(&self) -> Vec<PanelId> {
        PanelId::iter().filter(|e| self.is_active(*e)).collect()
    }

    pub fn open(&mut self, panel: PanelId) {
        self.close_all();
        self.active = Some(panel);
        tracing::debug!(panel = %panel, "panel opened");
    }

    /// Opens a panel by its textual id. Unknown ids leave the current state
    /// untouched.
    pub fn open_named(&mut self, name: &str) -> Option<PanelId> {
        match PanelId::parse(name) {
            Some(panel) => {
                self.open(panel);
                Some(panel)
            }
            None => {
                tracing::warn!(name = name, "no panel with this id, ignoring");
                None
            }
        }
    }

    pub fn close_all(&mut self) {
        self.active = None;
    }
}

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, EnumVariantNames};

#[cfg(test)]
#[path = "panel_test.rs"]
mod tests;

/// One of the fixed full-screen modules. The dashboard is the absence of an
/// active panel rather than a variant here.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumVariantNames,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
pub enum PanelId {
    About,
    Projects,
    Skills,
    FunZone,
    Contact,
}

impl PanelId {
    pub fn parse(s: &str) -> Option<PanelId> {
        PanelId::iter().find(|e| e.to_string() == s)
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelId::About => "About",
            PanelId::Projects => "Projects",
            PanelId::Skills => "Skills",
            PanelId::FunZone => "Fun Zone",
            PanelId::Contact => "Contact",
        }
    }

    pub fn card_label(&self) -> &'static str {
        match self {
            PanelId::About => "about.exe",
            PanelId::Projects => "projects.exe",
            PanelId::Skills => "skills.exe",
            PanelId::FunZone => "funzone.exe",
            PanelId::Contact => "contact.exe",
        }
    }

    pub fn card_hint(&self) -> &'static str {
        match self {
            PanelId::About => "Who is behind the terminal",
            PanelId::Projects => "Things I have built",
            PanelId::Skills => "Tools of the trade",
            PanelId::FunZone => "Humor module loaded",
            PanelId::Contact => "Open a channel",
        }
    }

    /// Panels whose items fade in one by one every time they open.
    pub fn has_reveal(&self) -> bool {
        matches!(self, PanelId::About | PanelId::Skills)
    }
}

use super::PanelId;

/// A fire-once unit of delayed work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    BootLine,
    BootFade,
    BootComplete,
    Reveal {
        panel: PanelId,
        index: usize,
        generation: u64,
    },
    GlitchEnd {
        panel: PanelId,
        generation: u64,
    },
    EasterEggExpire { generation: u64 },
    SubmitIdle,
    ResponseClear { generation: u64 },
}

use tui_textarea::Input;

#[derive(Debug)]
pub enum Event {
    ContactDelivered,
    ContactFailed(String),
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardEnter,
    KeyboardEsc,
    KeyboardTab,
    KeyboardBackTab,
    KeyboardPaste(String),
    MouseClick(u16, u16),
    UIResize(u16, u16),
    UITick,
}

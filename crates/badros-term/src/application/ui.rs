use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use super::render;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::AppStateProps;

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state_props: AppStateProps,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);
    let mut app_state = AppState::new(app_state_props);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| render::draw(frame, &mut app_state))?;

        let event = events.next().await?;
        let now = Instant::now();
        let elapsed = now.duration_since(last_tick);
        last_tick = now;

        if !app_state.handle_event(event, elapsed, &tx)? {
            break;
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = execute!(io::stdout(), cursor::Show);
}

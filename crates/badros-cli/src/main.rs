use std::fs::OpenOptions;
use std::io;

use anyhow::Result;
use badros_term::application::cli;
use badros_term::application::ui::{destruct_terminal_for_panic, start_loop};
use badros_term::configuration::{Config, ConfigKey};
use badros_term::domain::models::{Action, EmailClientName, Event};
use badros_term::domain::services::actions::ActionsService;
use badros_term::domain::services::AppStateProps;
use badros_term::infrastructure::clients::EmailClientManager;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::task;

fn init_logging() -> Result<()> {
    let log_level_filter = Config::get(ConfigKey::LogLevel)
        .parse()
        .unwrap_or(LevelFilter::Info);

    // stdout belongs to the TUI.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("badros.log")?;

    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

async fn start_ui(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let app_state_props = AppStateProps {
        recipient_name: Config::get(ConfigKey::RecipientName),
        fallback_email: Config::get(ConfigKey::FallbackEmail),
        skip_boot: Config::get_bool(ConfigKey::SkipBoot),
    };

    let result = start_loop(&mut terminal, app_state_props, tx, rx).await;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;

    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    result
}

#[tokio::main]
async fn main() -> Result<()> {
    if !cli::parse().await? {
        return Ok(());
    }

    init_logging()?;
    log::info!("starting badros");

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let email_client = EmailClientManager::get(EmailClientName::EmailJs)?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    background_futures.spawn(async move {
        ActionsService::start(email_client, event_tx, &mut action_rx).await
    });

    let ui_future = start_ui(action_tx, event_rx);

    let result = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(res)) => res,
            Some(Err(err)) => Err(err.into()),
            None => Ok(()),
        },
        res = ui_future => res,
    );

    if result.is_err() {
        destruct_terminal_for_panic();
    }

    log::info!("badros exited");

    result
}

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use super::*;
use crate::domain::models::content::ABOUT_LINES;
use crate::domain::models::content::SKILLS;
use crate::domain::models::help_text;
use crate::domain::models::FormResponseKind;
use crate::domain::models::HistoryKind;

fn props(skip_boot: bool) -> AppStateProps {
    AppStateProps {
        recipient_name: "Badr".to_string(),
        fallback_email: "badr@example.com".to_string(),
        skip_boot,
    }
}

fn dashboard<'a>() -> AppState<'a> {
    AppState::new(props(true))
}

fn type_text(app_state: &mut AppState, text: &str, tx: &mpsc::UnboundedSender<Action>) {
    for c in text.chars() {
        app_state
            .handle_input(
                Input {
                    key: Key::Char(c),
                    ctrl: false,
                    alt: false,
                    shift: false,
                },
                tx,
            )
            .unwrap();
    }
}

fn enter_command(app_state: &mut AppState, text: &str, tx: &mpsc::UnboundedSender<Action>) {
    type_text(app_state, text, tx);
    app_state.handle_enter(tx).unwrap();
}

#[test]
fn it_boots_into_the_dashboard() {
    let mut app_state = AppState::new(props(false));
    assert!(app_state.is_booting());

    app_state.advance(Duration::from_millis(9499));
    assert!(app_state.is_booting());

    app_state.advance(Duration::from_millis(1));
    assert!(!app_state.is_booting());
    assert!(app_state.panels.is_dashboard());
}

#[test]
fn it_skips_the_boot_on_any_key() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = AppState::new(props(false));
    app_state.advance(Duration::from_millis(1200));

    app_state.handle_input(Input::default(), &tx)?;
    assert!(!app_state.is_booting());

    app_state.advance(Duration::from_secs(30));
    assert!(app_state.panels.is_dashboard());

    Ok(())
}

#[test]
fn it_navigates_with_typed_commands() {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();

    enter_command(&mut app_state, "skills", &tx);
    assert_eq!(app_state.panels.active(), Some(PanelId::Skills));
    assert_eq!(app_state.command_text(), "");

    enter_command(&mut app_state, "fun", &tx);
    assert_eq!(app_state.panels.active(), Some(PanelId::FunZone));

    enter_command(&mut app_state, "home", &tx);
    assert!(app_state.panels.is_dashboard());

    enter_command(&mut app_state, "funzone", &tx);
    assert_eq!(app_state.panels.active(), Some(PanelId::FunZone));

    enter_command(&mut app_state, "exit", &tx);
    assert!(app_state.panels.is_dashboard());
}

#[test]
fn it_answers_help_regardless_of_case() {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();

    enter_command(&mut app_state, "HELP", &tx);
    let last = app_state.command_line.history().last().unwrap();
    assert_eq!(last.kind, HistoryKind::Response);
    assert_eq!(last.text, help_text());
    assert!(app_state.panels.is_dashboard());
}

#[test]
fn it_leaves_the_panel_unchanged_for_unknown_commands() {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();
    app_state.open_panel(PanelId::Projects);

    enter_command(&mut app_state, "xyz", &tx);
    assert_eq!(app_state.panels.active(), Some(PanelId::Projects));
    assert_eq!(
        app_state.command_line.history().last().unwrap().text,
        "Command not found: \"xyz\". Type \"help\" for available commands."
    );
}

#[test]
fn it_opens_the_selected_card_on_a_blank_enter() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();

    app_state.handle_input(
        Input {
            key: Key::Right,
            ..Default::default()
        },
        &tx,
    )?;
    app_state.handle_tab(true);
    assert_eq!(app_state.selected_panel(), PanelId::Skills);

    app_state.handle_enter(&tx)?;
    assert_eq!(app_state.panels.active(), Some(PanelId::Skills));
    assert!(app_state.command_line.history().is_empty());

    app_state.handle_esc();
    assert!(app_state.panels.is_dashboard());

    app_state.handle_tab(false);
    app_state.handle_tab(false);
    app_state.handle_tab(false);
    assert_eq!(app_state.selected_panel(), PanelId::Contact);

    Ok(())
}

#[test]
fn it_replays_the_about_reveal_on_every_open() {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();

    for _ in 0..2 {
        enter_command(&mut app_state, "about", &tx);
        assert_eq!(app_state.animator.visible_count(PanelId::About), Some(0));
        assert!(app_state.animator.is_glitching(PanelId::About));

        app_state.advance(Duration::ZERO);
        assert_eq!(app_state.animator.visible_count(PanelId::About), Some(1));

        app_state.advance(Duration::from_millis(150));
        assert_eq!(app_state.animator.visible_count(PanelId::About), Some(2));

        app_state.advance(Duration::from_secs(2));
        assert_eq!(
            app_state.animator.visible_count(PanelId::About),
            Some(ABOUT_LINES.len())
        );
        assert!(!app_state.animator.is_glitching(PanelId::About));

        enter_command(&mut app_state, "exit", &tx);
        assert!(app_state.panels.is_dashboard());
    }
}

#[test]
fn it_lets_a_reveal_finish_harmlessly_after_closing() {
    let mut app_state = dashboard();
    app_state.open_panel(PanelId::Skills);
    app_state.advance(Duration::from_millis(200));
    app_state.close_panels();

    app_state.advance(Duration::from_secs(5));
    assert!(app_state.panels.is_dashboard());
    assert_eq!(
        app_state.animator.visible_count(PanelId::Skills),
        Some(SKILLS.len())
    );
}

#[test]
fn it_rejects_an_empty_message_without_sending() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();
    app_state.open_panel(PanelId::Contact);
    app_state.contact_form.set_value(FormField::Name, "Ada");
    app_state
        .contact_form
        .set_value(FormField::Email, "ada@example.com");

    app_state.submit_contact(&tx)?;
    assert!(rx.try_recv().is_err());
    assert_eq!(
        app_state.contact_form.response().unwrap().text,
        "Please fill in all required fields."
    );

    Ok(())
}

#[test]
fn it_rejects_a_bad_email_without_sending() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();
    app_state.open_panel(PanelId::Contact);
    app_state.contact_form.set_value(FormField::Name, "Ada");
    app_state
        .contact_form
        .set_value(FormField::Email, "not-an-email");
    app_state.contact_form.set_value(FormField::Message, "Hi");

    app_state.submit_contact(&tx)?;
    assert!(rx.try_recv().is_err());
    assert_eq!(
        app_state.contact_form.response().unwrap().text,
        "Please enter a valid email address."
    );

    Ok(())
}

#[test]
fn it_sends_a_valid_form_once_and_resets_after_delivery() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();
    enter_command(&mut app_state, "contact", &tx);
    assert_eq!(app_state.panels.active(), Some(PanelId::Contact));

    type_text(&mut app_state, "Ada", &tx);
    app_state.handle_tab(true);
    type_text(&mut app_state, "ada@example.com", &tx);
    app_state.handle_tab(true);
    app_state.handle_tab(true);
    type_text(&mut app_state, "Hello!", &tx);

    app_state.handle_input(
        Input {
            key: Key::Char('s'),
            ctrl: true,
            ..Default::default()
        },
        &tx,
    )?;
    app_state.submit_contact(&tx)?;

    let Action::SendContact(params) = rx.try_recv()?;
    assert_eq!(params.reply_to, "ada@example.com");
    assert_eq!(params.from_name, "Ada");
    assert_eq!(params.subject, "No subject");
    assert!(rx.try_recv().is_err());
    assert!(app_state.contact_form.is_pending());

    app_state.handle_contact_delivered();
    for field in [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ] {
        assert_eq!(app_state.contact_form.value(field), "");
    }
    assert_eq!(
        app_state.contact_form.response().unwrap().kind,
        FormResponseKind::Success
    );

    app_state.advance(Duration::from_millis(1500));
    assert!(!app_state.contact_form.is_pending());

    app_state.advance(Duration::from_millis(3500));
    assert!(app_state.contact_form.response().is_none());

    Ok(())
}

#[test]
fn it_shows_the_fallback_address_when_delivery_fails() -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();
    app_state.open_panel(PanelId::Contact);
    app_state.contact_form.set_value(FormField::Name, "Ada");
    app_state
        .contact_form
        .set_value(FormField::Email, "ada@example.com");
    app_state.contact_form.set_value(FormField::Message, "Hi");
    app_state.submit_contact(&tx)?;
    assert!(rx.try_recv().is_ok());

    app_state.handle_contact_failed("timeout");
    assert!(!app_state.contact_form.is_pending());
    assert!(app_state
        .contact_form
        .response()
        .unwrap()
        .text
        .contains("badr@example.com"));

    app_state.advance(Duration::from_secs(30));
    assert!(app_state.contact_form.response().is_some());

    Ok(())
}

#[test]
fn it_triggers_the_easter_egg_on_the_fifth_click() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();
    enter_command(&mut app_state, "fun", &tx);

    for _ in 0..4 {
        app_state.handle_enter(&tx)?;
    }
    assert!(!app_state.easter_egg.overlay_visible());

    app_state.handle_enter(&tx)?;
    assert!(app_state.easter_egg.overlay_visible());
    assert_eq!(app_state.easter_egg.clicks(), 0);

    app_state.advance(Duration::from_millis(3999));
    assert!(app_state.easter_egg.overlay_visible());
    app_state.advance(Duration::from_millis(1));
    assert!(!app_state.easter_egg.overlay_visible());

    app_state.handle_enter(&tx)?;
    assert_eq!(app_state.easter_egg.clicks(), 1);
    assert!(!app_state.easter_egg.overlay_visible());

    Ok(())
}

#[test]
fn it_routes_clicks_through_recorded_hitboxes() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();
    app_state.hitboxes = vec![
        (Rect::new(0, 0, 10, 3), Hitbox::Card(PanelId::About)),
        (Rect::new(10, 0, 10, 3), Hitbox::Card(PanelId::FunZone)),
    ];

    app_state.handle_click(12, 1, &tx)?;
    assert_eq!(app_state.panels.active(), Some(PanelId::FunZone));

    app_state.hitboxes = vec![
        (Rect::new(0, 0, 5, 1), Hitbox::Close),
        (Rect::new(0, 5, 20, 3), Hitbox::EggTrigger),
    ];
    app_state.handle_click(3, 6, &tx)?;
    assert_eq!(app_state.easter_egg.clicks(), 1);

    app_state.handle_click(40, 40, &tx)?;
    assert_eq!(app_state.panels.active(), Some(PanelId::FunZone));

    app_state.handle_click(2, 0, &tx)?;
    assert!(app_state.panels.is_dashboard());

    Ok(())
}

#[test]
fn it_replays_the_reveal_in_order_after_reopening_mid_animation() {
    let mut app_state = dashboard();
    app_state.open_panel(PanelId::About);
    app_state.advance(Duration::from_millis(100));
    app_state.close_panels();
    app_state.advance(Duration::from_millis(100));

    app_state.open_panel(PanelId::About);
    app_state.advance(Duration::from_millis(100));

    let visible = (0..ABOUT_LINES.len())
        .map(|index| app_state.animator.is_visible(PanelId::About, index))
        .collect::<Vec<bool>>();
    let mut expected = vec![false; ABOUT_LINES.len()];
    expected[0] = true;
    assert_eq!(visible, expected);

    app_state.advance(Duration::from_millis(150));
    assert_eq!(app_state.animator.visible_count(PanelId::About), Some(2));
    assert!(app_state.animator.is_visible(PanelId::About, 1));

    app_state.advance(Duration::from_secs(2));
    assert_eq!(
        app_state.animator.visible_count(PanelId::About),
        Some(ABOUT_LINES.len())
    );
}

#[test]
fn it_keeps_the_glitch_for_a_full_period_after_reopening() {
    let mut app_state = dashboard();
    app_state.open_panel(PanelId::About);
    app_state.advance(Duration::from_millis(400));

    app_state.open_panel(PanelId::About);
    app_state.advance(Duration::from_millis(150));
    assert!(app_state.animator.is_glitching(PanelId::About));

    app_state.advance(Duration::from_millis(350));
    assert!(!app_state.animator.is_glitching(PanelId::About));
}

#[test]
fn it_times_delays_from_the_moment_the_event_arrived() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = dashboard();
    enter_command(&mut app_state, "fun", &tx);
    for _ in 0..4 {
        app_state.handle_enter(&tx)?;
    }

    assert!(app_state.handle_event(Event::KeyboardEnter, Duration::from_millis(50), &tx)?);
    assert!(app_state.easter_egg.overlay_visible());

    assert!(app_state.handle_event(Event::UITick, Duration::from_millis(3999), &tx)?);
    assert!(app_state.easter_egg.overlay_visible());

    assert!(app_state.handle_event(Event::UITick, Duration::from_millis(1), &tx)?);
    assert!(!app_state.easter_egg.overlay_visible());

    assert!(!app_state.handle_event(Event::KeyboardCTRLC, Duration::ZERO, &tx)?);

    Ok(())
}

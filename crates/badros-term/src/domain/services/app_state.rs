use std::time::Duration;

use anyhow::Result;
use ratatui::prelude::Rect;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;
use tui_textarea::TextArea;

use super::Animator;
use super::BootSequence;
use super::CommandLine;
use super::ContactForm;
use super::ContactFormProps;
use super::EasterEgg;
use super::FormField;
use super::PanelController;
use super::Scheduler;
use crate::domain::models::content;
use crate::domain::models::Action;
use crate::domain::models::Command;
use crate::domain::models::Event;
use crate::domain::models::PanelId;
use crate::domain::models::Step;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

pub struct AppStateProps {
    pub recipient_name: String,
    pub fallback_email: String,
    pub skip_boot: bool,
}

/// Clickable regions recorded by the renderer on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hitbox {
    Card(PanelId),
    Close,
    EggTrigger,
    Field(FormField),
}

pub struct AppState<'a> {
    pub animator: Animator,
    pub boot: Option<BootSequence>,
    pub command_input: TextArea<'a>,
    pub command_line: CommandLine,
    pub contact_form: ContactForm<'a>,
    pub easter_egg: EasterEgg,
    pub hitboxes: Vec<(Rect, Hitbox)>,
    pub panels: PanelController,
    pub scheduler: Scheduler,
    pub selected_card: usize,
}

pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

impl<'a> AppState<'a> {
    pub fn new(props: AppStateProps) -> AppState<'a> {
        let mut app_state = AppState {
            animator: Animator::default(),
            boot: Some(BootSequence::default()),
            command_input: TextArea::default(),
            command_line: CommandLine::default(),
            contact_form: ContactForm::new(ContactFormProps {
                recipient_name: props.recipient_name,
                fallback_email: props.fallback_email,
            }),
            easter_egg: EasterEgg::default(),
            hitboxes: vec![],
            panels: PanelController::default(),
            scheduler: Scheduler::default(),
            selected_card: 0,
        };

        if props.skip_boot {
            app_state.skip_boot();
        } else if let Some(boot) = &app_state.boot {
            boot.start(&mut app_state.scheduler);
        }

        app_state
    }

    pub fn is_booting(&self) -> bool {
        self.boot.is_some()
    }

    pub fn skip_boot(&mut self) {
        if self.boot.take().is_some() {
            tracing::debug!("boot sequence skipped");
        }
        self.panels.close_all();
    }

    /// Moves virtual time forward, running every step that falls due,
    /// including ones scheduled by earlier steps in the same window.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.scheduler.now() + elapsed;
        while let Some(step) = self.scheduler.pop_due(until) {
            self.run_step(step);
        }
        self.scheduler.settle(until);
    }

    /// Catches virtual time up to the moment `event` arrived, then applies
    /// it. Returns `false` when the event asks the loop to stop.
    pub fn handle_event(
        &mut self,
        event: Event,
        elapsed: Duration,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<bool> {
        self.advance(elapsed);

        match event {
            Event::ContactDelivered => self.handle_contact_delivered(),
            Event::ContactFailed(err) => self.handle_contact_failed(&err),
            Event::KeyboardCharInput(input) => self.handle_input(input, tx)?,
            Event::KeyboardCTRLC => return Ok(false),
            Event::KeyboardEnter => self.handle_enter(tx)?,
            Event::KeyboardEsc => self.handle_esc(),
            Event::KeyboardTab => self.handle_tab(true),
            Event::KeyboardBackTab => self.handle_tab(false),
            Event::KeyboardPaste(text) => self.handle_paste(&text),
            Event::MouseClick(column, row) => self.handle_click(column, row, tx)?,
            Event::UIResize(width, height) => {
                tracing::debug!(width = width, height = height, "terminal resized");
            }
            Event::UITick => {}
        }

        Ok(true)
    }

    fn run_step(&mut self, step: Step) {
        match step {
            Step::BootLine => {
                if let Some(boot) = self.boot.as_mut() {
                    boot.advance(&mut self.scheduler);
                }
            }
            Step::BootFade => {
                if let Some(boot) = self.boot.as_mut() {
                    boot.fade(&mut self.scheduler);
                }
            }
            Step::BootComplete => {
                if self.boot.take().is_some() {
                    tracing::info!("boot sequence complete");
                    self.panels.close_all();
                }
            }
            Step::Reveal {
                panel,
                index,
                generation,
            } => self.animator.show(panel, index, generation),
            Step::GlitchEnd { panel, generation } => self.animator.end_glitch(panel, generation),
            Step::EasterEggExpire { generation } => self.easter_egg.expire(generation),
            Step::SubmitIdle => self.contact_form.set_idle(),
            Step::ResponseClear { generation } => self.contact_form.clear_response(generation),
        }
    }

    pub fn open_panel(&mut self, panel: PanelId) {
        self.panels.open(panel);
        self.animator.glitch(&mut self.scheduler, panel);
        if panel.has_reveal() {
            self.animator
                .reveal(&mut self.scheduler, panel, content::reveal_len(panel));
        }
    }

    pub fn close_panels(&mut self) {
        self.panels.close_all();
    }

    pub fn run_command(&mut self, raw: &str) {
        match self.command_line.submit(raw) {
            Some(Command::Open(panel)) => self.open_panel(panel),
            Some(Command::Close) => self.close_panels(),
            _ => {}
        }
    }

    pub fn command_text(&self) -> String {
        self.command_input.lines().join("")
    }

    fn take_command(&mut self) -> String {
        let text = self.command_text();
        self.command_input = TextArea::default();
        text
    }

    pub fn selected_panel(&self) -> PanelId {
        PanelId::iter()
            .nth(self.selected_card)
            .unwrap_or(PanelId::About)
    }

    fn move_selection(&mut self, forward: bool) {
        let len = PanelId::iter().count();
        self.selected_card = if forward {
            (self.selected_card + 1) % len
        } else {
            (self.selected_card + len - 1) % len
        };
    }

    pub fn click_egg(&mut self) {
        self.easter_egg.click(&mut self.scheduler);
    }

    pub fn submit_contact(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if let Some(params) = self.contact_form.submit(&timestamp()) {
            tx.send(Action::SendContact(params))?;
        }

        Ok(())
    }

    pub fn handle_contact_delivered(&mut self) {
        self.contact_form.delivered(&mut self.scheduler);
    }

    pub fn handle_contact_failed(&mut self, err: &str) {
        self.contact_form.failed(err);
    }

    fn contact_focused(&self) -> bool {
        self.panels.is_active(PanelId::Contact)
    }

    pub fn handle_enter(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.is_booting() {
            self.skip_boot();
            return Ok(());
        }

        if self.contact_focused() {
            if let Some(params) = self.contact_form.enter(&timestamp()) {
                tx.send(Action::SendContact(params))?;
            }
            return Ok(());
        }

        let raw = self.take_command();
        if !raw.trim().is_empty() {
            self.run_command(&raw);
            return Ok(());
        }

        match self.panels.active() {
            None => self.open_panel(self.selected_panel()),
            Some(PanelId::FunZone) => self.click_egg(),
            Some(_) => {}
        }

        Ok(())
    }

    pub fn handle_input(&mut self, input: Input, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.is_booting() {
            self.skip_boot();
            return Ok(());
        }

        if self.contact_focused() {
            if let Input {
                key: Key::Char('s'),
                ctrl: true,
                ..
            } = input
            {
                return self.submit_contact(tx);
            }

            self.contact_form.input(input);
            return Ok(());
        }

        if self.panels.is_dashboard() {
            match input.key {
                Key::Left | Key::Up => {
                    self.move_selection(false);
                    return Ok(());
                }
                Key::Right | Key::Down => {
                    self.move_selection(true);
                    return Ok(());
                }
                _ => {}
            }
        }

        self.command_input.input(input);

        Ok(())
    }

    pub fn handle_paste(&mut self, text: &str) {
        if self.is_booting() {
            return;
        }

        if self.contact_focused() {
            self.contact_form.paste(text);
        } else {
            self.command_input.insert_str(text.replace(['\n', '\r'], " "));
        }
    }

    pub fn handle_tab(&mut self, forward: bool) {
        if self.contact_focused() {
            if forward {
                self.contact_form.focus_next();
            } else {
                self.contact_form.focus_prev();
            }
        } else if self.panels.is_dashboard() {
            self.move_selection(forward);
        }
    }

    pub fn handle_esc(&mut self) {
        if self.is_booting() {
            self.skip_boot();
            return;
        }

        self.close_panels();
    }

    pub fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<()> {
        if self.is_booting() {
            self.skip_boot();
            return Ok(());
        }

        let hit = self
            .hitboxes
            .iter()
            .rev()
            .find(|(rect, _)| {
                column >= rect.x
                    && column < rect.x + rect.width
                    && row >= rect.y
                    && row < rect.y + rect.height
            })
            .map(|(_, hitbox)| *hitbox);

        match hit {
            Some(Hitbox::Card(panel)) => self.open_panel(panel),
            Some(Hitbox::Close) => self.close_panels(),
            Some(Hitbox::EggTrigger) => self.click_egg(),
            Some(Hitbox::Field(FormField::Submit)) => {
                self.contact_form.focus = FormField::Submit;
                self.submit_contact(tx)?;
            }
            Some(Hitbox::Field(field)) => self.contact_form.focus = field,
            None => {}
        }

        Ok(())
    }
}

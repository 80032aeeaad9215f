#[cfg(test)]
#[path = "contact_form_test.rs"]
mod tests;

use std::time::Duration;

use strum_macros::{Display, EnumIter};
use tui_textarea::{Input, TextArea};

use super::Scheduler;
use crate::domain::models::failure_text;
use crate::domain::models::ContactSubmission;
use crate::domain::models::EmailParams;
use crate::domain::models::FormResponse;
use crate::domain::models::FormResponseKind;
use crate::domain::models::Step;
use crate::domain::models::SUCCESS_TEXT;

pub const SUBMIT_IDLE_DELAY: Duration = Duration::from_millis(1500);
pub const SUCCESS_CLEAR_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
    Submit,
}

impl FormField {
    fn index(&self) -> Option<usize> {
        match self {
            FormField::Name => Some(0),
            FormField::Email => Some(1),
            FormField::Subject => Some(2),
            FormField::Message => Some(3),
            FormField::Submit => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name *",
            FormField::Email => "Email *",
            FormField::Subject => "Subject",
            FormField::Message => "Message *",
            FormField::Submit => "Send",
        }
    }

    fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Submit,
            FormField::Submit => FormField::Name,
        }
    }

    fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::Submit,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
            FormField::Submit => FormField::Message,
        }
    }
}

pub struct ContactFormProps {
    pub recipient_name: String,
    pub fallback_email: String,
}

pub struct ContactForm<'a> {
    fields: [TextArea<'a>; 4],
    pub focus: FormField,
    pending: bool,
    response: Option<FormResponse>,
    generation: u64,
    recipient_name: String,
    fallback_email: String,
}

impl<'a> ContactForm<'a> {
    pub fn new(props: ContactFormProps) -> ContactForm<'a> {
        ContactForm {
            fields: Default::default(),
            focus: FormField::Name,
            pending: false,
            response: None,
            generation: 0,
            recipient_name: props.recipient_name,
            fallback_email: props.fallback_email,
        }
    }

    pub fn textarea(&self, field: FormField) -> Option<&TextArea<'a>> {
        field.index().map(|i| &self.fields[i])
    }

    pub fn value(&self, field: FormField) -> String {
        match field.index() {
            Some(i) => self.fields[i].lines().join("\n"),
            None => "".to_string(),
        }
    }

    pub fn set_value(&mut self, field: FormField, value: &str) {
        if let Some(i) = field.index() {
            self.fields[i] = TextArea::from(value.split('\n'));
            self.fields[i].move_cursor(tui_textarea::CursorMove::Bottom);
            self.fields[i].move_cursor(tui_textarea::CursorMove::End);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn response(&self) -> Option<&FormResponse> {
        self.response.as_ref()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn input(&mut self, input: Input) {
        if let Some(i) = self.focus.index() {
            self.fields[i].input(input);
        }
    }

    pub fn paste(&mut self, text: &str) {
        if let Some(i) = self.focus.index() {
            self.fields[i].insert_str(text);
        }
    }

    /// Enter inserts a line break in the message body, submits on the submit
    /// control, and otherwise moves to the next field.
    pub fn enter(&mut self, timestamp: &str) -> Option<EmailParams> {
        match self.focus {
            FormField::Message => {
                self.fields[3].insert_newline();
                None
            }
            FormField::Submit => self.submit(timestamp),
            _ => {
                self.focus_next();
                None
            }
        }
    }

    /// Validates the fields and, if they pass, enters the pending state and
    /// returns the parameters to hand to the email service.
    pub fn submit(&mut self, timestamp: &str) -> Option<EmailParams> {
        if self.pending {
            tracing::debug!("contact form already pending, ignoring submit");
            return None;
        }

        let res = ContactSubmission::validate(
            &self.value(FormField::Name),
            &self.value(FormField::Email),
            &self.value(FormField::Subject),
            &self.value(FormField::Message),
            timestamp,
        );

        match res {
            Ok(submission) => {
                self.pending = true;
                Some(submission.into_params(&self.recipient_name))
            }
            Err(err) => {
                self.show(FormResponseKind::Error, &err.to_string());
                None
            }
        }
    }

    pub fn delivered(&mut self, scheduler: &mut Scheduler) {
        let generation = self.show(FormResponseKind::Success, SUCCESS_TEXT);
        self.fields = Default::default();
        self.focus = FormField::Name;
        scheduler.schedule(SUBMIT_IDLE_DELAY, Step::SubmitIdle);
        scheduler.schedule(SUCCESS_CLEAR_DELAY, Step::ResponseClear { generation });
    }

    pub fn failed(&mut self, err: &str) {
        tracing::error!(error = err, "contact message delivery failed");
        let text = failure_text(&self.fallback_email);
        self.show(FormResponseKind::Error, &text);
        self.pending = false;
    }

    pub fn set_idle(&mut self) {
        self.pending = false;
    }

    pub fn clear_response(&mut self, generation: u64) {
        if let Some(response) = &self.response {
            if response.generation == generation {
                self.response = None;
            }
        }
    }

    fn show(&mut self, kind: FormResponseKind, text: &str) -> u64 {
        self.generation += 1;
        self.response = Some(FormResponse {
            kind,
            text: text.to_string(),
            generation: self.generation,
        });

        self.generation
    }
}

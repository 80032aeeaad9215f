use super::EmailParams;

#[derive(Debug, Clone)]
pub enum Action {
    SendContact(EmailParams),
}

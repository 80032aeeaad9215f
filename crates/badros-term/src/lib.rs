//! BadrOS: a personal portfolio that boots like an operating system.
//!
//! This crate provides the terminal interface: a boot splash, a dashboard of
//! module cards, a command line, animated panels and a contact form that
//! delivers through a transactional email service.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;
pub use application::ui::{destruct_terminal_for_panic, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, EmailClient, EmailClientName, EmailParams, Event, PanelId};
pub use domain::services::AppStateProps;
pub use infrastructure::clients::EmailClientManager;

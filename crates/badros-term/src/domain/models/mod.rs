mod action;
mod command;
mod contact;
pub mod content;
mod email_client;
mod event;
mod panel;
mod step;

pub use action::*;
pub use command::*;
pub use contact::*;
pub use email_client::*;
pub use event::*;
pub use panel::*;
pub use step::*;

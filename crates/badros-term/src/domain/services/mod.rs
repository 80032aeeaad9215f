pub mod actions;
mod animator;
mod app_state;
mod boot;
mod command_line;
mod contact_form;
mod easter_egg;
pub mod events;
mod panels;
mod scheduler;

pub use animator::*;
pub use app_state::*;
pub use boot::*;
pub use command_line::*;
pub use contact_form::*;
pub use easter_egg::*;
pub use panels::*;
pub use scheduler::*;

//! Core domain logic for the portfolio terminal.
//!
//! This module contains the state machines and data models that drive the
//! screens, independent of the terminal they are drawn on or the services
//! they talk to.

pub mod models;
pub mod services;

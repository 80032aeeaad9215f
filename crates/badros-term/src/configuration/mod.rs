//! Configuration management for the terminal interface.
//!
//! This module resolves the email service settings, contact labels and
//! startup options from defaults, a TOML file and command-line flags.

mod config;

pub use config::*;

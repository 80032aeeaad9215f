//! Application layer orchestrating the terminal interface.
//!
//! This module parses the command line, draws the screens and runs the main
//! UI loop, coordinating between the domain state and the terminal.

pub mod cli;
pub mod render;
pub mod ui;

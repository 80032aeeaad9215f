//! Infrastructure layer providing external integrations.
//!
//! This module contains the implementations of the domain's client traits,
//! currently the transactional email service behind the contact form.

pub mod clients;

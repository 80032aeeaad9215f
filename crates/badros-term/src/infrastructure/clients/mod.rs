pub mod emailjs;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::EmailClientBox;
use crate::domain::models::EmailClientName;

pub struct EmailClientManager {}

impl EmailClientManager {
    pub fn get(name: EmailClientName) -> Result<EmailClientBox> {
        if name == EmailClientName::EmailJs {
            return Ok(Box::<emailjs::EmailJs>::default());
        }

        bail!(format!("No email client implemented for {name}"))
    }
}

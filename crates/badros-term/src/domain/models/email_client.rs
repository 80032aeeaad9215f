use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, EnumVariantNames};

use crate::domain::models::EmailParams;

#[derive(
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    Display,
    EnumString,
    EnumVariantNames,
    Serialize,
    Deserialize,
    EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum EmailClientName {
    #[default]
    EmailJs,
}

/// Transactional email delivery. Implementations make no delivery guarantee
/// beyond reporting whether the service accepted the request.
#[async_trait]
pub trait EmailClient: Send + Sync {
    fn name(&self) -> EmailClientName;
    async fn send(&self, params: EmailParams) -> Result<()>;
}

pub type EmailClientBox = Box<dyn EmailClient>;

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::EmailClient;
use crate::domain::models::EmailClientName;
use crate::domain::models::EmailParams;

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailParams,
}

pub struct EmailJs {
    url: String,
    service_id: String,
    template_id: String,
    public_key: String,
    timeout: String,
}

impl Default for EmailJs {
    fn default() -> EmailJs {
        EmailJs {
            url: Config::get(ConfigKey::EmailApiUrl),
            service_id: Config::get(ConfigKey::EmailServiceId),
            template_id: Config::get(ConfigKey::EmailTemplateId),
            public_key: Config::get(ConfigKey::EmailPublicKey),
            timeout: "10000".to_string(),
        }
    }
}

#[async_trait]
impl EmailClient for EmailJs {
    fn name(&self) -> EmailClientName {
        EmailClientName::EmailJs
    }

    async fn send(&self, params: EmailParams) -> Result<()> {
        if self.url.is_empty() {
            bail!("Email API URL is not defined");
        }

        let req = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: &params,
        };

        let res = reqwest::Client::new()
            .post(format!("{}/api/v1.0/email/send", self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .json(&req)
            .send()
            .await?;

        let status = res.status().as_u16();
        if !res.status().is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::error!(status = status, body = %body, "email service rejected the request");
            bail!(format!("Email service rejected the request: {status}"));
        }

        tracing::debug!(status = status, reply_to = %params.reply_to, "email accepted");

        Ok(())
    }
}

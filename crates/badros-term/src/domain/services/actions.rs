use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::EmailClientBox;
use crate::domain::models::EmailParams;
use crate::domain::models::Event;

async fn send_contact(
    email_client: &EmailClientBox,
    params: EmailParams,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let client_name = email_client.name();
    match email_client.send(params).await {
        Ok(()) => {
            tracing::info!(client = %client_name, "contact message delivered");
            event_tx.send(Event::ContactDelivered)?;
        }
        Err(err) => {
            tracing::error!(client = %client_name, error = ?err, "contact message failed");
            event_tx.send(Event::ContactFailed(format!("{err}")))?;
        }
    }

    Ok(())
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        email_client: EmailClientBox,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let email_client_arc = Arc::new(email_client);

        while let Some(action) = rx.recv().await {
            let worker_event_tx = event_tx.clone();
            match action {
                Action::SendContact(params) => {
                    let client_worker = email_client_arc.clone();
                    tokio::spawn(async move {
                        send_contact(&client_worker, params, &worker_event_tx).await
                    });
                }
            }
        }

        Ok(())
    }
}

pub mod error;
pub mod message;

use self::error::ServiceError;
use self::message::Message;
use crate::clock::Clock;
use crate::configuration::ServiceConfiguration;
use crate::coordinator::{CommandOutcome, Coordinator};
use crate::event::ChatCommandEvent;
use crate::host::Host;
use std::collections::HashMap;
use tokio::sync::{mpsc, oneshot};
use tracing_futures::Instrument;

/// Runs a [`Coordinator`] on its own task so that events arriving from
/// several threads are applied one at a time.
pub struct CoordinatorService<H, C> {
    coordinator: Coordinator<H, C>,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
}

impl<H, C> CoordinatorService<H, C>
where
    H: Host + Send + 'static,
    C: Clock + Send + 'static,
{
    pub fn new(coordinator: Coordinator<H, C>) -> Self {
        Self::with_conf(coordinator, &ServiceConfiguration::default())
    }

    pub fn with_conf(coordinator: Coordinator<H, C>, conf: &ServiceConfiguration) -> Self {
        let (tx, rx) = mpsc::channel(conf.mailbox_capacity.max(1));
        Self {
            coordinator,
            tx,
            rx,
        }
    }

    pub fn handle(&self) -> CoordinatorHandle {
        CoordinatorHandle {
            tx: self.tx.clone(),
        }
    }

    pub fn spawn(self) -> CoordinatorHandle {
        let handle = self.handle();
        let process = CoordinatorProcess {
            coordinator: self.coordinator,
            rx: self.rx,
        };
        tokio::spawn(
            process
                .handle_messages()
                .instrument(tracing::debug_span!("forfeit_coordinator")),
        );
        handle
    }
}

struct CoordinatorProcess<H, C> {
    coordinator: Coordinator<H, C>,
    rx: mpsc::Receiver<Message>,
}

impl<H, C> CoordinatorProcess<H, C>
where
    H: Host,
    C: Clock,
{
    async fn handle_messages(mut self) {
        while let Some(msg) = self.rx.recv().await {
            match msg {
                Message::ChatCommand { event, tx } => {
                    let res = self.coordinator.handle_chat_command(&event);
                    if let Err(e) = &res {
                        tracing::debug!(
                            client_id = event.client_id.get(),
                            "dropped chat command: {}",
                            e
                        );
                    }
                    if tx.send(res).is_err() {
                        tracing::warn!("failed to send a callback for ChatCommand");
                    }
                }

                Message::GoalScored { tx } => {
                    let res = self.coordinator.handle_goal_scored();
                    if let Err(e) = &res {
                        tracing::debug!("dropped goal scored event: {}", e);
                    }
                    if tx.send(res).is_err() {
                        tracing::warn!("failed to send a callback for GoalScored");
                    }
                }
            }
        }
        tracing::trace!("coordinator process is terminated since every handle is dropped");
    }
}

#[derive(Clone)]
pub struct CoordinatorHandle {
    tx: mpsc::Sender<Message>,
}

impl CoordinatorHandle {
    pub async fn chat_command(
        &self,
        event: ChatCommandEvent,
    ) -> Result<CommandOutcome, ServiceError> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(Message::ChatCommand { event, tx })
            .await
            .map_err(|_| ServiceError::Terminated)?;
        let outcome = rx.await.map_err(|_| ServiceError::Crashed)??;
        Ok(outcome)
    }

    /// Like [`chat_command`](Self::chat_command), taking the host's raw
    /// payload. Payloads without a command or a valid client id are dropped.
    pub async fn chat_command_fields(
        &self,
        fields: &HashMap<String, String>,
    ) -> Result<CommandOutcome, ServiceError> {
        let event = ChatCommandEvent::from_fields(fields).map_err(|e| {
            tracing::debug!("dropped chat command payload: {}", e);
            e
        })?;
        self.chat_command(event).await
    }

    pub async fn goal_scored(&self) -> Result<bool, ServiceError> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(Message::GoalScored { tx })
            .await
            .map_err(|_| ServiceError::Terminated)?;
        let cancelled = rx.await.map_err(|_| ServiceError::Crashed)??;
        Ok(cancelled)
    }
}

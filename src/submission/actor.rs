//! # Submission Actor
//!
//! The server half of the submission collaborator. It owns the [`SubmitBackend`] and
//! the receiving end of the channel, and handles requests one at a time.

use crate::submission::{SubmissionClient, SubmissionRequest, SubmitBackend, SubmitError};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Processes submission requests sequentially against one backend.
///
/// **Concurrency Model**:
/// The backend is owned by the actor task, so it needs no locking. Requests that
/// arrive while one is being handled wait in the channel.
pub struct SubmissionActor<B: SubmitBackend> {
    receiver: mpsc::Receiver<SubmissionRequest>,
    backend: B,
}

impl<B: SubmitBackend> SubmissionActor<B> {
    pub fn new(buffer_size: usize, backend: B) -> (Self, SubmissionClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, backend };
        let client = SubmissionClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!("Submission actor started");
        let mut accepted = 0usize;
        let mut rejected = 0usize;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SubmissionRequest::Submit { record, respond_to } => {
                    debug!(?record, "Submit");
                    let id = record.id;
                    let result = self
                        .backend
                        .accept(record)
                        .await
                        .map_err(SubmitError::Rejected);
                    match &result {
                        Ok(receipt) => {
                            accepted += 1;
                            info!(%id, message = %receipt.message, "Accepted");
                        }
                        Err(e) => {
                            rejected += 1;
                            warn!(%id, error = %e, "Rejected");
                        }
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(accepted, rejected, "Submission actor shutdown");
    }
}

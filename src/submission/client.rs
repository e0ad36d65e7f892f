//! # Submission Client
//!
//! [`ProductSubmitter`] is the seam the new-product form talks to. The production
//! implementation is [`SubmissionClient`], which forwards records to a
//! [`SubmissionActor`](super::SubmissionActor) over a Tokio channel.

use crate::submission::{SubmissionRecord, SubmissionRequest, SubmitError, SubmitReceipt};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Accepts one product record and reports success or failure.
#[async_trait]
pub trait ProductSubmitter: Send + Sync {
    async fn submit(&self, record: SubmissionRecord) -> Result<SubmitReceipt, SubmitError>;
}

/// Cloneable handle to a running submission actor.
///
/// A timeout, when set, bounds how long a caller waits for the answer. The request
/// itself is not cancelled: the actor still finishes handling it.
#[derive(Clone)]
pub struct SubmissionClient {
    sender: mpsc::Sender<SubmissionRequest>,
    timeout: Option<Duration>,
}

impl SubmissionClient {
    pub fn new(sender: mpsc::Sender<SubmissionRequest>) -> Self {
        Self {
            sender,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl ProductSubmitter for SubmissionClient {
    #[instrument(skip(self, record), fields(id = %record.id))]
    async fn submit(&self, record: SubmissionRecord) -> Result<SubmitReceipt, SubmitError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SubmissionRequest::Submit { record, respond_to })
            .await
            .map_err(|_| SubmitError::ActorClosed)?;

        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, response)
                .await
                .map_err(|_| SubmitError::Timeout(millis(limit)))?
                .map_err(|_| SubmitError::ActorDropped)?,
            None => response.await.map_err(|_| SubmitError::ActorDropped)?,
        }
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

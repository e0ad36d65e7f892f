//! # Submission Messages
//!
//! The multipart-style record sent for a new product, the receipt that comes back,
//! and the request envelope passed from [`SubmissionClient`](super::SubmissionClient)
//! to [`SubmissionActor`](super::SubmissionActor).

use crate::model::ProductId;
use crate::submission::SubmitError;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the submission actor.
pub type Response<T> = oneshot::Sender<Result<T, SubmitError>>;

/// The photo part of a submission. Only the URI handle is sent, never the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoPart {
    pub uri: String,
    pub content_type: String,
    pub file_name: String,
}

impl PhotoPart {
    pub fn jpeg(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            content_type: "image/jpeg".to_string(),
            file_name: "photo.jpg".to_string(),
        }
    }
}

/// One new-product record, shaped like the multipart form the backend expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: ProductId,
    pub name: String,
    pub notes: String,
    pub price: String,
    pub quantity: u32,
    pub photo: Option<PhotoPart>,
}

/// What the backend answers on success. Only shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub message: String,
}

impl SubmitReceipt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Internal message type sent to the submission actor.
#[derive(Debug)]
pub enum SubmissionRequest {
    Submit {
        record: SubmissionRecord,
        respond_to: Response<SubmitReceipt>,
    },
}

//! # Submission Backends
//!
//! A [`SubmitBackend`] is whatever ultimately receives a product record. The actor
//! owns exactly one and calls it once per request, in arrival order.
//!
//! The catalog ships without a network backend: [`InMemoryBackend`] keeps every
//! accepted record in memory, and [`RejectingBackend`] refuses everything, which is
//! handy for exercising the failure path end to end.

use crate::submission::{SubmissionRecord, SubmitReceipt};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

/// Receiver of submitted product records.
#[async_trait]
pub trait SubmitBackend: Send + 'static {
    /// Accepts one record, or returns the reason it was refused.
    async fn accept(&mut self, record: SubmissionRecord) -> Result<SubmitReceipt, String>;
}

/// Stores accepted records in memory. Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    received: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record accepted so far.
    pub fn received(&self) -> Vec<SubmissionRecord> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl SubmitBackend for InMemoryBackend {
    async fn accept(&mut self, record: SubmissionRecord) -> Result<SubmitReceipt, String> {
        if record.name.trim().is_empty() {
            return Err("Product name is required".to_string());
        }
        let message = format!("Product {} saved", record.name);
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
        Ok(SubmitReceipt::new(message))
    }
}

/// Refuses every record with a fixed reason.
#[derive(Debug, Clone)]
pub struct RejectingBackend {
    reason: String,
}

impl RejectingBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl SubmitBackend for RejectingBackend {
    async fn accept(&mut self, _record: SubmissionRecord) -> Result<SubmitReceipt, String> {
        Err(self.reason.clone())
    }
}

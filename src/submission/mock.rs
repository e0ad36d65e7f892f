//! # Mock Submitter
//!
//! Utilities for testing the new-product flow without a real backend.
//!
//! [`MockSubmitter`] hands out a real [`SubmissionClient`] whose requests are answered
//! from a queue of expectations, in order:
//!
//! ```rust
//! use catalog_view::submission::mock::MockSubmitter;
//! use catalog_view::submission::SubmitError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockSubmitter::new();
//!     mock.expect_submit().return_ok("Product saved");
//!     mock.expect_submit().return_err(SubmitError::Rejected("offline".into()));
//!
//!     let client = mock.client();
//!     // ... drive a ProductForm with `client` ...
//!     # let _ = client;
//! }
//! ```
//!
//! When a test needs to inspect the exact record or control the timing of the answer,
//! use [`create_mock_submitter`] and [`expect_submit`] instead.

use crate::submission::{
    SubmissionClient, SubmissionRecord, SubmissionRequest, SubmitError, SubmitReceipt,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One queued answer.
struct Expectation {
    delay: Option<Duration>,
    response: Result<SubmitReceipt, SubmitError>,
}

/// A mock submitter with expectation tracking for fluent testing.
pub struct MockSubmitter {
    client: SubmissionClient,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    received: Arc<Mutex<Vec<SubmissionRecord>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSubmitter {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SubmissionRequest>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::<Expectation>::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let SubmissionRequest::Submit { record, respond_to } = request;
                received_clone.lock().unwrap().push(record);

                let expectation = expectations_clone.lock().unwrap().pop_front();
                match expectation {
                    Some(Expectation { delay, response }) => {
                        if let Some(delay) = delay {
                            tokio::time::sleep(delay).await;
                        }
                        let _ = respond_to.send(response);
                    }
                    None => panic!("Unexpected submission: no expectation queued"),
                }
            }
        });

        Self {
            client: SubmissionClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> SubmissionClient {
        self.client.clone()
    }

    /// Expects one `submit` call.
    pub fn expect_submit(&mut self) -> SubmitExpectationBuilder {
        SubmitExpectationBuilder {
            delay: None,
            expectations: self.expectations.clone(),
        }
    }

    /// Records received so far, in arrival order.
    pub fn received(&self) -> Vec<SubmissionRecord> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `submit` expectations.
pub struct SubmitExpectationBuilder {
    delay: Option<Duration>,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl SubmitExpectationBuilder {
    /// Waits `delay` before answering.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful receipt.
    pub fn return_ok(self, message: impl Into<String>) {
        self.push(Ok(SubmitReceipt::new(message)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: SubmitError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<SubmitReceipt, SubmitError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            delay: self.delay,
            response,
        });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests off `receiver` with [`expect_submit`]
/// and answers (or withholds an answer) through the returned responder.
pub fn create_mock_submitter(
    buffer_size: usize,
) -> (SubmissionClient, mpsc::Receiver<SubmissionRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SubmissionClient::new(sender), receiver)
}

/// Helper to take the next Submit request.
pub async fn expect_submit(
    receiver: &mut mpsc::Receiver<SubmissionRequest>,
) -> Option<(
    SubmissionRecord,
    tokio::sync::oneshot::Sender<Result<SubmitReceipt, SubmitError>>,
)> {
    match receiver.recv().await {
        Some(SubmissionRequest::Submit { record, respond_to }) => Some((record, respond_to)),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use crate::submission::ProductSubmitter;

    fn record(name: &str) -> SubmissionRecord {
        SubmissionRecord {
            id: ProductId(1),
            name: name.to_string(),
            notes: String::new(),
            price: "1.00".to_string(),
            quantity: 1,
            photo: None,
        }
    }

    #[tokio::test]
    async fn test_mock_answers_in_order() {
        let mut mock = MockSubmitter::new();
        mock.expect_submit().return_ok("first");
        mock.expect_submit()
            .return_err(SubmitError::Rejected("second".to_string()));

        let client = mock.client();
        let first = client.submit(record("a")).await;
        let second = client.submit(record("b")).await;

        assert_eq!(first.unwrap().message, "first");
        assert_eq!(second, Err(SubmitError::Rejected("second".to_string())));
        assert_eq!(mock.received().len(), 2);
        assert_eq!(mock.received()[1].name, "b");
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_fails_on_unused_expectation() {
        let mut mock = MockSubmitter::new();
        mock.expect_submit().return_ok("never used");
        mock.verify();
    }
}

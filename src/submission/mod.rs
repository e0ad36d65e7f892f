//! # Product Submission
//!
//! The collaborator behind the new-product form: it accepts one record and answers
//! with a receipt or an error. Nothing in the view model depends on what happens to
//! the record afterwards.
//!
//! ## Structure
//!
//! - [`ProductSubmitter`] - the async seam the form calls
//! - [`SubmissionClient`] / [`SubmissionActor`] - channel-backed implementation; the
//!   actor owns a [`SubmitBackend`] and handles one request at a time
//! - [`InMemoryBackend`] / [`RejectingBackend`] - the backends shipped with the crate
//! - [`mock`] - [`MockSubmitter`](mock::MockSubmitter) and helpers for tests
//!
//! ## Usage
//!
//! ```rust
//! use catalog_view::model::ProductId;
//! use catalog_view::submission::{
//!     InMemoryBackend, ProductSubmitter, SubmissionActor, SubmissionRecord,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = InMemoryBackend::new();
//!     let (actor, client) = SubmissionActor::new(8, backend.clone());
//!     let handle = tokio::spawn(actor.run());
//!
//!     let record = SubmissionRecord {
//!         id: ProductId(1),
//!         name: "Lamp".into(),
//!         notes: String::new(),
//!         price: "49.90".into(),
//!         quantity: 2,
//!         photo: None,
//!     };
//!     let receipt = client.submit(record).await.unwrap();
//!     assert_eq!(receipt.message, "Product Lamp saved");
//!     assert_eq!(backend.received().len(), 1);
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```

pub mod actor;
pub mod backend;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::SubmissionActor;
pub use backend::{InMemoryBackend, RejectingBackend, SubmitBackend};
pub use client::{ProductSubmitter, SubmissionClient};
pub use error::SubmitError;
pub use message::{PhotoPart, Response, SubmissionRecord, SubmissionRequest, SubmitReceipt};

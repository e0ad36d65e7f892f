//! The new-product form.
//!
//! Submitting is split in two so a UI can hand the network call to a task and keep
//! handling events meanwhile:
//!
//! 1. [`ProductForm::begin_submit`] validates, assigns the timestamp id and marks the
//!    form as in flight. A second call fails while the returned [`PendingSubmission`]
//!    is alive.
//! 2. [`ProductForm::complete_submit`] takes the collaborator's answer. Success clears
//!    the form; failure keeps every field for a retry.
//!
//! Dropping a [`PendingSubmission`] (or cancelling [`ProductForm::submit`]) releases
//! the form with its draft intact.
//!
//! [`ProductForm::submit`] runs both steps against a [`ProductSubmitter`].

use crate::catalog::edit::parse_quantity;
use crate::catalog::{CatalogError, FieldError, FieldErrors};
use crate::model::{IdSequence, Product};
use crate::submission::{
    PhotoPart, ProductSubmitter, SubmissionRecord, SubmitError, SubmitReceipt,
};
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Message shown to the user when a submission fails, whatever the cause.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to save product";

#[derive(Debug, Default)]
pub struct ProductForm {
    pub name: String,
    pub notes: String,
    pub price: String,
    pub quantity: String,
    pub photo: Option<String>,
    ids: Arc<IdSequence>,
    in_flight: Arc<AtomicBool>,
    last_error: Option<String>,
    last_message: Option<String>,
}

/// Holds the form's in-flight flag and clears it when dropped.
#[derive(Debug)]
struct InFlight(Arc<AtomicBool>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A submission that has been started and not yet completed.
#[derive(Debug)]
pub struct PendingSubmission {
    record: SubmissionRecord,
    registered_at: NaiveDate,
    in_flight: InFlight,
}

impl PendingSubmission {
    pub fn record(&self) -> &SubmissionRecord {
        &self.record
    }
}

/// A product accepted by the collaborator, ready to be added to a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedProduct {
    pub product: Product,
    pub receipt: SubmitReceipt,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form drawing identifiers from `ids`, shared with every other form of the app.
    pub fn with_ids(ids: Arc<IdSequence>) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    pub fn pick_photo(&mut self, uri: impl Into<String>) {
        self.photo = Some(uri.into());
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// User-facing error from the last failed submission.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Receipt message from the last successful submission.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Checks that the required fields are present and returns the parsed quantity.
    pub fn validate(&self) -> Result<u32, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.push(FieldError::EmptyName);
        }
        if self.price.trim().is_empty() {
            errors.push(FieldError::MissingPrice);
        }
        let quantity = match parse_quantity(&self.quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                errors.push(e);
                0
            }
        };
        errors.into_result().map(|()| quantity)
    }

    /// Starts a submission at time `now`.
    ///
    /// # Errors
    /// - [`CatalogError::SubmissionInFlight`] if a previous submission has not completed
    /// - [`CatalogError::InvalidFields`] if validation fails
    /// - [`CatalogError::InvalidTimestamp`] if `now` is before the Unix epoch
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<PendingSubmission, CatalogError> {
        if self.is_in_flight() {
            warn!("Submit ignored: already in flight");
            return Err(CatalogError::SubmissionInFlight);
        }
        let quantity = self.validate()?;

        let record = SubmissionRecord {
            id: self.ids.next(now)?,
            name: self.name.clone(),
            notes: self.notes.clone(),
            price: self.price.clone(),
            quantity,
            photo: self.photo.clone().map(PhotoPart::jpeg),
        };
        debug!(?record, "Submission started");

        self.in_flight.store(true, Ordering::Release);
        self.last_error = None;
        Ok(PendingSubmission {
            record,
            registered_at: now.date_naive(),
            in_flight: InFlight(Arc::clone(&self.in_flight)),
        })
    }

    /// Finishes a submission with the collaborator's answer.
    pub fn complete_submit(
        &mut self,
        pending: PendingSubmission,
        outcome: Result<SubmitReceipt, SubmitError>,
    ) -> Result<SubmittedProduct, CatalogError> {
        let PendingSubmission {
            record,
            registered_at,
            in_flight,
        } = pending;
        drop(in_flight);

        match outcome {
            Ok(receipt) => {
                info!(id = %record.id, message = %receipt.message, "Product submitted");
                let mut product = Product::new(record.id, record.name, registered_at)
                    .with_notes(record.notes)
                    .with_price(record.price)
                    .with_quantity(record.quantity);
                product.photo = record.photo.map(|part| part.uri);

                *self = Self {
                    ids: Arc::clone(&self.ids),
                    in_flight: Arc::clone(&self.in_flight),
                    last_message: Some(receipt.message.clone()),
                    ..Self::default()
                };
                Ok(SubmittedProduct { product, receipt })
            }
            Err(e) => {
                error!(id = %record.id, error = %e, "Product submission failed");
                self.last_error = Some(SUBMIT_FAILED_MESSAGE.to_string());
                Err(CatalogError::Submission(e))
            }
        }
    }

    /// Validates, sends the record and applies the answer.
    pub async fn submit<S>(&mut self, submitter: &S) -> Result<SubmittedProduct, CatalogError>
    where
        S: ProductSubmitter + ?Sized,
    {
        let pending = self.begin_submit(Utc::now())?;
        let outcome = submitter.submit(pending.record().clone()).await;
        self.complete_submit(pending, outcome)
    }
}

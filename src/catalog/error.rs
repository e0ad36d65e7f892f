//! Error types for the catalog view model and its forms.

use crate::model::{PreEpochTimestamp, ProductId};
use crate::submission::SubmitError;
use thiserror::Error;

/// A single field-level validation failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    EmptyName,

    #[error("Price is required")]
    MissingPrice,

    #[error("Quantity is required")]
    MissingQuantity,

    /// The quantity text is not a non-negative integer.
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),
}

/// Every field error found in one form, in field order.
#[derive(Debug, Clone, Default, Error, PartialEq, Eq)]
#[error("{}", join_errors(.0))]
pub struct FieldErrors(pub Vec<FieldError>);

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl FieldErrors {
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, error: &FieldError) -> bool {
        self.0.contains(error)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// `Ok(())` if nothing was collected.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// A product with this id is already in the collection.
    #[error("Duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// The operation needs an open edit surface.
    #[error("No product is being edited")]
    NotEditing,

    /// One or more form fields failed validation.
    #[error("Invalid fields: {0}")]
    InvalidFields(FieldErrors),

    /// A submission for this form is still outstanding.
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// The clock gave a time an identifier cannot be built from.
    #[error(transparent)]
    InvalidTimestamp(#[from] PreEpochTimestamp),

    /// The submission collaborator reported a failure.
    #[error(transparent)]
    Submission(#[from] SubmitError),
}

impl From<FieldErrors> for CatalogError {
    fn from(errors: FieldErrors) -> Self {
        CatalogError::InvalidFields(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_display_joins_messages() {
        let errors = FieldErrors(vec![FieldError::EmptyName, FieldError::MissingPrice]);
        assert_eq!(errors.to_string(), "Name is required; Price is required");
        assert_eq!(
            CatalogError::InvalidFields(errors).to_string(),
            "Invalid fields: Name is required; Price is required"
        );
    }
}

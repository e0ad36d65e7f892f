//! The edit surface opened from a product card.
//!
//! The form is pre-filled from the product and only overwrites `name`, `notes`,
//! `price` and `quantity`. Everything else passes through verbatim.

use crate::catalog::{FieldError, FieldErrors};
use crate::model::Product;

/// Parses quantity text as typed by the user.
///
/// Surrounding whitespace is ignored. Anything else that is not a non-negative
/// integer (including `"12abc"` and `"-1"`) is rejected.
pub fn parse_quantity(text: &str) -> Result<u32, FieldError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldError::MissingQuantity);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| FieldError::InvalidQuantity(text.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub name: String,
    pub notes: String,
    pub price: String,
    pub quantity: String,
}

impl EditForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            notes: product.notes.clone(),
            price: product.price.clone(),
            quantity: product.quantity.to_string(),
        }
    }

    /// Produces the updated record, or every field error found.
    pub fn apply_to(&self, original: &Product) -> Result<Product, FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.push(FieldError::EmptyName);
        }
        let quantity = match parse_quantity(&self.quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                errors.push(e);
                original.quantity
            }
        };
        errors.into_result()?;

        Ok(Product {
            name: self.name.clone(),
            notes: self.notes.clone(),
            price: self.price.clone(),
            quantity,
            ..original.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn original() -> Product {
        Product::new(5u64, "Produto 1", NaiveDate::from_ymd_opt(2023, 7, 10).unwrap())
            .with_notes("Observações do Produto 1")
            .with_price("100.00")
            .with_quantity(10)
            .with_photo("https://via.placeholder.com/60")
    }

    #[test]
    fn test_prefill_and_apply_keeps_untouched_fields() {
        let product = original();
        let mut form = EditForm::from_product(&product);
        assert_eq!(form.quantity, "10");

        form.name = "Produto 1b".to_string();
        form.quantity = " 12 ".to_string();
        let updated = form.apply_to(&product).unwrap();

        assert_eq!(updated.name, "Produto 1b");
        assert_eq!(updated.quantity, 12);
        assert_eq!(updated.id, product.id);
        assert_eq!(updated.photo, product.photo);
        assert_eq!(updated.registered_at, product.registered_at);
    }

    #[test]
    fn test_non_numeric_quantity_is_a_field_error() {
        let product = original();
        let mut form = EditForm::from_product(&product);
        form.quantity = "12abc".to_string();

        let errors = form.apply_to(&product).unwrap_err();
        assert!(errors.contains(&FieldError::InvalidQuantity("12abc".to_string())));
    }

    #[test]
    fn test_all_errors_are_reported_together() {
        let product = original();
        let mut form = EditForm::from_product(&product);
        form.name = "   ".to_string();
        form.quantity = "-1".to_string();

        let errors = form.apply_to(&product).unwrap_err();
        assert_eq!(errors.iter().count(), 2);
        assert!(errors.contains(&FieldError::EmptyName));
    }

    #[test]
    fn test_parse_quantity_edge_cases() {
        assert_eq!(parse_quantity("0"), Ok(0));
        assert_eq!(parse_quantity(""), Err(FieldError::MissingQuantity));
        assert_eq!(
            parse_quantity("1.5"),
            Err(FieldError::InvalidQuantity("1.5".to_string()))
        );
    }
}

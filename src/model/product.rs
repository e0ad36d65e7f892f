//! Represents one item of the product catalog.
//!
//! A `Product` is created from seed data or by the new-product form, and is only ever
//! replaced as a whole record by the [`merge`](crate::engine::merge) engine.
//!
//! `price` is kept as the text the user typed. No arithmetic is ever performed on it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

use super::FilterField;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u64);

/// A creation time that cannot be turned into an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Timestamp {0} ms is before the Unix epoch")]
pub struct PreEpochTimestamp(pub i64);

impl ProductId {
    /// Builds an identifier from a creation timestamp (milliseconds since the epoch).
    pub fn from_timestamp(at: DateTime<Utc>) -> Result<Self, PreEpochTimestamp> {
        let millis = at.timestamp_millis();
        u64::try_from(millis)
            .map(Self)
            .map_err(|_| PreEpochTimestamp(millis))
    }
}

/// Hands out strictly increasing timestamp identifiers.
///
/// Two requests in the same millisecond (or with a clock that went backwards) get
/// `last + 1` instead of a repeated value.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: AtomicU64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, at: DateTime<Utc>) -> Result<ProductId, PreEpochTimestamp> {
        let now = ProductId::from_timestamp(at)?.0;
        let bump = |last: u64| now.max(last.saturating_add(1));
        let previous = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(bump(last)))
            .unwrap_or_else(|last| last);
        Ok(ProductId(bump(previous)))
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub notes: String,
    pub price: String,
    pub quantity: u32,
    /// URI of the product photo. The image bytes are never owned here.
    pub photo: Option<String>,
    pub registered_at: NaiveDate,
}

impl Product {
    /// Creates a new Product with empty notes, price and photo.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the collection
    /// * `name` - Display label
    /// * `registered_at` - Registration date, immutable afterwards
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, registered_at: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            notes: String::new(),
            price: String::new(),
            quantity: 0,
            photo: None,
            registered_at,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_photo(mut self, uri: impl Into<String>) -> Self {
        self.photo = Some(uri.into());
        self
    }

    /// Text representation of a filterable field, as shown in the product table.
    pub fn field_text(&self, field: FilterField) -> String {
        match field {
            FilterField::Name => self.name.clone(),
            FilterField::Notes => self.notes.clone(),
            FilterField::Quantity => self.quantity.to_string(),
            FilterField::Date => self.registered_at.format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_same_millisecond_gives_distinct_ids() {
        let at = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap();
        let ids = IdSequence::new();

        let first = ids.next(at).unwrap();
        let second = ids.next(at).unwrap();

        assert_eq!(first, ProductId(at.timestamp_millis() as u64));
        assert_eq!(second, ProductId(first.0 + 1));
    }

    #[test]
    fn test_clock_going_back_keeps_ids_increasing() {
        let later = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0).unwrap();
        let ids = IdSequence::new();

        let first = ids.next(later).unwrap();
        assert!(ids.next(earlier).unwrap() > first);
    }

    #[test]
    fn test_pre_epoch_timestamp_is_an_error() {
        let at = Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(ProductId::from_timestamp(at), Err(PreEpochTimestamp(-1000)));
        assert!(IdSequence::new().next(at).is_err());
    }
}

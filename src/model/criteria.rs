//! Filter criteria and the per-field draft/applied policy.
//!
//! Two [`FilterCriteria`] instances live in a view model at any time: the *draft*
//! (edited as the user types) and the *applied* one (committed by an explicit apply).
//! [`FilterPolicy`] decides, field by field, which of the two is actually used.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

/// A filterable column of the product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Name,
    Notes,
    Quantity,
    Date,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Name,
        FilterField::Notes,
        FilterField::Quantity,
        FilterField::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Notes => "notes",
            FilterField::Quantity => "quantity",
            FilterField::Date => "date",
        }
    }
}

impl Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown filter field: {}", s))
    }
}

/// Text pattern per field. An empty pattern matches everything for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub date: String,
}

impl FilterCriteria {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::Notes => &self.notes,
            FilterField::Quantity => &self.quantity,
            FilterField::Date => &self.date,
        }
    }

    pub fn set(&mut self, field: FilterField, pattern: impl Into<String>) {
        let pattern = pattern.into();
        match field {
            FilterField::Name => self.name = pattern,
            FilterField::Notes => self.notes = pattern,
            FilterField::Quantity => self.quantity = pattern,
            FilterField::Date => self.date = pattern,
        }
    }

    /// Builder-style variant of [`FilterCriteria::set`].
    pub fn with(mut self, field: FilterField, pattern: impl Into<String>) -> Self {
        self.set(field, pattern);
        self
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Chooses, per field, whether filtering reads the draft or the applied pattern.
///
/// The default keeps `quantity` live (it filters while the user types) and the other
/// fields committed, which is how the product table has always behaved.
/// [`FilterPolicy::all_committed`] makes every field wait for an explicit apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPolicy {
    live_fields: BTreeSet<FilterField>,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        Self::with_live_fields([FilterField::Quantity])
    }
}

impl FilterPolicy {
    pub fn with_live_fields(fields: impl IntoIterator<Item = FilterField>) -> Self {
        Self {
            live_fields: fields.into_iter().collect(),
        }
    }

    pub fn all_committed() -> Self {
        Self::with_live_fields([])
    }

    pub fn is_live(&self, field: FilterField) -> bool {
        self.live_fields.contains(&field)
    }

    pub fn live_fields(&self) -> impl Iterator<Item = FilterField> + '_ {
        self.live_fields.iter().copied()
    }

    /// Criteria actually in effect: live fields from `draft`, the rest from `applied`.
    pub fn effective(&self, draft: &FilterCriteria, applied: &FilterCriteria) -> FilterCriteria {
        FilterField::ALL
            .into_iter()
            .fold(FilterCriteria::default(), |criteria, field| {
                let source = if self.is_live(field) { draft } else { applied };
                criteria.with(field, source.get(field))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_reads_quantity_from_draft() {
        let draft = FilterCriteria::default()
            .with(FilterField::Name, "draft name")
            .with(FilterField::Quantity, "2");
        let applied = FilterCriteria::default()
            .with(FilterField::Name, "applied name")
            .with(FilterField::Quantity, "9");

        let effective = FilterPolicy::default().effective(&draft, &applied);

        assert_eq!(effective.name, "applied name");
        assert_eq!(effective.quantity, "2");
    }

    #[test]
    fn test_all_committed_policy_ignores_draft() {
        let draft = FilterCriteria::default().with(FilterField::Quantity, "2");
        let applied = FilterCriteria::default();

        let effective = FilterPolicy::all_committed().effective(&draft, &applied);
        assert!(effective.is_empty());
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        assert_eq!("notes".parse::<FilterField>(), Ok(FilterField::Notes));
        assert!("price".parse::<FilterField>().is_err());
    }
}

//! Whole-record replacement.
//!
//! A record is identified by its `id`. Names are display labels and may repeat.

use crate::model::{Product, ProductCollection};

/// What a merge did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The matching record was replaced with different content.
    Replaced,
    /// The matching record already had exactly this content.
    Unchanged,
    /// No record has this id. Nothing is inserted.
    NotFound,
}

/// Returns a copy of `products` with the record sharing `updated.id` replaced.
///
/// All other records pass through unchanged and in order. If nothing matches, the
/// result equals the input.
pub fn merge(products: &[Product], updated: &Product) -> Vec<Product> {
    products
        .iter()
        .map(|product| {
            if product.id == updated.id {
                updated.clone()
            } else {
                product.clone()
            }
        })
        .collect()
}

/// In-place counterpart of [`merge`] over the indexed canonical collection.
pub fn merge_into(collection: &mut ProductCollection, updated: Product) -> MergeOutcome {
    match collection.get(updated.id) {
        None => MergeOutcome::NotFound,
        Some(existing) if *existing == updated => MergeOutcome::Unchanged,
        Some(_) => {
            collection.replace(updated);
            MergeOutcome::Replaced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use chrono::NaiveDate;

    fn products() -> Vec<Product> {
        let date = NaiveDate::from_ymd_opt(2023, 7, 10).unwrap();
        vec![
            Product::new(1u64, "A", date).with_quantity(10),
            Product::new(2u64, "B", date).with_quantity(20),
            Product::new(3u64, "A", date).with_quantity(30),
        ]
    }

    fn changed_positions(before: &[Product], after: &[Product]) -> Vec<usize> {
        before
            .iter()
            .zip(after)
            .enumerate()
            .filter(|(_, (b, a))| b != a)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_merge_replaces_exactly_one_record() {
        let before = products();
        let updated = before[2].clone().with_quantity(31);

        let after = merge(&before, &updated);

        assert_eq!(after.len(), before.len());
        assert_eq!(changed_positions(&before, &after), vec![2]);
        // Same name as record 1, but record 1 is untouched.
        assert_eq!(after[0].quantity, 10);
    }

    #[test]
    fn test_merge_without_match_returns_input() {
        let before = products();
        let stranger = Product::new(42u64, "A", before[0].registered_at);
        assert_eq!(merge(&before, &stranger), before);
    }

    #[test]
    fn test_merge_twice_is_idempotent() {
        let before = products();
        let updated = before[1].clone().with_notes("restocked");

        let once = merge(&before, &updated);
        let twice = merge(&once, &updated);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_into_reports_outcome() {
        let mut collection = ProductCollection::from_products(products()).unwrap();
        let updated = collection.get(ProductId(2)).unwrap().clone().with_price("9.90");

        assert_eq!(merge_into(&mut collection, updated.clone()), MergeOutcome::Replaced);
        assert_eq!(merge_into(&mut collection, updated.clone()), MergeOutcome::Unchanged);

        let missing = Product::new(99u64, "Z", updated.registered_at);
        assert_eq!(merge_into(&mut collection, missing), MergeOutcome::NotFound);
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.get(ProductId(2)).unwrap().price, "9.90");
    }
}

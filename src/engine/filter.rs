use crate::model::{FilterCriteria, FilterField, Product};

/// Returns `true` if every non-empty pattern is a case-insensitive substring of the
/// matching field's text.
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    FilterField::ALL.into_iter().all(|field| {
        let pattern = criteria.get(field);
        pattern.is_empty()
            || product
                .field_text(field)
                .to_lowercase()
                .contains(&pattern.to_lowercase())
    })
}

/// Keeps the products matching `criteria`, in their original relative order.
pub fn filter<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| matches(product, criteria))
        .collect()
}

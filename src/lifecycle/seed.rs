use crate::model::Product;
use chrono::NaiveDate;

pub const PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/60";

/// The three products every screen starts with.
pub fn seed_products() -> Vec<Product> {
    (1..=3u32)
        .filter_map(|i| {
            let registered_at = NaiveDate::from_ymd_opt(2023, 7, 9 + i)?;
            Some(
                Product::new(u64::from(i), format!("Produto {}", i), registered_at)
                    .with_notes(format!("Observações do Produto {}", i))
                    .with_price(format!("{}.00", i * 100))
                    .with_quantity(i * 10)
                    .with_photo(PLACEHOLDER_PHOTO),
            )
        })
        .collect()
}

use rand::seq::SliceRandom;
use rand::Rng;
use rust_decimal::Decimal;

use super::{Category, Product};

static NAMES: &[&str] = &[
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

static DESCRIPTIONS: &[&str] = &[
    "Sturdy and reliable",
    "Limited seasonal stock",
    "Imported from abroad",
    "Customer favourite",
    "",
];

/// Unsaved product with random but valid field values.
pub fn fake_product() -> Product {
    let mut rng = rand::thread_rng();
    Product {
        id: None,
        name: NAMES.choose(&mut rng).copied().unwrap_or("Hat").to_string(),
        description: DESCRIPTIONS.choose(&mut rng).copied().unwrap_or("").to_string(),
        price: Decimal::new(rng.gen_range(50..=200_000), 2),
        available: rng.gen_bool(0.5),
        category: *Category::ALL.choose(&mut rng).unwrap_or(&Category::Unknown),
    }
}

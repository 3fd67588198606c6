mod category;
mod product;

#[cfg(test)]
pub mod factories;

pub use category::Category;
pub use product::{Product, ProductFilter, ProductQuery};

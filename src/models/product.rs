use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::ProductStore;
use crate::error::{AppError, AppResult};

use super::Category;

/// Core product entity. `id` stays `None` until the store assigns one on create.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            price: Decimal::ZERO,
            available: true,
            category: Category::Unknown,
        }
    }
}

// ── Serialization ─────────────────────────────────────────────────────────────

impl Product {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON view of the product. Price goes out as a decimal string so no
    /// precision is lost on the way through a float.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price.to_string(),
            "available": self.available,
            "category": self.category.as_str(),
        })
    }

    /// Populates every field except `id` from a JSON object.
    ///
    /// All fields are parsed up front; `self` is only touched once the whole
    /// payload has validated, so a failed call leaves the product unchanged.
    pub fn deserialize(&mut self, data: &Value) -> AppResult<()> {
        let obj = data.as_object().ok_or_else(|| {
            AppError::validation("Invalid product: body of request contained bad or no data")
        })?;

        let name = match present(obj.get("name")) {
            None => return Err(AppError::validation("Invalid product: missing name")),
            Some(Value::String(s)) => {
                check_name(s)?;
                s.clone()
            }
            Some(other) => {
                return Err(AppError::validation(format!(
                    "Invalid type for string [name]: {}",
                    json_type(other)
                )))
            }
        };

        let description = match present(obj.get("description")) {
            None => String::new(),
            Some(Value::String(s)) => {
                check_description(s)?;
                s.clone()
            }
            Some(other) => {
                return Err(AppError::validation(format!(
                    "Invalid type for string [description]: {}",
                    json_type(other)
                )))
            }
        };

        let price = match present(obj.get("price")) {
            None => return Err(AppError::validation("Invalid product: missing price")),
            Some(v) => parse_price(v)?,
        };

        let available = match present(obj.get("available")) {
            None => true,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                return Err(AppError::validation(format!(
                    "Invalid type for boolean [available]: {}",
                    json_type(other)
                )))
            }
        };

        let category = match present(obj.get("category")) {
            None => Category::Unknown,
            Some(Value::String(s)) => s.parse()?,
            Some(other) => {
                return Err(AppError::validation(format!("Invalid attribute: {other}")))
            }
        };

        self.name = name;
        self.description = description;
        self.price = price;
        self.available = available;
        self.category = category;
        Ok(())
    }

    /// Checks the invariants every stored row must satisfy. Limits mirror the
    /// `products` table columns.
    pub fn validate(&self) -> AppResult<()> {
        check_name(&self.name)?;
        check_description(&self.description)?;
        check_price(self.price)?;
        Ok(())
    }
}

// Column limits of the `products` table.
const NAME_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 250;
const PRICE_SCALE: u32 = 2;
/// NUMERIC(14, 2) leaves 12 integer digits.
const PRICE_INTEGER_DIGITS: u32 = 12;

fn check_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Invalid product: name must not be empty"));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(AppError::validation(format!(
            "Invalid product: name longer than {NAME_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

fn check_description(description: &str) -> AppResult<()> {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Err(AppError::validation(format!(
            "Invalid product: description longer than {DESCRIPTION_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

fn check_price(price: Decimal) -> AppResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::validation("Invalid product: price must not be negative"));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(AppError::validation(format!(
            "Invalid product: price has more than {PRICE_SCALE} decimal places"
        )));
    }
    if price >= Decimal::from(10_i64.pow(PRICE_INTEGER_DIGITS)) {
        return Err(AppError::validation("Invalid product: price too large"));
    }
    Ok(())
}

/// `null` counts as an absent key.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn parse_price(value: &Value) -> AppResult<Decimal> {
    let raw = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(AppError::validation(format!(
                "Invalid type for decimal [price]: {}",
                json_type(other)
            )))
        }
    };

    let price = Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| AppError::validation(format!("Invalid product: bad price {raw:?}")))?;

    check_price(price)?;
    // Stored with a fixed scale; echo the same form the store will return.
    let mut price = price.normalize();
    price.rescale(PRICE_SCALE);
    Ok(price)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ── Persistence ───────────────────────────────────────────────────────────────

impl Product {
    /// Inserts a new row and stores the assigned id on `self`.
    pub async fn create(&mut self, store: &dyn ProductStore) -> AppResult<()> {
        self.validate()?;
        let id = store.insert(self).await?;
        self.id = Some(id);
        Ok(())
    }

    /// Writes the current field values over the row with this product's id.
    pub async fn update(&self, store: &dyn ProductStore) -> AppResult<()> {
        let id = self
            .id
            .ok_or_else(|| AppError::validation("Update called with empty ID field"))?;
        self.validate()?;
        if !store.update(id, self).await? {
            return Err(AppError::NotFound(format!(
                "Product with id {id} was not found"
            )));
        }
        Ok(())
    }

    /// Removes the row with this product's id. Unsaved or already-deleted
    /// products are a no-op.
    pub async fn delete(&self, store: &dyn ProductStore) -> AppResult<()> {
        match self.id {
            Some(id) => store.delete(id).await,
            None => Ok(()),
        }
    }

    pub async fn find(store: &dyn ProductStore, id: i32) -> AppResult<Option<Product>> {
        store.find(id).await
    }

    pub async fn all(store: &dyn ProductStore) -> AppResult<Vec<Product>> {
        store.list(&ProductFilter::All).await
    }

    pub async fn find_by_name(store: &dyn ProductStore, name: &str) -> AppResult<Vec<Product>> {
        store.list(&ProductFilter::Name(name.to_string())).await
    }

    pub async fn find_by_category(
        store: &dyn ProductStore,
        category: Category,
    ) -> AppResult<Vec<Product>> {
        store.list(&ProductFilter::Category(category)).await
    }

    pub async fn find_by_availability(
        store: &dyn ProductStore,
        available: bool,
    ) -> AppResult<Vec<Product>> {
        store.list(&ProductFilter::Available(available)).await
    }
}

// ── Filtering ─────────────────────────────────────────────────────────────────

/// Exact-match filter over a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    Name(String),
    Category(Category),
    Available(bool),
}

/// `GET /products` query parameters. Only one applies: name, then category,
/// then available.
#[derive(Debug, Deserialize, Default)]
pub struct ProductQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<String>,
}

impl ProductQuery {
    pub fn to_filter(&self) -> AppResult<ProductFilter> {
        if let Some(name) = &self.name {
            return Ok(ProductFilter::Name(name.clone()));
        }
        if let Some(category) = &self.category {
            return Ok(ProductFilter::Category(Category::parse_loose(category)?));
        }
        if let Some(available) = &self.available {
            let flag = matches!(
                available.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "1"
            );
            return Ok(ProductFilter::Available(flag));
        }
        Ok(ProductFilter::All)
    }
}

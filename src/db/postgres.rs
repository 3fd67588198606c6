use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppResult;
use crate::models::{Category, Product, ProductFilter};

use super::ProductStore;

#[derive(Debug, Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: &Product) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO products (name, description, price, available, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(&self, id: i32, product: &Product) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name        = $1,
                description = $2,
                price       = $3,
                available   = $4,
                category    = $5
            WHERE id = $6
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.available)
        .bind(product.category)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find(&self, id: i32) -> AppResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, available, category
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn list(&self, filter: &ProductFilter) -> AppResult<Vec<Product>> {
        let (name, category, available): (Option<&str>, Option<Category>, Option<bool>) =
            match filter {
                ProductFilter::All => (None, None, None),
                ProductFilter::Name(name) => (Some(name.as_str()), None, None),
                ProductFilter::Category(category) => (None, Some(*category), None),
                ProductFilter::Available(flag) => (None, None, Some(*flag)),
            };

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, available, category
            FROM products
            WHERE ($1::text IS NULL OR name = $1)
              AND ($2::category IS NULL OR category = $2)
              AND ($3::boolean IS NULL OR available = $3)
            ORDER BY id
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(available)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}

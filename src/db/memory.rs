use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::{Product, ProductFilter};

use super::ProductStore;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

/// In-process store for tests. Ids come from a counter that only moves forward.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    table: RwLock<Table>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn insert(&self, product: &Product) -> AppResult<i32> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        let mut row = product.clone();
        row.id = Some(id);
        table.rows.insert(id, row);
        Ok(id)
    }

    async fn update(&self, id: i32, product: &Product) -> AppResult<bool> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = Product { id: Some(id), ..product.clone() };
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn find(&self, id: i32) -> AppResult<Option<Product>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(&self, filter: &ProductFilter) -> AppResult<Vec<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|p| row_matches(filter, p)).cloned().collect())
    }
}

fn row_matches(filter: &ProductFilter, product: &Product) -> bool {
    match filter {
        ProductFilter::All => true,
        ProductFilter::Name(name) => product.name == *name,
        ProductFilter::Category(category) => product.category == *category,
        ProductFilter::Available(flag) => product.available == *flag,
    }
}

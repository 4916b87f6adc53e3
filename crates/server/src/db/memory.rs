//! In-process cart store for tests.
//!
//! Mirrors the `PostgreSQL` store's semantics (ID assignment, lowest-id
//! singleton lookup, items held separately from the cart row) without a
//! database.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use minimart_core::{CartId, CartItemId, ProductId};

use super::RepositoryError;
use crate::models::{Cart, CartItem};
use crate::services::CartStore;

#[derive(Debug, Clone, Copy)]
struct CartRecord {
    id: CartId,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Inner {
    carts: Vec<CartRecord>,
    items: Vec<CartItem>,
    next_cart_id: i32,
    next_item_id: i32,
}

/// Cart store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    inner: Mutex<Inner>,
}

impl MemoryCartStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("cart store lock poisoned")
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn find_cart(&self) -> Result<Option<Cart>, RepositoryError> {
        let inner = self.lock();
        let Some(record) = inner.carts.iter().min_by_key(|record| record.id.as_i32()) else {
            return Ok(None);
        };

        let items = inner
            .items
            .iter()
            .filter(|item| item.cart_id == record.id)
            .cloned()
            .collect();

        Ok(Some(Cart {
            id: record.id,
            updated_at: record.updated_at,
            items,
        }))
    }

    async fn create_cart(&self) -> Result<Cart, RepositoryError> {
        let mut inner = self.lock();
        inner.next_cart_id += 1;
        let record = CartRecord {
            id: CartId::new(inner.next_cart_id),
            updated_at: Utc::now(),
        };
        inner.carts.push(record);

        Ok(Cart {
            id: record.id,
            updated_at: record.updated_at,
            items: Vec::new(),
        })
    }

    async fn save_cart(&self, cart: &Cart) -> Result<Cart, RepositoryError> {
        let mut inner = self.lock();
        let now = Utc::now();
        if let Some(record) = inner.carts.iter_mut().find(|record| record.id == cart.id) {
            record.updated_at = now;
        }

        Ok(Cart {
            id: cart.id,
            updated_at: now,
            items: cart.items.clone(),
        })
    }

    async fn create_cart_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let mut inner = self.lock();
        inner.next_item_id += 1;
        let item = CartItem {
            id: CartItemId::new(inner.next_item_id),
            cart_id,
            product_id,
            quantity,
        };
        inner.items.push(item.clone());

        Ok(item)
    }

    async fn save_cart_item(&self, item: &CartItem) -> Result<CartItem, RepositoryError> {
        let mut inner = self.lock();
        if let Some(stored) = inner.items.iter_mut().find(|stored| stored.id == item.id) {
            *stored = item.clone();
        }

        Ok(item.clone())
    }

    async fn delete_cart_item(&self, item: &CartItem) -> Result<(), RepositoryError> {
        let mut inner = self.lock();
        inner.items.retain(|stored| stored.id != item.id);

        Ok(())
    }
}

//! `PostgreSQL` implementation of the cart store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use minimart_core::{CartId, CartItemId, ProductId};

use super::RepositoryError;
use crate::models::{Cart, CartItem};
use crate::services::CartStore;

/// Internal row type for cart queries.
#[derive(Debug, sqlx::FromRow)]
struct CartRow {
    id: i32,
    updated_at: DateTime<Utc>,
}

/// Internal row type for cart item queries.
#[derive(Debug, sqlx::FromRow)]
struct CartItemRow {
    id: i32,
    cart_id: i32,
    product_id: i32,
    quantity: i32,
}

impl From<CartItemRow> for CartItem {
    fn from(row: CartItemRow) -> Self {
        Self {
            id: CartItemId::new(row.id),
            cart_id: CartId::new(row.cart_id),
            product_id: ProductId::new(row.product_id),
            quantity: row.quantity,
        }
    }
}

/// Cart store backed by `PostgreSQL`.
///
/// Owns a pool handle so it can live in shared application state.
pub struct PgCartStore {
    pool: PgPool,
}

impl PgCartStore {
    /// Create a new `PostgreSQL` cart store.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartStore for PgCartStore {
    async fn find_cart(&self) -> Result<Option<Cart>, RepositoryError> {
        // Singleton lookup: the lowest-id row wins, so the result stays
        // deterministic even if more than one cart row is ever persisted.
        let row = sqlx::query_as::<_, CartRow>(
            "SELECT id, updated_at FROM carts ORDER BY id LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, CartItemRow>(
            "SELECT id, cart_id, product_id, quantity FROM cart_items \
             WHERE cart_id = $1 ORDER BY id",
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Cart {
            id: CartId::new(row.id),
            updated_at: row.updated_at,
            items: items.into_iter().map(CartItem::from).collect(),
        }))
    }

    async fn create_cart(&self) -> Result<Cart, RepositoryError> {
        let row = sqlx::query_as::<_, CartRow>(
            "INSERT INTO carts DEFAULT VALUES RETURNING id, updated_at",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(Cart {
            id: CartId::new(row.id),
            updated_at: row.updated_at,
            items: Vec::new(),
        })
    }

    async fn save_cart(&self, cart: &Cart) -> Result<Cart, RepositoryError> {
        // The line-item association lives on the item rows; saving the
        // cart touches its row and keeps the collection as passed in.
        let row = sqlx::query_as::<_, CartRow>(
            "UPDATE carts SET updated_at = now() WHERE id = $1 RETURNING id, updated_at",
        )
        .bind(cart.id.as_i32())
        .fetch_one(&self.pool)
        .await?;

        Ok(Cart {
            id: CartId::new(row.id),
            updated_at: row.updated_at,
            items: cart.items.clone(),
        })
    }

    async fn create_cart_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError> {
        let row = sqlx::query_as::<_, CartItemRow>(
            "INSERT INTO cart_items (cart_id, product_id, quantity) VALUES ($1, $2, $3) \
             RETURNING id, cart_id, product_id, quantity",
        )
        .bind(cart_id.as_i32())
        .bind(product_id.as_i32())
        .bind(quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(CartItem::from(row))
    }

    async fn save_cart_item(&self, item: &CartItem) -> Result<CartItem, RepositoryError> {
        let row = sqlx::query_as::<_, CartItemRow>(
            "UPDATE cart_items SET quantity = $2 WHERE id = $1 \
             RETURNING id, cart_id, product_id, quantity",
        )
        .bind(item.id.as_i32())
        .bind(item.quantity)
        .fetch_one(&self.pool)
        .await?;

        Ok(CartItem::from(row))
    }

    async fn delete_cart_item(&self, item: &CartItem) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(item.id.as_i32())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

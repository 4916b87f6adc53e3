//! The cart service: singleton-cart and line-item state management.
//!
//! The system tracks exactly one cart, created lazily on first access.
//! Adding a product creates its line item at quantity 1 or increments an
//! existing one; removing a product decrements and deletes the line item
//! when the quantity reaches zero. Removing a product with no line item is
//! deliberately a no-op.
//!
//! Each operation is a multi-step read-modify-write against the store
//! (load cart, mutate or create a line item, write both back). The whole
//! sequence runs under a per-cart mutex so concurrent callers cannot lose
//! updates, duplicate a line item, or race the lazy creation into a second
//! cart.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use minimart_core::{CartId, ProductId};

use crate::db::RepositoryError;
use crate::models::{Cart, CartItem};

/// Persistence contract for the cart and its line items.
///
/// Implementations must assign IDs on `create_*` and return the persisted
/// entity. `save_cart` persists the cart row and returns the cart with the
/// line-item collection exactly as passed in; the items themselves are
/// persisted through the item methods.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Look up the singleton cart, with its line items.
    ///
    /// Deterministic even if storage ever holds more than one cart row:
    /// implementations return the one with the lowest ID.
    async fn find_cart(&self) -> Result<Option<Cart>, RepositoryError>;

    /// Insert a new empty cart and return it with its assigned ID.
    async fn create_cart(&self) -> Result<Cart, RepositoryError>;

    /// Persist the cart and return it.
    async fn save_cart(&self, cart: &Cart) -> Result<Cart, RepositoryError>;

    /// Insert a new line item and return it with its assigned ID.
    async fn create_cart_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError>;

    /// Persist an existing line item and return it.
    async fn save_cart_item(&self, item: &CartItem) -> Result<CartItem, RepositoryError>;

    /// Delete a line item.
    async fn delete_cart_item(&self, item: &CartItem) -> Result<(), RepositoryError>;
}

/// Maintains the singleton cart and its line items under add/remove.
///
/// Storage failures propagate unchanged; there is no retry and no rollback
/// of partial writes.
pub struct CartService {
    store: Arc<dyn CartStore>,
    // Serializes the read-modify-write sequence on the singleton cart.
    lock: Mutex<()>,
}

impl CartService {
    /// Create a cart service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Return the singleton cart, creating and persisting an empty one if
    /// none exists yet.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub async fn get_or_create_cart(&self) -> Result<Cart, RepositoryError> {
        let _guard = self.lock.lock().await;
        self.load_cart().await
    }

    /// Add one unit of a product to the cart.
    ///
    /// Creates the line item at quantity 1 if the product is not in the
    /// cart yet, otherwise increments the existing one. The product ID is
    /// not validated against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub async fn add_product(&self, product_id: ProductId) -> Result<Cart, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut cart = self.load_cart().await?;

        match cart
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            Some(item) => {
                item.quantity += 1;
                let quantity = item.quantity;
                self.store.save_cart_item(item).await?;
                tracing::info!(%product_id, quantity, "product increased");
            }
            None => {
                let item = self.store.create_cart_item(cart.id, product_id, 1).await?;
                cart.items.push(item);
                tracing::info!(%product_id, quantity = 1, "product added");
            }
        }

        self.store.save_cart(&cart).await
    }

    /// Remove one unit of a product from the cart.
    ///
    /// Decrements the line item and deletes it when the quantity reaches
    /// zero, so a quantity never goes negative. Removing a product with no
    /// line item is a no-op; the permissive policy can mask caller bugs
    /// such as a double-remove, which is why the ignored call is logged.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub async fn remove_product(&self, product_id: ProductId) -> Result<Cart, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut cart = self.load_cart().await?;

        let Some(index) = cart
            .items
            .iter()
            .position(|item| item.product_id == product_id)
        else {
            tracing::debug!(%product_id, "remove ignored, product not in cart");
            return Ok(cart);
        };

        let mut item = cart.items.swap_remove(index);
        item.quantity -= 1;

        if item.quantity == 0 {
            let cart = self.store.save_cart(&cart).await?;
            self.store.delete_cart_item(&item).await?;
            tracing::info!(%product_id, "product removed");
            Ok(cart)
        } else {
            let item = self.store.save_cart_item(&item).await?;
            tracing::info!(%product_id, quantity = item.quantity, "product decreased");
            cart.items.push(item);
            self.store.save_cart(&cart).await
        }
    }

    /// Fetch the cart, lazily creating it. Callers must hold `self.lock`.
    async fn load_cart(&self) -> Result<Cart, RepositoryError> {
        if let Some(cart) = self.store.find_cart().await? {
            tracing::debug!(cart_id = %cart.id, "cart exists");
            return Ok(cart);
        }

        let cart = self.store.create_cart().await?;
        tracing::info!(cart_id = %cart.id, "cart created");
        Ok(cart)
    }
}

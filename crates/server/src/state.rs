//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::PgCartStore;
use crate::services::CartService;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the database pool and
/// the cart service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    cart: CartService,
}

impl AppState {
    /// Create application state over a database pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        let cart = CartService::new(Arc::new(PgCartStore::new(pool.clone())));
        Self {
            inner: Arc::new(AppStateInner { pool, cart }),
        }
    }

    /// Create application state with a custom cart store.
    #[cfg(test)]
    pub(crate) fn with_cart_store(
        pool: PgPool,
        store: Arc<dyn crate::services::CartStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pool,
                cart: CartService::new(store),
            }),
        }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the cart service.
    #[must_use]
    pub fn cart(&self) -> &CartService {
        &self.inner.cart
    }
}

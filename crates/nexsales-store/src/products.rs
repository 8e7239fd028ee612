//! Product catalog store.

use std::sync::Arc;

use chrono::Utc;
use nexsales_core::error::FetchError;
use nexsales_core::models::product::{NewProduct, Product, ProductFilters, UpdateProduct};
use nexsales_core::repository::ProductSource;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::ids::{IdGenerator, touch};

/// Observable catalog state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductState {
    /// Insertion order; never re-sorted by the store.
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: ProductFilters,
}

/// Owns the product collection and its filter state.
///
/// Mutations are trusting: the store performs no validation, and
/// updates or deletes of unknown ids are silent no-ops. Cloning yields
/// another handle to the same state.
pub struct ProductStore<S: ProductSource> {
    state: Arc<watch::Sender<ProductState>>,
    source: Arc<S>,
    ids: Arc<IdGenerator>,
}

impl<S: ProductSource> Clone for ProductStore<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            source: Arc::clone(&self.source),
            ids: Arc::clone(&self.ids),
        }
    }
}

impl<S: ProductSource> ProductStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            state: Arc::new(watch::Sender::new(ProductState::default())),
            source: Arc::new(source),
            ids: Arc::new(IdGenerator::new()),
        }
    }

    /// Receive a notification after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ProductState> {
        self.state.subscribe()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&ProductState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn snapshot(&self) -> ProductState {
        self.state.borrow().clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.with_state(|s| s.products.clone())
    }

    pub fn get(&self, id: &str) -> Option<Product> {
        self.with_state(|s| s.products.iter().find(|p| p.id == id).cloned())
    }

    pub fn len(&self) -> usize {
        self.with_state(|s| s.products.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_loading(&self) -> bool {
        self.with_state(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.with_state(|s| s.error.clone())
    }

    pub fn filters(&self) -> ProductFilters {
        self.with_state(|s| s.filters.clone())
    }

    /// Load the full catalog from the source.
    ///
    /// The load runs in a task owned by the store: dropping or aborting
    /// the caller does not cancel it, and the result still lands. On
    /// failure the error is recorded and previously loaded products are
    /// kept. Concurrent calls are not deduplicated: whichever resolves
    /// last determines the final state.
    pub async fn fetch_products(&self) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let state = Arc::clone(&self.state);
        let source = Arc::clone(&self.source);
        let task = tokio::spawn(async move {
            match source.load_products().await {
                Ok(products) => {
                    info!(count = products.len(), "Loaded products");
                    state.send_modify(|s| {
                        s.products = products;
                        s.loading = false;
                    });
                }
                Err(e) => {
                    warn!(error = %e, "Product fetch failed");
                    state.send_modify(|s| {
                        s.error = Some(e.to_string());
                        s.loading = false;
                    });
                }
            }
        });

        if let Err(e) = task.await {
            warn!(error = %e, "Product fetch task did not complete");
            self.state.send_modify(|s| {
                s.error = Some(FetchError::ProductsUnavailable.to_string());
                s.loading = false;
            });
        }
    }

    /// Append a product with a fresh id; `created_at == updated_at`.
    pub fn add_product(&self, input: NewProduct) -> Product {
        let id = self.with_state(|s| {
            let mut id = self.ids.next_id();
            while s.products.iter().any(|p| p.id == id) {
                id = self.ids.next_id();
            }
            id
        });

        let now = Utc::now();
        let product = Product {
            id,
            name: input.name,
            category: input.category,
            price: input.price,
            stock: input.stock,
            status: input.status,
            image: input.image,
            description: input.description,
            created_at: now,
            updated_at: now,
        };

        self.state.send_modify(|s| s.products.push(product.clone()));
        debug!(id = %product.id, name = %product.name, "Added product");
        product
    }

    /// Merge `patch` onto the product with `id` and refresh `updated_at`.
    ///
    /// Returns the updated record, or `None` (leaving state untouched)
    /// if no product has that id.
    pub fn update_product(&self, id: &str, patch: UpdateProduct) -> Option<Product> {
        let mut updated = None;

        self.state.send_if_modified(|s| {
            let Some(product) = s.products.iter_mut().find(|p| p.id == id) else {
                return false;
            };
            patch.apply_to(product);
            product.updated_at = touch(product.updated_at);
            updated = Some(product.clone());
            true
        });

        match &updated {
            Some(_) => debug!(id, "Updated product"),
            None => debug!(id, "Update ignored, no such product"),
        }
        updated
    }

    /// Remove the product with `id`. Returns whether anything was removed.
    pub fn delete_product(&self, id: &str) -> bool {
        let removed = self.state.send_if_modified(|s| {
            let before = s.products.len();
            s.products.retain(|p| p.id != id);
            s.products.len() != before
        });

        if removed {
            debug!(id, "Deleted product");
        } else {
            debug!(id, "Delete ignored, no such product");
        }
        removed
    }

    /// Replace the stored filters wholesale.
    pub fn set_filters(&self, filters: ProductFilters) {
        self.state.send_modify(|s| s.filters = filters);
    }
}

//! Data-access traits.
//!
//! Catalog and sales data arrive through asynchronous sources that the
//! stores are constructed with. Durable state (the session and the
//! settings) goes through a synchronous key/value store so that any
//! store can hold it behind `Arc<dyn KeyValueStore>`.

use crate::error::{FetchError, NexsalesResult};
use crate::models::{product::Product, sale::Sale};

/// Storage key holding `{user, token, isAuthenticated}`.
pub const AUTH_STORAGE_KEY: &str = "auth-storage";

/// Storage key holding the canonical settings shape.
pub const SETTINGS_STORAGE_KEY: &str = "settings-storage";

/// Pagination parameters for list views.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

/// A paginated result set.
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub offset: u64,
    pub limit: u64,
}

// ---------------------------------------------------------------------------
// Asynchronous data sources
// ---------------------------------------------------------------------------

/// Shared into the store's spawned fetch tasks.
pub trait ProductSource: Send + Sync + 'static {
    /// Load the full catalog.
    fn load_products(&self) -> impl Future<Output = Result<Vec<Product>, FetchError>> + Send;
}

pub trait SalesSource: Send + Sync + 'static {
    /// Load the full transaction list.
    fn load_sales(&self) -> impl Future<Output = Result<Vec<Sale>, FetchError>> + Send;
}

// ---------------------------------------------------------------------------
// Durable key/value storage
// ---------------------------------------------------------------------------

pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under `key`, `None` if never written.
    fn load(&self, key: &str) -> NexsalesResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> NexsalesResult<()>;
    fn remove(&self, key: &str) -> NexsalesResult<()>;
}

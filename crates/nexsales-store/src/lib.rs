//! NexSales Store — observable state containers and their persistence.
//!
//! This crate provides:
//! - The catalog, sales, notification and settings stores
//!   ([`ProductStore`], [`SalesStore`], [`NotificationStore`], [`SettingsStore`])
//! - Key/value backends ([`MemoryStorage`], [`FileStorage`])
//! - The mock data source ([`MockCatalog`])
//! - Error types ([`StorageError`])
//!
//! Stores are explicit values owned by the application root and cloned
//! as handles into whatever needs them; there are no global singletons.

mod error;
pub mod ids;
pub mod mock;
pub mod notifications;
pub mod products;
pub mod sales;
pub mod settings;
mod storage;

pub use error::StorageError;
pub use mock::{MockCatalog, MockCatalogConfig};
pub use notifications::{MAX_NOTIFICATIONS, NotificationStore};
pub use products::{ProductState, ProductStore};
pub use sales::{SalesState, SalesStore};
pub use settings::SettingsStore;
pub use storage::{FileStorage, MemoryStorage};

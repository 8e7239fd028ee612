//! The root-owned set of stores handed to every page.

use std::sync::Arc;

use nexsales_auth::{AuthConfig, AuthStore};
use nexsales_core::repository::{KeyValueStore, ProductSource, SalesSource};
use nexsales_store::{
    MockCatalog, NotificationStore, ProductStore, SalesStore, SettingsStore,
};

use crate::route::{Route, resolve};

/// All application state. Each field is a cloneable handle, so pages
/// receive what they need by reference or by clone; there are no
/// globals.
pub struct AppContext<P: ProductSource, S: SalesSource> {
    pub auth: AuthStore,
    pub products: ProductStore<P>,
    pub sales: SalesStore<S>,
    pub notifications: NotificationStore,
    pub settings: SettingsStore,
}

impl<P: ProductSource, S: SalesSource> Clone for AppContext<P, S> {
    fn clone(&self) -> Self {
        Self {
            auth: self.auth.clone(),
            products: self.products.clone(),
            sales: self.sales.clone(),
            notifications: self.notifications.clone(),
            settings: self.settings.clone(),
        }
    }
}

impl<P: ProductSource, S: SalesSource> AppContext<P, S> {
    /// Restore persisted session and settings from `storage` and wire
    /// the data sources into fresh stores.
    pub fn new(
        storage: Arc<dyn KeyValueStore>,
        auth_config: AuthConfig,
        product_source: P,
        sales_source: S,
    ) -> Self {
        Self {
            auth: AuthStore::restore(Arc::clone(&storage), auth_config),
            products: ProductStore::new(product_source),
            sales: SalesStore::new(sales_source),
            notifications: NotificationStore::new(),
            settings: SettingsStore::restore(storage),
        }
    }

    /// Resolve `path` against the current session.
    pub fn route(&self, path: &str) -> Route {
        resolve(path, self.auth.is_authenticated())
    }
}

impl AppContext<MockCatalog, MockCatalog> {
    /// Both stores served by one mock catalog.
    pub fn with_mock(
        storage: Arc<dyn KeyValueStore>,
        auth_config: AuthConfig,
        catalog: MockCatalog,
    ) -> Self {
        Self::new(storage, auth_config, catalog.clone(), catalog)
    }
}

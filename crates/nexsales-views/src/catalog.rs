//! Product filtering and the products page view.

use std::sync::Arc;

use nexsales_core::models::product::{Product, ProductFilters, ProductStatus};
use nexsales_core::repository::{PaginatedResult, Pagination, ProductSource};
use nexsales_store::ProductStore;
use tokio::sync::watch;
use tracing::debug;

use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};
use crate::paging::paginate;

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Whether `product` passes every active filter.
///
/// Search is a case-insensitive substring test against name or
/// description; category and status must match exactly. The price
/// bounds are not applied.
pub fn product_matches(product: &Product, filters: &ProductFilters) -> bool {
    let matches_search = match non_empty(&filters.search) {
        None => true,
        Some(term) => {
            let term = term.to_lowercase();
            product.name.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
        }
    };
    let matches_category =
        non_empty(&filters.category).is_none_or(|category| product.category == category);
    let matches_status = filters.status.is_none_or(|status| product.status == status);

    matches_search && matches_category && matches_status
}

/// Products passing `filters`, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], filters: &ProductFilters) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| product_matches(p, filters))
        .collect()
}

/// State of the products page: the applied filters plus the raw search
/// box text, which only takes effect after [`SEARCH_DEBOUNCE`] of quiet.
///
/// Category and status selections apply immediately. Every applied
/// change is also written to the store's filter object.
pub struct ProductsView<S: ProductSource + 'static> {
    store: ProductStore<S>,
    applied: Arc<watch::Sender<ProductFilters>>,
    search_input: String,
    search: Debouncer<String>,
}

impl<S: ProductSource + 'static> ProductsView<S> {
    pub fn new(store: ProductStore<S>) -> Self {
        let initial = store.filters();
        let search_input = initial.search.clone().unwrap_or_default();
        let applied = Arc::new(watch::Sender::new(initial));

        let search = {
            let applied = Arc::clone(&applied);
            let store = store.clone();
            Debouncer::new(SEARCH_DEBOUNCE, move |term: String| {
                debug!(term = %term, "Applying product search");
                applied.send_modify(|f| f.search = Some(term).filter(|t| !t.is_empty()));
                store.set_filters(applied.borrow().clone());
            })
        };

        Self {
            store,
            applied,
            search_input,
            search,
        }
    }

    /// Fetch the catalog, as the page does when it opens.
    pub async fn load(&self) {
        self.store.fetch_products().await;
    }

    pub fn store(&self) -> &ProductStore<S> {
        &self.store
    }

    /// Record a keystroke in the search box.
    pub fn set_search(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.search_input.clone_from(&text);
        self.search.push(text);
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    pub fn set_category(&self, category: Option<String>) {
        self.apply(|f| f.category = category.filter(|c| !c.is_empty()));
    }

    pub fn set_status(&self, status: Option<ProductStatus>) {
        self.apply(|f| f.status = status);
    }

    fn apply(&self, change: impl FnOnce(&mut ProductFilters)) {
        self.applied.send_modify(change);
        self.store.set_filters(self.filters());
    }

    /// Filters currently in effect.
    pub fn filters(&self) -> ProductFilters {
        self.applied.borrow().clone()
    }

    pub fn subscribe_filters(&self) -> watch::Receiver<ProductFilters> {
        self.applied.subscribe()
    }

    /// The filtered catalog, recomputed from the current store snapshot.
    pub fn visible(&self) -> Vec<Product> {
        let filters = self.filters();
        self.store.with_state(|s| {
            filter_products(&s.products, &filters)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn page(&self, page: &Pagination) -> PaginatedResult<Product> {
        paginate(&self.visible(), page)
    }

    /// First load in flight with nothing to show yet.
    pub fn is_initial_load(&self) -> bool {
        self.store.with_state(|s| s.loading && s.products.is_empty())
    }
}

//! Sales transaction store.

use std::sync::Arc;

use nexsales_core::error::FetchError;
use nexsales_core::models::sale::{NewSale, Sale, SalesMetrics, calculate_metrics};
use nexsales_core::repository::SalesSource;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::ids::IdGenerator;

/// Observable sales state. `metrics` is always
/// `calculate_metrics(&sales)` after any load or append.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesState {
    pub sales: Vec<Sale>,
    pub metrics: SalesMetrics,
    pub loading: bool,
    pub error: Option<String>,
}

/// Owns the append-only transaction log.
pub struct SalesStore<S: SalesSource> {
    state: Arc<watch::Sender<SalesState>>,
    source: Arc<S>,
    ids: Arc<IdGenerator>,
}

impl<S: SalesSource> Clone for SalesStore<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            source: Arc::clone(&self.source),
            ids: Arc::clone(&self.ids),
        }
    }
}

impl<S: SalesSource> SalesStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            state: Arc::new(watch::Sender::new(SalesState::default())),
            source: Arc::new(source),
            ids: Arc::new(IdGenerator::new()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SalesState> {
        self.state.subscribe()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&SalesState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn snapshot(&self) -> SalesState {
        self.state.borrow().clone()
    }

    pub fn sales(&self) -> Vec<Sale> {
        self.with_state(|s| s.sales.clone())
    }

    pub fn metrics(&self) -> SalesMetrics {
        self.with_state(|s| s.metrics)
    }

    pub fn is_loading(&self) -> bool {
        self.with_state(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.with_state(|s| s.error.clone())
    }

    /// Load the transaction list and recompute metrics.
    ///
    /// Runs in a store-owned task, so the result applies even if the
    /// caller is dropped first. On failure the error is recorded and
    /// existing sales are kept.
    pub async fn fetch_sales(&self) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let state = Arc::clone(&self.state);
        let source = Arc::clone(&self.source);
        let task = tokio::spawn(async move {
            match source.load_sales().await {
                Ok(sales) => {
                    let metrics = calculate_metrics(&sales);
                    info!(
                        count = sales.len(),
                        revenue = metrics.total_revenue,
                        "Loaded sales"
                    );
                    state.send_modify(|s| {
                        s.sales = sales;
                        s.metrics = metrics;
                        s.loading = false;
                    });
                }
                Err(e) => {
                    warn!(error = %e, "Sales fetch failed");
                    state.send_modify(|s| {
                        s.error = Some(e.to_string());
                        s.loading = false;
                    });
                }
            }
        });

        if let Err(e) = task.await {
            warn!(error = %e, "Sales fetch task did not complete");
            self.state.send_modify(|s| {
                s.error = Some(FetchError::SalesUnavailable.to_string());
                s.loading = false;
            });
        }
    }

    /// Append a sale and recompute metrics over the whole collection.
    pub fn add_sale(&self, input: NewSale) -> Sale {
        let id = self.with_state(|s| {
            let mut id = self.ids.next_id();
            while s.sales.iter().any(|sale| sale.id == id) {
                id = self.ids.next_id();
            }
            id
        });
        let sale = input.into_sale(id);

        self.state.send_modify(|s| {
            s.sales.push(sale.clone());
            s.metrics = calculate_metrics(&s.sales);
        });
        debug!(id = %sale.id, total = sale.total_price, "Added sale");
        sale
    }
}

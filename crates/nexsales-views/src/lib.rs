//! NexSales Views — everything a page computes from store snapshots.
//!
//! This crate provides:
//! - Pure derivations: product filtering ([`catalog`]), sales
//!   filter/sort/summary ([`sales`]), CSV export ([`export`]), dashboard
//!   projections ([`dashboard`]) and pagination ([`paging`])
//! - Page state holders ([`ProductsView`], [`SalesView`], [`DashboardView`])
//! - Timed UI primitives ([`Debouncer`], [`ToastHost`])
//! - Editor validation ([`editor`]), route resolution ([`route`]), the
//!   root [`AppContext`] and notification-emitting [`actions`]

pub mod actions;
pub mod catalog;
pub mod context;
pub mod dashboard;
pub mod debounce;
pub mod editor;
pub mod error;
pub mod export;
pub mod paging;
pub mod route;
pub mod sales;
pub mod toast;

pub use catalog::{ProductsView, filter_products, product_matches};
pub use context::AppContext;
pub use dashboard::{DashboardSnapshot, DashboardView, KpiCard, Trend};
pub use debounce::{Debouncer, SEARCH_DEBOUNCE};
pub use editor::{FormErrors, ProductDraft};
pub use error::ViewError;
pub use export::{CSV_MIME_TYPE, CsvExport, export_sales, sales_csv};
pub use paging::paginate;
pub use route::{Route, resolve};
pub use sales::{SalesQuery, SalesSummary, SalesView, SortDirection, SortField, SortState, derive_sales};
pub use toast::{MAX_VISIBLE_TOASTS, TOAST_DISPLAY_WINDOW, ToastHost};

//! NexSales Core — domain models, error taxonomy, and the data-access
//! traits shared by every store and view crate.

pub mod error;
pub mod models;
pub mod persist;
pub mod repository;

pub use error::{FetchError, NexsalesError, NexsalesResult};

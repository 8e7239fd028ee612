//! NexSales Auth — mock credential check, opaque session tokens,
//! and the persisted session store.

pub mod config;
pub mod error;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::AuthStore;

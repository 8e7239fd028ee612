//! Domain models for NexSales.
//!
//! These are the plain data types shared across all crates. Stores own
//! collections of them; views only ever read snapshots.

pub mod notification;
pub mod product;
pub mod sale;
pub mod session;
pub mod settings;
pub mod user;

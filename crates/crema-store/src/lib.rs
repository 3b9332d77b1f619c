//! In-memory storage for espresso shot histories.
//!
//! This crate keeps the full shot history behind an async reader/writer
//! lock and exposes the handful of operations the query layer needs:
//! upsert, lookup, windowed listing, delete, and whole-history snapshots
//! for aggregation.
//!
//! # Example
//!
//! ```
//! use crema_store::ShotStore;
//!
//! # async fn demo() {
//! let store = ShotStore::new();
//! assert!(store.list(10).await.is_empty());
//! # }
//! ```

mod error;
mod store;

pub use error::{Error, Result};
pub use store::{DEFAULT_LIST_LIMIT, ShotStore};

//! Core engine for synthetic espresso telemetry.
//!
//! This crate owns the two pure pieces of the system: deterministic
//! generation of [`Shot`](crema_types::Shot) histories and aggregate
//! statistics over them. It performs no I/O; persistence and transport
//! live in the `crema-store` and `crema-service` crates.
//!
//! # Example
//!
//! ```
//! use crema_core::{ShotGenerator, overview};
//!
//! let shots = ShotGenerator::new(7).generate(25);
//! let stats = overview(&shots);
//! assert_eq!(stats.total_shots, 25);
//! ```

pub mod generator;
pub mod stats;
pub mod util;

pub use generator::{DEFAULT_SEED, ShotGenerator};
pub use stats::{DailyStats, OverviewStats, daily, overview};

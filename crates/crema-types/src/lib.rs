//! Shared types for crema espresso telemetry.
//!
//! This crate provides the data types exchanged between the generator, the
//! in-memory store, and the HTTP API.
//!
//! # Features
//!
//! - [`Shot`]: one recorded brew event with machine/recipe/measurement data
//! - [`ShotStatus`]: machine-reported outcome, weighted toward success in
//!   the synthetic dataset
//!
//! # Example
//!
//! ```
//! use crema_types::{Shot, ShotStatus};
//! use time::OffsetDateTime;
//!
//! let shot = Shot {
//!     shot_id: "2c5ea4c0-4067-44ae-9e6c-1a6e8f1e4b2a".to_string(),
//!     brew_time: OffsetDateTime::from_unix_timestamp(1_722_499_200).unwrap(),
//!     machine_id: "nxlc-100".to_string(),
//!     user_id: "barista.alex".to_string(),
//!     software_bundle: "stable-1.5.0".to_string(),
//!     coffee_type: "espresso".to_string(),
//!     recipe_id: "rx-117".to_string(),
//!     grind_size_actual: 31,
//!     grind_size_target: 30,
//!     dose_grams: 18.42,
//!     dose_target_grams: 18.5,
//!     brew_time_seconds: 27.31,
//!     peak_pressure_bar: 8.94,
//!     last_status: ShotStatus::Ok,
//! };
//!
//! assert!(shot.last_status.is_success());
//! ```

pub mod types;

pub use types::{Shot, ShotStatus};

//! Synthetic espresso telemetry service with an HTTP REST API.
//!
//! This crate provides a service that:
//! - Generates a deterministic synthetic shot history at startup
//! - Keeps the history in an in-memory store
//! - Exposes a REST API for querying shots and derived statistics
//!
//! # REST API Endpoints
//!
//! - `GET /api/health` - Service health check
//! - `GET /api/shots` - List recent shots, newest first (`?limit=N`)
//! - `GET /api/shots/{id}` - Get a single shot
//! - `POST /api/shots` - Store a shot (insert or replace)
//! - `DELETE /api/shots/{id}` - Delete a shot
//! - `GET /api/stats/overview` - Fleet-wide summary statistics
//! - `GET /api/stats/daily` - Per-day rollups
//!
//! # Configuration
//!
//! The service reads configuration from `~/.config/crema/service.toml`:
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8080"
//!
//! [dataset]
//! shots = 250
//! seed = 20240801
//! ```

pub mod api;
pub mod config;
pub mod shots;
pub mod state;

pub use config::{Config, ConfigError, DatasetConfig, ServerConfig};
pub use shots::ShotService;
pub use state::AppState;

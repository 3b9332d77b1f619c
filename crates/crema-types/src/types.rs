//! Core data types for espresso shot telemetry.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Machine-reported outcome of a shot.
///
/// Serializes to the lowercase strings `"ok"`, `"warning"`, and `"error"`
/// used by the dashboard API.
///
/// # Example
///
/// ```
/// use crema_types::ShotStatus;
///
/// assert!(ShotStatus::Ok.is_success());
/// assert!(!ShotStatus::Warning.is_success());
/// assert_eq!(ShotStatus::Error.to_string(), "error");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotStatus {
    /// The shot completed within normal parameters.
    Ok,
    /// The shot completed but at least one reading was out of range.
    Warning,
    /// The machine aborted or flagged the shot.
    Error,
}

impl ShotStatus {
    /// Whether this status counts toward the success rate.
    pub fn is_success(self) -> bool {
        matches!(self, ShotStatus::Ok)
    }
}

impl fmt::Display for ShotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShotStatus::Ok => "ok",
            ShotStatus::Warning => "warning",
            ShotStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// One recorded espresso brew event.
///
/// All floating-point measurement fields hold values already rounded to two
/// decimal places; no raw readings are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    /// Unique identifier (UUID text form).
    pub shot_id: String,
    /// When the shot was pulled, second precision, UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub brew_time: OffsetDateTime,
    /// Machine that pulled the shot, e.g. `nxlc-200`.
    pub machine_id: String,
    /// Operator account.
    pub user_id: String,
    /// Firmware bundle running on the machine.
    pub software_bundle: String,
    /// Drink style, e.g. `espresso` or `ristretto`.
    pub coffee_type: String,
    /// Recipe the machine executed, e.g. `rx-117`.
    pub recipe_id: String,
    /// Grinder setting actually reached.
    pub grind_size_actual: i32,
    /// Grinder setting the recipe asked for.
    pub grind_size_target: i32,
    /// Ground coffee weighed into the basket, grams.
    pub dose_grams: f64,
    /// Dose the recipe asked for, grams.
    pub dose_target_grams: f64,
    /// Extraction duration, seconds.
    pub brew_time_seconds: f64,
    /// Highest pressure reached during extraction, bar.
    pub peak_pressure_bar: f64,
    /// Outcome reported by the machine.
    pub last_status: ShotStatus,
}

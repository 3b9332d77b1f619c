//! Aggregate statistics over shot histories.
//!
//! These are pure functions over a slice of records. Callers that keep
//! shots behind a lock take a snapshot first and aggregate outside the
//! critical section.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crema_types::Shot;

use crate::util::round2;

/// Fleet-wide summary of a shot history.
///
/// All measurements are rounded to two decimals. An empty history yields
/// all zeroes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_shots: u64,
    pub avg_brew_time_seconds: f64,
    pub min_brew_time_seconds: f64,
    pub max_brew_time_seconds: f64,
    pub avg_peak_pressure_bar: f64,
    /// Share of shots whose most recent status is `Ok`, in percent.
    pub success_rate_percent: f64,
}

/// Per-calendar-day rollup, keyed by UTC date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Day in `YYYY-MM-DD` form.
    pub date: String,
    pub count: u64,
    pub avg_brew_time_seconds: f64,
    pub avg_peak_pressure_bar: f64,
}

#[derive(Default)]
struct DayAccumulator {
    count: u64,
    brew_sum: f64,
    pressure_sum: f64,
}

/// Summarize an entire history in a single pass.
pub fn overview(shots: &[Shot]) -> OverviewStats {
    if shots.is_empty() {
        return OverviewStats::default();
    }

    let mut brew_sum = 0.0;
    let mut min_brew = f64::INFINITY;
    let mut max_brew = f64::NEG_INFINITY;
    let mut pressure_sum = 0.0;
    let mut successes = 0u64;

    for shot in shots {
        brew_sum += shot.brew_time_seconds;
        min_brew = min_brew.min(shot.brew_time_seconds);
        max_brew = max_brew.max(shot.brew_time_seconds);
        pressure_sum += shot.peak_pressure_bar;
        if shot.last_status.is_success() {
            successes += 1;
        }
    }

    let n = shots.len() as f64;
    OverviewStats {
        total_shots: shots.len() as u64,
        avg_brew_time_seconds: round2(brew_sum / n),
        min_brew_time_seconds: round2(min_brew),
        max_brew_time_seconds: round2(max_brew),
        avg_peak_pressure_bar: round2(pressure_sum / n),
        success_rate_percent: round2(successes as f64 * 100.0 / n),
    }
}

/// Group a history by calendar day, ascending by date.
pub fn daily(shots: &[Shot]) -> Vec<DailyStats> {
    let mut days: BTreeMap<String, DayAccumulator> = BTreeMap::new();
    for shot in shots {
        let date = shot.brew_time.date();
        let key = format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        );
        let acc = days.entry(key).or_default();
        acc.count += 1;
        acc.brew_sum += shot.brew_time_seconds;
        acc.pressure_sum += shot.peak_pressure_bar;
    }

    days.into_iter()
        .map(|(date, acc)| {
            let n = acc.count as f64;
            DailyStats {
                date,
                count: acc.count,
                avg_brew_time_seconds: round2(acc.brew_sum / n),
                avg_peak_pressure_bar: round2(acc.pressure_sum / n),
            }
        })
        .collect()
}

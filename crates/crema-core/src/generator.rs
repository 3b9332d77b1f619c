//! Deterministic synthetic shot generation.
//!
//! The generator produces a statistically plausible dataset for dashboards
//! and tests. Every draw, including the record identifiers, comes from a
//! single stream seeded per invocation, so a fixed seed, count, and
//! reference instant reproduce the exact same records.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use time::{Date, Duration, Month, OffsetDateTime, Time};
use uuid::Builder;

use crema_types::{Shot, ShotStatus};

use crate::util::round2;

/// Seed used for the stock dataset.
pub const DEFAULT_SEED: u64 = 20240801;

/// Machines in the synthetic fleet.
pub const MACHINES: [&str; 3] = ["nxlc-100", "nxlc-200", "nxlc-300"];

/// Operator accounts.
pub const USERS: [&str; 4] = [
    "barista.alex",
    "barista.sam",
    "barista.taylor",
    "barista.jordan",
];

/// Firmware bundles in circulation.
pub const BUNDLES: [&str; 3] = ["stable-1.4.2", "stable-1.5.0", "edge-1.6.0"];

/// Drink styles.
pub const COFFEE_TYPES: [&str; 3] = ["espresso", "ristretto", "lungo"];

/// Status pool, weighted four-to-one-to-one toward success.
const STATUS_POOL: [ShotStatus; 6] = [
    ShotStatus::Ok,
    ShotStatus::Ok,
    ShotStatus::Ok,
    ShotStatus::Ok,
    ShotStatus::Warning,
    ShotStatus::Error,
];

/// Generator for synthetic [`Shot`] records.
///
/// Records are spread over a date window that opens at 08:00 on the most
/// recent August 1 and closes at the generator's reference instant. The
/// seed fixes the shape of the randomness; the reference instant fixes the
/// window.
///
/// # Example
///
/// ```
/// use crema_core::ShotGenerator;
///
/// let shots = ShotGenerator::new(42).generate(10);
/// assert_eq!(shots.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct ShotGenerator {
    seed: u64,
    now: OffsetDateTime,
}

impl ShotGenerator {
    /// Create a generator with the given seed, windowed against the current
    /// wall-clock instant.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            now: OffsetDateTime::now_utc(),
        }
    }

    /// Pin the reference instant that closes the date window.
    ///
    /// Tests use this to make output fully reproducible; production callers
    /// normally keep the wall-clock default so the dataset tracks the
    /// current date.
    #[must_use]
    pub fn with_now(mut self, now: OffsetDateTime) -> Self {
        self.now = now;
        self
    }

    /// Produce `n` records sorted ascending by brew time.
    ///
    /// The pseudo-random stream is owned by this call, so invoking
    /// `generate` repeatedly on the same generator returns identical data.
    #[must_use]
    pub fn generate(&self, n: usize) -> Vec<Shot> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let start = window_start(self.now);
        let days = day_span(start, self.now);

        let grind_spread = Normal::<f64>::new(0.0, 3.0).unwrap();
        let pressure_spread = Normal::<f64>::new(7.0, 1.2).unwrap();
        let brew_spread = Normal::<f64>::new(27.0, 4.0).unwrap();

        let mut shots = Vec::with_capacity(n);
        for _ in 0..n {
            let day_offset = rng.random_range(0..days);
            let hour: u8 = rng.random_range(6..18);
            let minute: u8 = rng.random_range(0..60);
            let brew_time = (start + Duration::days(day_offset))
                .replace_time(Time::from_hms(hour, minute, 0).unwrap());

            let grind_target: i32 = rng.random_range(20..60);
            let grind_shift = grind_spread.sample(&mut rng);
            let grind_actual = ((grind_target as f64 + grind_shift).round() as i32).clamp(10, 80);
            let dose_target: f64 = rng.random_range(18.0..22.0);
            let dose = dose_target + rng.random_range(-1.0..1.0);
            let pressure = pressure_spread.sample(&mut rng).clamp(6.0, 11.0);
            let brew_seconds = brew_spread.sample(&mut rng).clamp(18.0, 40.0);

            let machine = pick(&mut rng, &MACHINES);
            let user = pick(&mut rng, &USERS);
            let bundle = pick(&mut rng, &BUNDLES);
            let coffee = pick(&mut rng, &COFFEE_TYPES);
            let recipe = format!("rx-{}", rng.random_range(100..150));
            let status = pick(&mut rng, &STATUS_POOL);
            let shot_id = Builder::from_random_bytes(rng.random()).into_uuid();

            shots.push(Shot {
                shot_id: shot_id.to_string(),
                brew_time,
                machine_id: machine.to_string(),
                user_id: user.to_string(),
                software_bundle: bundle.to_string(),
                coffee_type: coffee.to_string(),
                recipe_id: recipe,
                grind_size_actual: grind_actual,
                grind_size_target: grind_target,
                dose_grams: round2(dose),
                dose_target_grams: round2(dose_target),
                brew_time_seconds: round2(brew_seconds),
                peak_pressure_bar: round2(pressure),
                last_status: status,
            });
        }

        // Stable sort keeps generation order as the tie-break.
        shots.sort_by(|a, b| a.brew_time.cmp(&b.brew_time));
        shots
    }
}

fn pick<T: Copy>(rng: &mut StdRng, pool: &[T]) -> T {
    pool[rng.random_range(0..pool.len())]
}

/// First instant of the sampling window: 08:00 on the most recent August 1
/// at or before `now`.
fn window_start(now: OffsetDateTime) -> OffsetDateTime {
    let start = august_first(now.year());
    if now < start {
        august_first(now.year() - 1)
    } else {
        start
    }
}

fn august_first(year: i32) -> OffsetDateTime {
    Date::from_calendar_date(year, Month::August, 1)
        .unwrap()
        .with_hms(8, 0, 0)
        .unwrap()
        .assume_utc()
}

/// Number of days eligible for sampling, always at least one.
fn day_span(start: OffsetDateTime, now: OffsetDateTime) -> i64 {
    (now - start).whole_hours() / 24 + 1
}

//! Synthetic token generation
//!
//! Every field is an independent uniform draw over a fixed range, rounded to
//! the precision dashboards display. The RNG is owned by the generator so a
//! seeded `StdRng` gives reproducible runs.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::defaults::{CHART_INTERVAL_MINUTES, DEFAULT_CHART_POINTS};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::token::{ChartPoint, NarrativeMomentum, TokenRecord};

pub const BELIEF_VELOCITY_RANGE: RangeInclusive<f64> = 30.0..=98.0;
pub const VELOCITY_DELTA_RANGE: RangeInclusive<f64> = -15.0..=15.0;
pub const REFLEXIVITY_SCORE_RANGE: RangeInclusive<f64> = 0.2..=0.9;
pub const SOCIAL_VOLUME_RANGE: RangeInclusive<u32> = 1000..=30000;
pub const SENTIMENT_SCORE_RANGE: RangeInclusive<f64> = 0.3..=0.95;
pub const LAST_UPDATE_SECS_RANGE: RangeInclusive<u32> = 1..=60;

/// Chart velocities are clamped into this band
pub const CHART_VELOCITY_BOUNDS: RangeInclusive<f64> = 0.0..=100.0;

/// Per-step change subtracted while walking back in time. Skewed positive,
/// so older points trend lower than the current velocity.
pub const CHART_STEP_RANGE: RangeInclusive<f64> = -5.0..=7.0;

/// Size of the random contract address
pub const CONTRACT_BYTES: usize = 20;

pub const ID_PREFIX: &str = "py_";
pub const NAME_PREFIX: &str = "PythonToken";
pub const SYMBOL_PREFIX: &str = "PYT";

/// Generates token records from an owned random source
pub struct TokenGenerator<R> {
    rng: R,
    chart_points: usize,
}

impl TokenGenerator<StdRng> {
    /// Build a generator from validated configuration
    ///
    /// Uses `config.seed` when present, OS entropy otherwise.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self::new(rng).with_chart_points(config.chart_points))
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TokenGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            chart_points: DEFAULT_CHART_POINTS,
        }
    }

    pub fn with_chart_points(mut self, chart_points: usize) -> Self {
        self.chart_points = chart_points;
        self
    }

    /// Generate `count` records, ids `py_1` through `py_<count>` in order
    pub fn generate(&mut self, count: usize) -> Vec<TokenRecord> {
        tracing::debug!(count, chart_points = self.chart_points, "Generating mock tokens");
        (1..=count).map(|ordinal| self.next_token(ordinal)).collect()
    }

    fn next_token(&mut self, ordinal: usize) -> TokenRecord {
        let belief_velocity = round_to(self.rng.gen_range(BELIEF_VELOCITY_RANGE), 1);

        let mut contract = [0u8; CONTRACT_BYTES];
        self.rng.fill(&mut contract);

        let record = TokenRecord {
            id: format!("{ID_PREFIX}{ordinal}"),
            name: format!("{NAME_PREFIX}{ordinal}"),
            symbol: format!("{SYMBOL_PREFIX}{ordinal}"),
            contract: format!("0x{}", hex::encode(contract)),
            belief_velocity,
            velocity_delta: round_to(self.rng.gen_range(VELOCITY_DELTA_RANGE), 1),
            reflexivity_score: round_to(self.rng.gen_range(REFLEXIVITY_SCORE_RANGE), 2),
            social_volume: self.rng.gen_range(SOCIAL_VOLUME_RANGE),
            sentiment_score: round_to(self.rng.gen_range(SENTIMENT_SCORE_RANGE), 2),
            narrative_momentum: *NarrativeMomentum::ALL
                .choose(&mut self.rng)
                .unwrap_or(&NarrativeMomentum::AiIntegration),
            last_update: format!("{}s ago", self.rng.gen_range(LAST_UPDATE_SECS_RANGE)),
            chart_data: generate_chart_history(&mut self.rng, belief_velocity, self.chart_points),
        };

        tracing::debug!(
            id = %record.id,
            belief_velocity = record.belief_velocity,
            narrative = %record.narrative_momentum,
            "Generated token"
        );

        record
    }
}

/// Generate a chart history ending at `current_velocity`
///
/// The walk starts at the current value and steps back in time, so the last
/// point is the clamped current value and each earlier point is one random
/// step further away. Labels are assigned by final position, oldest first:
/// `00:00`, `04:00`, `08:00`, ...
pub fn generate_chart_history<R: Rng>(
    rng: &mut R,
    current_velocity: f64,
    points: usize,
) -> Vec<ChartPoint> {
    let mut velocities = VecDeque::with_capacity(points);
    let mut velocity = current_velocity;

    for _ in 0..points {
        let clamped = velocity.clamp(
            *CHART_VELOCITY_BOUNDS.start(),
            *CHART_VELOCITY_BOUNDS.end(),
        );
        velocities.push_front(round_to(clamped, 1));
        velocity -= rng.gen_range(CHART_STEP_RANGE);
    }

    velocities
        .into_iter()
        .enumerate()
        .map(|(position, velocity)| ChartPoint {
            time: chart_time_label(position),
            velocity,
        })
        .collect()
}

/// `"MM:00"` label for a chart position
pub fn chart_time_label(position: usize) -> String {
    format!("{:02}:00", position * CHART_INTERVAL_MINUTES)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

//! Tsu rule parameters and the nuisance rate schedule.

use crate::error::RuleError;

// ── Rule ────────────────────────────────────────────────────────

/// Default points per nuisance object.
pub const DEFAULT_INITIAL_NUISANCE_RATE: u32 = 70;
/// Default seconds before the nuisance rate starts dropping.
pub const DEFAULT_MARGIN_TIME: Option<u32> = Some(96);
/// Default smallest group that clears.
pub const DEFAULT_MIN_CLEAR_CONNECTION: u32 = 4;
/// Default points for transforming a nuisance object.
pub const DEFAULT_NUISANCE_TRANSFORM_POINT: u32 = 0;
/// Default transform point multiplier.
pub const DEFAULT_LEVEL: u32 = 1;

/// Seconds between nuisance rate updates once margin time has passed.
pub const NUISANCE_RATE_UPDATE_SECONDS: f64 = 16.0;

/// Parameters of a Tsu game.
///
/// `Default` gives the classic rule: rate 70, margin time 96 s, groups of
/// four clear, nuisance transforms are worth nothing and the level is 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Points converted into one nuisance object before margin time.
    pub initial_nuisance_rate: u32,
    /// Seconds after which the nuisance rate starts dropping. `None` keeps
    /// the initial rate for the whole game.
    pub margin_time: Option<u32>,
    /// Smallest group size that clears.
    pub min_clear_connection: u32,
    /// Points for each nuisance object transformed by a clear.
    pub nuisance_transform_point: u32,
    /// Multiplier applied to transform points.
    pub level: u32,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            initial_nuisance_rate: DEFAULT_INITIAL_NUISANCE_RATE,
            margin_time: DEFAULT_MARGIN_TIME,
            min_clear_connection: DEFAULT_MIN_CLEAR_CONNECTION,
            nuisance_transform_point: DEFAULT_NUISANCE_TRANSFORM_POINT,
            level: DEFAULT_LEVEL,
        }
    }
}

impl Rule {
    /// Check that the rule can drive a game.
    ///
    /// # Errors
    ///
    /// - [`RuleError::ZeroNuisanceRate`] if `initial_nuisance_rate` is 0.
    /// - [`RuleError::ZeroMinClearConnection`] if `min_clear_connection` is 0.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.initial_nuisance_rate == 0 {
            return Err(RuleError::ZeroNuisanceRate);
        }
        if self.min_clear_connection == 0 {
            return Err(RuleError::ZeroMinClearConnection);
        }
        Ok(())
    }

    /// The nuisance rate schedule that applies after margin time.
    pub fn nuisance_rates(&self) -> NuisanceRates {
        NuisanceRates::new(self.initial_nuisance_rate)
    }

    /// Points per nuisance object `time` seconds into the game.
    ///
    /// Before margin time this is the initial rate. From margin time on the
    /// schedule advances one step every 16 seconds and then holds its last
    /// value.
    ///
    /// ```
    /// use tsumo_game::Rule;
    ///
    /// let rule = Rule::default();
    /// assert_eq!(rule.nuisance_rate(0.0), 70.0);
    /// assert_eq!(rule.nuisance_rate(96.0), 52.5);
    /// assert_eq!(rule.nuisance_rate(112.0), 35.0);
    /// ```
    pub fn nuisance_rate(&self, time: f64) -> f64 {
        let initial = f64::from(self.initial_nuisance_rate);
        let Some(margin) = self.margin_time else {
            return initial;
        };
        let mut remaining = time - f64::from(margin);
        let mut current = initial;
        for rate in self.nuisance_rates() {
            current = rate;
            if remaining < 0.0 {
                break;
            }
            remaining -= NUISANCE_RATE_UPDATE_SECONDS;
        }
        current
    }

    /// Convert `point` into nuisance objects at `time`.
    ///
    /// Returns the whole number of objects and the leftover points.
    pub fn nuisance_count(&self, point: u64, time: f64) -> (u64, f64) {
        let rate = self.nuisance_rate(time);
        let point = point as f64;
        if rate <= 0.0 {
            return (0, point);
        }
        ((point / rate).floor() as u64, point % rate)
    }

    /// How many times stronger attacks are at `time` than at the start.
    ///
    /// For display only: the real rate may not divide the initial one.
    pub fn nuisance_rate_multiplier(&self, time: f64) -> f64 {
        let rate = self.nuisance_rate(time);
        if rate <= 0.0 {
            return 1.0;
        }
        f64::from(self.initial_nuisance_rate) / rate
    }
}

// ── Nuisance rate schedule ──────────────────────────────────────

/// Most rates the schedule yields.
const MAX_RATE_UPDATES: u32 = 15;

/// The nuisance rates that apply after margin time, in order.
///
/// Two pools start at the initial rate and at three quarters of it. Rates
/// alternate between the pools, and a pool is halved (truncating) each time
/// it is used. The schedule ends once a pool drops to zero or after fifteen
/// rates.
#[derive(Clone, Debug)]
pub struct NuisanceRates {
    pools: [f64; 2],
    updates: u32,
    exhausted: bool,
}

impl NuisanceRates {
    /// The schedule for `initial_rate`.
    pub fn new(initial_rate: u32) -> Self {
        let initial = f64::from(initial_rate);
        Self {
            pools: [initial, initial * 3.0 / 4.0],
            updates: 0,
            exhausted: false,
        }
    }
}

impl Iterator for NuisanceRates {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.exhausted || self.updates >= MAX_RATE_UPDATES {
            return None;
        }
        let pool = &mut self.pools[(self.updates % 2) as usize];
        let rate = *pool;
        *pool = (rate / 2.0).trunc();
        self.exhausted = *pool <= 0.0;
        self.updates += 1;
        Some(rate)
    }
}

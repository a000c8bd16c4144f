//! Scoring weights for the composite leaderboard score.
//!
//! Weights can be created programmatically with [`Weights::new()`] and the
//! `with_*` setters, or pre-loaded from environment variables with
//! [`Weights::from_env()`].
//!
//! # Environment Variables
//!
//! Each variable is parsed as a float; unset or unparsable values keep the
//! built-in default.
//!
//! - `ANALYZE_WIN_POINTS` — points per win (default: `1.0`)
//! - `ANALYZE_DRAW_POINTS` — points per draw (default: `0.25`)
//! - `ANALYZE_LOSS_POINTS` — points per loss (default: `-0.5`)
//! - `ANALYZE_MARGIN_WEIGHT` — bonus per point of average margin (default: `0.02`)
//! - `ANALYZE_TIMEOUT_PENALTY` — penalty per timeout (default: `1.0`)
//! - `ANALYZE_CRASH_PENALTY` — penalty per crash (default: `1.5`)

/// Coefficients of the composite score formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    /// Points credited per win.
    pub win_points: f64,
    /// Points credited per draw.
    pub draw_points: f64,
    /// Points credited per loss (usually negative).
    pub loss_points: f64,
    /// Bonus per point of average margin.
    pub margin_weight: f64,
    /// Penalty subtracted per timeout.
    pub timeout_penalty: f64,
    /// Penalty subtracted per crash.
    pub crash_penalty: f64,
}

impl Weights {
    /// Create weights with the default coefficients.
    pub fn new() -> Self {
        Self {
            win_points: 1.0,
            draw_points: 0.25,
            loss_points: -0.5,
            margin_weight: 0.02,
            timeout_penalty: 1.0,
            crash_penalty: 1.5,
        }
    }

    /// Create weights from environment variables.
    ///
    /// See the module documentation for the recognized variables. Any unset
    /// or unparsable variable keeps its default value.
    pub fn from_env() -> Self {
        fn get_env_weight(var: &str, default: f64) -> f64 {
            match std::env::var(var) {
                Ok(val) => val.trim().parse().unwrap_or(default),
                Err(_) => default,
            }
        }

        let defaults = Self::new();
        Self {
            win_points: get_env_weight("ANALYZE_WIN_POINTS", defaults.win_points),
            draw_points: get_env_weight("ANALYZE_DRAW_POINTS", defaults.draw_points),
            loss_points: get_env_weight("ANALYZE_LOSS_POINTS", defaults.loss_points),
            margin_weight: get_env_weight("ANALYZE_MARGIN_WEIGHT", defaults.margin_weight),
            timeout_penalty: get_env_weight("ANALYZE_TIMEOUT_PENALTY", defaults.timeout_penalty),
            crash_penalty: get_env_weight("ANALYZE_CRASH_PENALTY", defaults.crash_penalty),
        }
    }

    /// Set the points credited per win.
    pub fn with_win_points(mut self, value: f64) -> Self {
        self.win_points = value;
        self
    }

    /// Set the points credited per draw.
    pub fn with_draw_points(mut self, value: f64) -> Self {
        self.draw_points = value;
        self
    }

    /// Set the points credited per loss.
    pub fn with_loss_points(mut self, value: f64) -> Self {
        self.loss_points = value;
        self
    }

    /// Set the bonus per point of average margin.
    pub fn with_margin_weight(mut self, value: f64) -> Self {
        self.margin_weight = value;
        self
    }

    /// Set the penalty per timeout.
    pub fn with_timeout_penalty(mut self, value: f64) -> Self {
        self.timeout_penalty = value;
        self
    }

    /// Set the penalty per crash.
    pub fn with_crash_penalty(mut self, value: f64) -> Self {
        self.crash_penalty = value;
        self
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::new()
    }
}

//! Cooling schedules.
//!
//! Every schedule maps the outer iteration `k` (1-based) to a temperature
//! given the initial temperature `T0`, the final temperature `Tf`, the
//! schedule parameter `alpha` and the iteration budget `K`:
//!
//! | schedule | temperature |
//! |---|---|
//! | linear | `T0 - (T0 - Tf) * k / K` |
//! | geometric | `T0 * alpha^k`, `0.8 <= alpha <= 0.9` |
//! | logarithmic | `T0 / (1 + alpha * ln(1 + k))`, `alpha >= 0` |
//! | exponential | `T0 * exp(-alpha * k^(1/K))`, `alpha >= 0` |
//! | linear_inverse | `T0 / (1 + alpha * k)`, `alpha > 0` |

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SearchError};

/// Temperature-update policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoolingSchedule {
    /// Reaches `Tf` exactly at `k = K`.
    Linear,
    /// Exponential decay by `alpha` per iteration.
    Geometric,
    /// Slow decay, `1 / ln k`.
    Logarithmic,
    /// Decay in `k^(1/K)`.
    Exponential,
    /// Hyperbolic decay, `1 / k`.
    #[default]
    LinearInverse,
}

impl CoolingSchedule {
    /// All schedules, in tag order.
    pub const ALL: [CoolingSchedule; 5] = [
        CoolingSchedule::Linear,
        CoolingSchedule::Geometric,
        CoolingSchedule::Logarithmic,
        CoolingSchedule::Exponential,
        CoolingSchedule::LinearInverse,
    ];

    /// Tag used in configuration files and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            CoolingSchedule::Linear => "linear",
            CoolingSchedule::Geometric => "geometric",
            CoolingSchedule::Logarithmic => "logarithmic",
            CoolingSchedule::Exponential => "exponential",
            CoolingSchedule::LinearInverse => "linear_inverse",
        }
    }

    /// Checks `alpha` against the schedule's admissible range.
    pub fn validate_alpha(self, alpha: f64) -> Result<()> {
        if !alpha.is_finite() {
            return Err(SearchError::InvalidConfig(format!(
                "cooling alpha must be finite, got {alpha}"
            )));
        }
        match self {
            CoolingSchedule::Geometric if !(0.8..=0.9).contains(&alpha) => {
                Err(SearchError::InvalidConfig(format!(
                    "for cooling schedule {self}, alpha must be in [0.8, 0.9], got {alpha}"
                )))
            }
            CoolingSchedule::LinearInverse if alpha <= 0.0 => {
                Err(SearchError::InvalidConfig(format!(
                    "for cooling schedule {self}, alpha must be greater than 0, got {alpha}"
                )))
            }
            CoolingSchedule::Logarithmic | CoolingSchedule::Exponential if alpha < 0.0 => {
                Err(SearchError::InvalidConfig(format!(
                    "for cooling schedule {self}, alpha must not be negative, got {alpha}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Temperature at outer iteration `k` of `max_iter`.
    pub fn temperature(
        self,
        initial: f64,
        final_temp: f64,
        alpha: f64,
        k: usize,
        max_iter: usize,
    ) -> f64 {
        let kf = k as f64;
        match self {
            // Written from the final temperature so that k == K lands on it exactly.
            CoolingSchedule::Linear => {
                final_temp + (initial - final_temp) * (1.0 - kf / max_iter.max(1) as f64)
            }
            CoolingSchedule::Geometric => initial * alpha.powf(kf),
            CoolingSchedule::Logarithmic => initial / (1.0 + alpha * kf.ln_1p()),
            CoolingSchedule::Exponential => {
                initial * (-alpha * kf.powf(1.0 / max_iter.max(1) as f64)).exp()
            }
            CoolingSchedule::LinearInverse => initial / (1.0 + alpha * kf),
        }
    }
}

impl fmt::Display for CoolingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoolingSchedule {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        CoolingSchedule::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SearchError::UnknownCoolingSchedule(s.to_string()))
    }
}

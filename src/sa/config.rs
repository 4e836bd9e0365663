//! SA configuration.

use super::schedule::CoolingSchedule;
use crate::error::{Result, SearchError};
use crate::problem::Objective;
use crate::verbosity::Verbosity;

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temp(100.0)
///     .with_final_temp(0.01)
///     .with_cooling(CoolingSchedule::Geometric, 0.85)
///     .with_max_iter_per_temp(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Maximum number of temperature levels (outer iterations).
    pub max_iter: usize,

    /// Neighbor evaluations at each temperature level.
    pub max_iter_per_temp: usize,

    /// Starting temperature. Higher values allow more exploration.
    pub initial_temp: f64,

    /// The run stops once the temperature falls to or below this.
    pub final_temp: f64,

    /// Cooling schedule.
    pub cooling_schedule: CoolingSchedule,

    /// Schedule parameter; its admissible range depends on the schedule.
    pub cooling_alpha: f64,

    /// Maximize instead of minimize.
    pub maximize: bool,

    /// Diagnostic verbosity.
    pub verbosity: Verbosity,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            max_iter_per_temp: 10,
            initial_temp: 5230.0,
            final_temp: 0.1,
            cooling_schedule: CoolingSchedule::LinearInverse,
            cooling_alpha: 0.9,
            maximize: false,
            verbosity: Verbosity::QUIET,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iter(mut self, n: usize) -> Self {
        self.max_iter = n;
        self
    }

    pub fn with_max_iter_per_temp(mut self, n: usize) -> Self {
        self.max_iter_per_temp = n;
        self
    }

    pub fn with_initial_temp(mut self, t: f64) -> Self {
        self.initial_temp = t;
        self
    }

    pub fn with_final_temp(mut self, t: f64) -> Self {
        self.final_temp = t;
        self
    }

    /// Sets the schedule together with its parameter.
    pub fn with_cooling(mut self, schedule: CoolingSchedule, alpha: f64) -> Self {
        self.cooling_schedule = schedule;
        self.cooling_alpha = alpha;
        self
    }

    pub fn with_maximize(mut self, maximize: bool) -> Self {
        self.maximize = maximize;
        self
    }

    pub fn with_verbosity(mut self, level: u8) -> Self {
        self.verbosity = Verbosity::new(level);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Optimization direction.
    pub fn objective(&self) -> Objective {
        Objective::from_maximize(self.maximize)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iter == 0 {
            return Err(SearchError::InvalidConfig("max_iter must be positive".into()));
        }
        if self.max_iter_per_temp == 0 {
            return Err(SearchError::InvalidConfig(
                "max_iter_per_temp must be positive".into(),
            ));
        }
        if !(self.initial_temp.is_finite() && self.initial_temp > 0.0) {
            return Err(SearchError::InvalidConfig(
                "initial_temp must be positive and finite".into(),
            ));
        }
        if self.final_temp.is_nan() || self.final_temp <= 0.0 {
            return Err(SearchError::InvalidConfig("final_temp must be positive".into()));
        }
        if self.final_temp >= self.initial_temp {
            return Err(SearchError::InvalidConfig(
                "final_temp must be less than initial_temp".into(),
            ));
        }
        self.cooling_schedule.validate_alpha(self.cooling_alpha)
    }
}

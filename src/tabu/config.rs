//! Tabu Search configuration.

use crate::error::{Result, SearchError};
use crate::problem::Objective;
use crate::verbosity::Verbosity;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_localsearch::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iter(1000)
///     .with_tabu_tenure(7)
///     .with_neighbor_size(20)
///     .with_aspiration(true);
/// assert_eq!(config.max_iter, 1000);
/// assert_eq!(config.tabu_tenure, 7);
/// assert_eq!(config.aspiration_limit(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabuConfig {
    /// Iterations per repetition.
    pub max_iter: usize,
    /// How many iterations an accepted move stays tabu.
    pub tabu_tenure: usize,
    /// Number of distinct candidates sampled per iteration.
    pub neighbor_size: usize,
    /// Whether an improving tabu candidate may override its tabu status.
    pub use_aspiration: bool,
    /// A tabu candidate aspirates only while its remaining tenure is below
    /// this limit. `None` means `tabu_tenure + 1`, i.e. any live entry.
    pub aspiration_limit: Option<usize>,
    /// Enables long-term frequency memory for diversification.
    pub use_longterm: bool,
    /// Maximize instead of minimize.
    pub maximize: bool,
    /// Route candidate scores through [`Problem::penalized_delta`](crate::Problem::penalized_delta).
    pub penalize: bool,
    /// Neighbor draws allowed while collecting one neighborhood.
    /// `None` means `neighbor_size * 100`.
    pub max_sampling_attempts: Option<usize>,
    /// Consecutive rounds without an admissible candidate before the step
    /// fails with [`SearchError::SearchSpaceExhausted`].
    pub max_failed_rounds: usize,
    /// Diagnostic verbosity.
    pub verbosity: Verbosity,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tabu_tenure: 1000,
            neighbor_size: 10,
            use_aspiration: true,
            aspiration_limit: None,
            use_longterm: false,
            maximize: false,
            penalize: false,
            max_sampling_attempts: None,
            max_failed_rounds: 1000,
            verbosity: Verbosity::QUIET,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations per repetition.
    pub fn with_max_iter(mut self, n: usize) -> Self {
        self.max_iter = n;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the number of distinct candidates per iteration.
    pub fn with_neighbor_size(mut self, n: usize) -> Self {
        self.neighbor_size = n;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.use_aspiration = aspiration;
        self
    }

    /// Sets the remaining-tenure limit under which tabu candidates aspirate.
    pub fn with_aspiration_limit(mut self, limit: usize) -> Self {
        self.aspiration_limit = Some(limit);
        self
    }

    /// Enables or disables long-term frequency memory.
    pub fn with_longterm(mut self, longterm: bool) -> Self {
        self.use_longterm = longterm;
        self
    }

    /// Switches to maximization.
    pub fn with_maximize(mut self, maximize: bool) -> Self {
        self.maximize = maximize;
        self
    }

    /// Enables the problem's move-scoring override.
    pub fn with_penalize(mut self, penalize: bool) -> Self {
        self.penalize = penalize;
        self
    }

    /// Bounds neighbor draws per neighborhood.
    pub fn with_max_sampling_attempts(mut self, n: usize) -> Self {
        self.max_sampling_attempts = Some(n);
        self
    }

    /// Bounds consecutive failed rounds per step.
    pub fn with_max_failed_rounds(mut self, n: usize) -> Self {
        self.max_failed_rounds = n;
        self
    }

    /// Sets the verbosity level (0-3).
    pub fn with_verbosity(mut self, level: u8) -> Self {
        self.verbosity = Verbosity::new(level);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective aspiration limit.
    pub fn aspiration_limit(&self) -> usize {
        self.aspiration_limit
            .filter(|&l| l > 0)
            .unwrap_or(self.tabu_tenure.saturating_add(1))
    }

    /// Effective neighbor draw bound.
    pub fn sampling_attempts(&self) -> usize {
        self.max_sampling_attempts
            .filter(|&n| n > 0)
            .unwrap_or(self.neighbor_size.saturating_mul(100))
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
        if self.tabu_tenure == 0 {
            return Err(SearchError::InvalidConfig("tabu_tenure must be positive".into()));
        }
        if self.neighbor_size == 0 {
            return Err(SearchError::InvalidConfig(
                "neighbor_size must be positive".into(),
            ));
        }
        if self.max_failed_rounds == 0 {
            return Err(SearchError::InvalidConfig(
                "max_failed_rounds must be positive".into(),
            ));
        }
        Ok(())
    }
}

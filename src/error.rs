//! Error taxonomy shared by both engines.

use thiserror::Error;

/// Errors raised by engine construction, initialization and stepping.
///
/// Every variant is fatal for the call that produced it: the engines never
/// retry internally except while sampling neighbors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A cooling-schedule tag did not name one of the five policies.
    #[error(
        "undefined cooling schedule `{0}`, expected one of: linear, geometric, logarithmic, exponential, linear_inverse"
    )]
    UnknownCoolingSchedule(String),

    /// A step was requested before a problem was bound with `init`.
    #[error("{engine} has no problem bound, call init first")]
    Uninitialized {
        /// Name of the engine that was misused.
        engine: &'static str,
    },

    /// Tabu Search could not produce an admissible candidate.
    #[error(
        "search space is too narrow: no admissible candidate after {rounds} rounds \
         at iteration {iteration} ({tabu_len} entries in the tabu list, best value {best_value})"
    )]
    SearchSpaceExhausted {
        /// Iteration at which the search gave up.
        iteration: usize,
        /// Best objective value seen in the current repetition.
        best_value: f64,
        /// Number of live tabu entries.
        tabu_len: usize,
        /// Consecutive failed rounds.
        rounds: usize,
    },

    /// A solution value offered none of the recognized hashing views.
    #[error("unresolved hashing case for solution of type `{type_name}`")]
    UnresolvedHashing {
        /// Rust type name of the offending solution.
        type_name: &'static str,
    },

    /// The problem could not build a starting solution.
    #[error("failed to construct initial solution: {0}")]
    Construction(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

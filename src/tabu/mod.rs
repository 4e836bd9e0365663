//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that keeps a short-term
//! memory (the tabu list) of recent moves or solutions and refuses to
//! revisit them for a number of iterations, unless aspiration lets an
//! improving candidate through. An optional long-term frequency memory
//! pushes the search away from over-visited candidates.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search - Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search - Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::{FrequencyMemory, TabuKey, TabuList};
pub use runner::{TabuResult, TabuSearch};

//! Domain-agnostic local-search framework.
//!
//! Two single-solution trajectory metaheuristics run over one small
//! problem contract:
//!
//! - **Tabu Search (TS)**: samples a neighborhood, forbids recently used
//!   moves or visited solutions for a number of iterations, and lets an
//!   improving candidate through via aspiration. An optional long-term
//!   frequency memory diversifies the search.
//! - **Simulated Annealing (SA)**: accepts worsening neighbors with the
//!   Metropolis probability under one of five cooling schedules.
//!
//! A problem implements [`Problem`]: produce an initial solution, draw a
//! random neighbor (optionally tagged with the move that produced it), and
//! evaluate a solution. Tabu Search additionally needs to recognize
//! solutions it has seen, which [`Identify`] provides for common solution
//! shapes (integers, strings, sequences, float buffers, sets and maps).
//!
//! Engines own their random generator; seed it through the configuration
//! for reproducible runs. Diagnostics go through `tracing`, gated by the
//! configured [`Verbosity`].
//!
//! # Architecture
//!
//! Like the other algorithm crates in the U-Engine ecosystem this crate
//! holds no domain concepts. Routing, scheduling, puzzles and so on are
//! defined by consumers as [`Problem`] implementations.

pub mod ensemble;
pub mod error;
pub mod identity;
pub mod problem;
pub mod random;
pub mod sa;
pub mod status;
pub mod tabu;
pub mod verbosity;

pub use error::{Result, SearchError};
pub use identity::{HashStrategy, Identified, Identify, SolutionId};
pub use problem::{Neighbor, Objective, Problem};
pub use status::EngineStatus;
pub use verbosity::Verbosity;

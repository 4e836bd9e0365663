//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with probability
//! `exp(-delta / T)`, where the temperature `T` falls level by level
//! according to a [`CoolingSchedule`], so the search wanders early and
//! settles late.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;
mod schedule;

pub use config::SaConfig;
pub use runner::{SaResult, SimulatedAnnealing};
pub use schedule::CoolingSchedule;

//! The problem contract consumed by every engine.
//!
//! A problem supplies three operations: build a starting solution, derive a
//! neighbor from a solution by one elementary move, and score a solution.
//! The engines never look inside a solution; all mutation happens here.

use std::fmt::Debug;
use std::hash::Hash;

use rand::Rng;

use crate::error::Result;

/// Outcome of a neighbor move.
///
/// A problem that can name the elementary move it applied returns
/// [`Neighbor::WithMove`]; Tabu Search then forbids the move itself rather
/// than the resulting solution, so distinct solutions reached by the same
/// move share one tabu entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Neighbor<S, M> {
    /// A bare neighboring solution.
    Plain(S),
    /// A neighboring solution together with the move that produced it.
    WithMove(S, M),
}

impl<S, M> Neighbor<S, M> {
    /// Returns the neighboring solution.
    pub fn solution(&self) -> &S {
        match self {
            Neighbor::Plain(s) | Neighbor::WithMove(s, _) => s,
        }
    }

    /// Splits into the solution and the optional move.
    pub fn into_parts(self) -> (S, Option<M>) {
        match self {
            Neighbor::Plain(s) => (s, None),
            Neighbor::WithMove(s, m) => (s, Some(m)),
        }
    }
}

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Objective {
    /// Lower objective values are better.
    #[default]
    Minimize,
    /// Higher objective values are better.
    Maximize,
}

impl Objective {
    /// Maps the engines' `maximize` toggle to a direction.
    pub fn from_maximize(maximize: bool) -> Self {
        if maximize {
            Objective::Maximize
        } else {
            Objective::Minimize
        }
    }

    /// Returns `true` if `a` is strictly better than `b`.
    #[inline]
    pub fn is_better(self, a: f64, b: f64) -> bool {
        match self {
            Objective::Minimize => a < b,
            Objective::Maximize => a > b,
        }
    }

    /// Converts a raw difference `candidate - current` into a cost
    /// difference where negative always means improvement.
    #[inline]
    pub fn as_cost_delta(self, delta: f64) -> f64 {
        match self {
            Objective::Minimize => delta,
            Objective::Maximize => -delta,
        }
    }
}

/// Defines an optimization problem for the local-search engines.
///
/// Users implement this trait to specify:
/// - How to create an initial solution
/// - How to derive a neighbor of a solution
/// - How to evaluate a solution
///
/// Operations take `&self`. A problem that keeps mutable bookkeeping
/// (for example a grid whose forced cells are fixed while constructing the
/// start) should use interior mutability and must not be shared between
/// engines running at the same time.
///
/// # Type Parameters
///
/// * `Solution`: the solution representation
/// * `Move`: identifier of an elementary move; use `()` when the problem
///   never reports moves
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_localsearch::{Neighbor, Problem, Result};
///
/// struct Tsp { dist: Vec<Vec<f64>> }
///
/// impl Problem for Tsp {
///     type Solution = Vec<usize>;
///     type Move = (usize, usize);
///
///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Result<Vec<usize>> {
///         Ok((0..self.dist.len()).collect())
///     }
///
///     fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Neighbor<Vec<usize>, (usize, usize)> {
///         let n = tour.len();
///         let i = rng.random_range(0..n);
///         let j = (i + rng.random_range(1..n)) % n;
///         let mut next = tour.clone();
///         next.swap(i, j);
///         Neighbor::WithMove(next, (i.min(j), i.max(j)))
///     }
///
///     fn evaluate(&self, tour: &Vec<usize>) -> f64 {
///         (0..tour.len()).map(|k| self.dist[tour[k]][tour[(k + 1) % tour.len()]]).sum()
///     }
/// }
/// ```
pub trait Problem {
    /// The solution type.
    type Solution: Clone + Debug;

    /// The move identifier type.
    type Move: Clone + Eq + Hash + Debug;

    /// Creates a starting solution.
    ///
    /// Returns [`SearchError::Construction`](crate::SearchError::Construction)
    /// if the instance is infeasible.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Self::Solution>;

    /// Derives a solution one elementary move away from `solution`.
    ///
    /// Must not return `solution` unchanged unless no move applies.
    fn neighbor<R: Rng>(
        &self,
        solution: &Self::Solution,
        rng: &mut R,
    ) -> Neighbor<Self::Solution, Self::Move>;

    /// Objective value of `solution`. Lower is better unless the engine is
    /// configured to maximize.
    fn evaluate(&self, solution: &Self::Solution) -> f64;

    /// Move-scoring override used by Tabu Search when `penalize` is on.
    ///
    /// `delta` is `candidate - current`; `remaining_tenure` is the move's
    /// live tabu counter, if any. The provided rule clamps an improving
    /// delta to the tenure when the move is tabu (and to zero when it is
    /// not), and charges the tenure against a non-improving tabu move.
    fn penalized_delta(&self, delta: f64, _mv: &Self::Move, remaining_tenure: Option<usize>) -> f64 {
        match (delta < 0.0, remaining_tenure) {
            (true, Some(t)) => delta.max(t as f64),
            (true, None) => 0.0,
            (false, Some(t)) => delta - t as f64,
            (false, None) => delta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line;

    impl Problem for Line {
        type Solution = i64;
        type Move = i64;

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Result<i64> {
            Ok(0)
        }

        fn neighbor<R: Rng>(&self, &x: &i64, rng: &mut R) -> Neighbor<i64, i64> {
            let step = if rng.random_bool(0.5) { 1 } else { -1 };
            Neighbor::WithMove(x + step, step)
        }

        fn evaluate(&self, &x: &i64) -> f64 {
            x as f64
        }
    }

    #[test]
    fn test_neighbor_into_parts() {
        let n: Neighbor<i32, &str> = Neighbor::WithMove(3, "inc");
        assert_eq!(*n.solution(), 3);
        assert_eq!(n.into_parts(), (3, Some("inc")));

        let n: Neighbor<i32, &str> = Neighbor::Plain(7);
        assert_eq!(n.into_parts(), (7, None));
    }

    #[test]
    fn test_objective_comparisons() {
        assert!(Objective::Minimize.is_better(1.0, 2.0));
        assert!(!Objective::Minimize.is_better(2.0, 2.0));
        assert!(Objective::Maximize.is_better(3.0, 2.0));
        assert_eq!(Objective::Maximize.as_cost_delta(2.0), -2.0);
        assert_eq!(Objective::from_maximize(true), Objective::Maximize);
    }

    #[test]
    fn test_default_penalized_delta() {
        let p = Line;
        assert_eq!(p.penalized_delta(-4.0, &1, Some(2)), 2.0);
        assert_eq!(p.penalized_delta(-4.0, &1, None), 0.0);
        assert_eq!(p.penalized_delta(5.0, &1, Some(2)), 3.0);
        assert_eq!(p.penalized_delta(5.0, &1, None), 5.0);
    }
}

//! Multi-start ensembles.
//!
//! Runs independent searches, one per seed, and keeps the best. Each run
//! builds its own engine (and, if needed, its own problem), so nothing is
//! shared between runs. With the `parallel` feature the runs are spread
//! over the rayon thread pool.
//!
//! ```
//! use u_localsearch::ensemble::multi_start;
//! use u_localsearch::Objective;
//!
//! let best = multi_start(&[1, 2, 3], Objective::Minimize, |seed| {
//!     Ok((seed, (seed as f64 - 2.0).abs()))
//! })
//! .unwrap();
//! assert_eq!(best.seed, 2);
//! assert_eq!(best.value, 0.0);
//! ```

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{Result, SearchError};
use crate::problem::Objective;

/// Winner of a multi-start ensemble.
#[derive(Debug, Clone)]
pub struct StartOutcome<T> {
    /// Seed of the winning run.
    pub seed: u64,

    /// Objective value reported by the winning run.
    pub value: f64,

    /// Whatever the winning run returned.
    pub result: T,

    /// Value of every run, in seed order.
    pub values: Vec<f64>,
}

/// Runs `run` once per seed and returns the best outcome under `objective`.
///
/// `run` returns its result together with the objective value used to rank
/// it. Ties go to the earlier seed, so the winner does not depend on
/// scheduling.
///
/// # Errors
///
/// [`SearchError::InvalidConfig`] when `seeds` is empty; otherwise the
/// first error (in seed order) returned by a run.
pub fn multi_start<T, F>(seeds: &[u64], objective: Objective, run: F) -> Result<StartOutcome<T>>
where
    T: Send,
    F: Fn(u64) -> Result<(T, f64)> + Sync,
{
    if seeds.is_empty() {
        return Err(SearchError::InvalidConfig(
            "multi_start needs at least one seed".into(),
        ));
    }

    #[cfg(feature = "parallel")]
    let outcomes: Vec<(T, f64)> = seeds
        .par_iter()
        .map(|&seed| run(seed))
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<(T, f64)> = seeds
        .iter()
        .map(|&seed| run(seed))
        .collect::<Result<Vec<_>>>()?;

    let values: Vec<f64> = outcomes.iter().map(|(_, v)| *v).collect();
    let mut winner = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if objective.is_better(value, values[winner]) {
            winner = i;
        }
    }

    let (result, value) = outcomes
        .into_iter()
        .nth(winner)
        .ok_or_else(|| SearchError::InvalidConfig("multi_start lost its winner".into()))?;

    tracing::debug!(
        runs = seeds.len(),
        seed = seeds[winner],
        value,
        "multi-start finished"
    );

    Ok(StartOutcome {
        seed: seeds[winner],
        value,
        result,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{Neighbor, Problem};
    use crate::sa::{CoolingSchedule, SaConfig, SimulatedAnnealing};
    use crate::tabu::{TabuConfig, TabuSearch};
    use rand::Rng;

    struct Bumpy;

    impl Problem for Bumpy {
        type Solution = i64;
        type Move = ();

        fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<i64> {
            Ok(rng.random_range(-50..=50))
        }

        fn neighbor<R: Rng>(&self, &x: &i64, rng: &mut R) -> Neighbor<i64, ()> {
            let d = if rng.random_bool(0.5) { 1 } else { -1 };
            Neighbor::Plain(x + d)
        }

        fn evaluate(&self, &x: &i64) -> f64 {
            let x = x as f64;
            x * x / 10.0 + 5.0 * (x / 3.0).sin()
        }
    }

    #[test]
    fn test_picks_best_and_keeps_seed_order() {
        let best = multi_start(&[5, 1, 9, 1], Objective::Minimize, |seed| {
            Ok((seed * 10, seed as f64))
        })
        .unwrap();
        assert_eq!(best.seed, 1);
        assert_eq!(best.result, 10);
        assert_eq!(best.values, vec![5.0, 1.0, 9.0, 1.0]);

        let best = multi_start(&[5, 1, 9], Objective::Maximize, |seed| Ok(((), seed as f64)))
            .unwrap();
        assert_eq!(best.seed, 9);
    }

    #[test]
    fn test_empty_seeds_rejected() {
        let result = multi_start(&[], Objective::Minimize, |_| Ok(((), 0.0)));
        assert!(matches!(result, Err(SearchError::InvalidConfig(_))));
    }

    #[test]
    fn test_error_propagates() {
        let result = multi_start(&[1, 2, 3], Objective::Minimize, |seed| {
            if seed == 2 {
                Err(SearchError::Construction("no start".into()))
            } else {
                Ok(((), 0.0))
            }
        });
        assert_eq!(
            result.unwrap_err(),
            SearchError::Construction("no start".into())
        );
    }

    #[test]
    fn test_tabu_ensemble_not_worse_than_any_run() {
        let problem = Bumpy;
        let seeds = [3, 7, 11, 19];
        let best = multi_start(&seeds, Objective::Minimize, |seed| {
            let config = TabuConfig::default()
                .with_max_iter(60)
                // Only the previous solution is tabu, so one side stays open.
                .with_tabu_tenure(2)
                .with_neighbor_size(2)
                .with_seed(seed);
            let result = TabuSearch::new(config)?.run(&problem, None, None, 1)?;
            Ok((result.best, result.best_value))
        })
        .unwrap();

        for v in &best.values {
            assert!(best.value <= *v);
        }
        assert_eq!(problem.evaluate(&best.result), best.value);
    }

    #[test]
    fn test_sa_ensemble_is_reproducible() {
        let problem = Bumpy;
        let run = |seed: u64| -> Result<(i64, f64)> {
            let config = SaConfig::default()
                .with_initial_temp(20.0)
                .with_final_temp(0.05)
                .with_cooling(CoolingSchedule::Geometric, 0.85)
                .with_max_iter_per_temp(20)
                .with_seed(seed);
            let result = SimulatedAnnealing::new(config)?.run(&problem, None, None, 1)?;
            Ok((result.best, result.best_value))
        };

        let a = multi_start(&[1, 2, 3], Objective::Minimize, run).unwrap();
        let b = multi_start(&[1, 2, 3], Objective::Minimize, run).unwrap();
        assert_eq!(a.values, b.values);
        assert_eq!(a.result, b.result);
    }
}

//! SA execution loop.

use std::ops::ControlFlow;

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::SaConfig;
use crate::error::{Result, SearchError};
use crate::problem::Problem;
use crate::random::{create_rng, SearchRng};
use crate::status::{EngineStatus, Record};

const ENGINE: &str = "SimulatedAnnealing";

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S> {
    /// The best solution found across all repetitions.
    pub best: S,

    /// Objective value of the best solution.
    pub best_value: f64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Temperature level (within its repetition) at which the best was found.
    pub best_iteration: usize,

    /// Temperature when the last repetition stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Repetitions actually run.
    pub repetitions: usize,

    /// Whether the stopping value was reached.
    pub stopped_early: bool,

    /// Best value seen so far, sampled after every temperature level.
    pub history: Vec<f64>,
}

struct State<S> {
    current: S,
    current_value: f64,
    best: Option<Record<S>>,
    temperature: f64,
    iteration: usize,
    steps: usize,
    accepted: usize,
    improving: usize,
}

/// Simulated Annealing engine.
///
/// Can be driven to completion with [`run`](Self::run), or manually with
/// [`init`](Self::init), [`annealing_step`](Self::annealing_step) and
/// [`cool`](Self::cool).
pub struct SimulatedAnnealing<'p, P: Problem> {
    config: SaConfig,
    rng: SearchRng,
    problem: Option<&'p P>,
    stopping_value: Option<f64>,
    state: Option<State<P::Solution>>,
    all_time: Option<Record<P::Solution>>,
    status: EngineStatus,
}

impl<'p, P: Problem> SimulatedAnnealing<'p, P> {
    /// Creates an engine, validating `config`.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidConfig`] for out-of-range temperatures, budgets
    /// or cooling alpha.
    pub fn new(config: SaConfig) -> Result<Self> {
        config.validate()?;
        let rng = create_rng(config.seed);
        Ok(Self {
            config,
            rng,
            problem: None,
            stopping_value: None,
            state: None,
            all_time: None,
            status: EngineStatus::Uninitialized,
        })
    }

    /// (Re)initializes the search at the initial temperature.
    ///
    /// The best solution starts unset; it is first set by an accepted move.
    pub fn init(
        &mut self,
        problem: Option<&'p P>,
        stopping_value: Option<f64>,
        initial_solution: Option<P::Solution>,
    ) -> Result<()> {
        if let Some(p) = problem {
            self.problem = Some(p);
        }
        let problem = self
            .problem
            .ok_or(SearchError::Uninitialized { engine: ENGINE })?;

        let current = match initial_solution {
            Some(s) => s,
            None => problem.initial_solution(&mut self.rng)?,
        };
        let current_value = problem.evaluate(&current);

        self.stopping_value = stopping_value;
        self.state = Some(State {
            current,
            current_value,
            best: None,
            temperature: self.config.initial_temp,
            iteration: 1,
            steps: 0,
            accepted: 0,
            improving: 0,
        });
        self.status = EngineStatus::Ready;

        if self.config.verbosity.lifecycle() {
            info!(
                current_value,
                temperature = self.config.initial_temp,
                "simulated annealing initialized"
            );
        }
        Ok(())
    }

    /// Evaluates one neighbor and applies the Metropolis criterion.
    ///
    /// Returns `Break` once the best value equals the stopping value.
    pub fn annealing_step(&mut self) -> Result<ControlFlow<()>> {
        let problem = self
            .problem
            .ok_or(SearchError::Uninitialized { engine: ENGINE })?;
        let state = self
            .state
            .as_mut()
            .ok_or(SearchError::Uninitialized { engine: ENGINE })?;
        let objective = self.config.objective();

        let (candidate, _) = problem.neighbor(&state.current, &mut self.rng).into_parts();
        let value = problem.evaluate(&candidate);
        let delta = objective.as_cost_delta(value - state.current_value);

        let improving = delta < 0.0;
        let accept = improving || metropolis(delta, state.temperature, &mut self.rng);
        state.steps += 1;

        if accept {
            state.accepted += 1;
            if improving {
                state.improving += 1;
            }
            if state
                .best
                .as_ref()
                .is_none_or(|best| objective.is_better(value, best.value))
            {
                state.best = Some(Record {
                    solution: candidate.clone(),
                    value,
                    iteration: state.iteration,
                });
            }
            state.current = candidate;
            state.current_value = value;
        }

        if self.config.verbosity.steps() {
            trace!(
                iteration = state.iteration,
                temperature = state.temperature,
                candidate_value = value,
                accepted = accept,
                current_value = state.current_value,
                "annealing step"
            );
        }

        let reached = match (&state.best, self.stopping_value) {
            (Some(best), Some(target)) => best.value == target,
            _ => false,
        };
        self.status = EngineStatus::Searching;

        Ok(if reached {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        })
    }

    /// Applies the cooling schedule for the current iteration and advances
    /// to the next temperature level.
    pub fn cool(&mut self) -> Result<()> {
        let state = self
            .state
            .as_mut()
            .ok_or(SearchError::Uninitialized { engine: ENGINE })?;
        let config = &self.config;

        state.temperature = config.cooling_schedule.temperature(
            config.initial_temp,
            config.final_temp,
            config.cooling_alpha,
            state.iteration,
            config.max_iter,
        );

        if config.verbosity.iterations() {
            debug!(
                iteration = state.iteration,
                temperature = state.temperature,
                current_value = state.current_value,
                best_value = state.best.as_ref().map(|b| b.value),
                "temperature level done"
            );
        }
        state.iteration += 1;
        Ok(())
    }

    /// Whether another temperature level is due.
    pub fn is_hot(&self) -> bool {
        self.state.as_ref().is_some_and(|s| {
            s.temperature > self.config.final_temp && s.iteration <= self.config.max_iter
        })
    }

    /// Runs the annealing to completion.
    ///
    /// Each of the `repetitions` (at least one) anneals from the initial
    /// temperature until it drops to `final_temp` or `max_iter` levels
    /// have run. The next repetition restarts from a neighbor of the best
    /// solution of the repetition that just finished. The run ends early
    /// once the best value equals `stopping_value`. Afterwards the engine's
    /// best is the all-time best.
    pub fn run(
        &mut self,
        problem: &'p P,
        stopping_value: Option<f64>,
        initial_solution: Option<P::Solution>,
        repetitions: usize,
    ) -> Result<SaResult<P::Solution>> {
        let repetitions = repetitions.max(1);
        let objective = self.config.objective();
        self.all_time = None;
        self.init(Some(problem), stopping_value, initial_solution)?;

        let mut history = Vec::new();
        let mut iterations = 0;
        let mut accepted_moves = 0;
        let mut improving_moves = 0;
        let mut completed = 0;
        let mut stopped_early = false;

        for rep in 0..repetitions {
            'anneal: while self.is_hot() {
                for _ in 0..self.config.max_iter_per_temp {
                    if self.annealing_step()?.is_break() {
                        stopped_early = true;
                        break 'anneal;
                    }
                }
                self.cool()?;

                let state = self.state()?;
                let level_best = state.best.as_ref().map(|b| b.value);
                let so_far = [level_best, self.all_time.as_ref().map(|r| r.value)]
                    .into_iter()
                    .flatten()
                    .reduce(|a, b| if objective.is_better(b, a) { b } else { a });
                if let Some(v) = so_far {
                    history.push(v);
                }
            }
            completed += 1;

            let state = self.state()?;
            iterations += state.steps;
            accepted_moves += state.accepted;
            improving_moves += state.improving;
            let record = state.best.clone().unwrap_or_else(|| Record {
                solution: state.current.clone(),
                value: state.current_value,
                iteration: 0,
            });

            if stopped_early && self.config.verbosity.lifecycle() {
                info!(
                    iteration = state.iteration,
                    best_value = record.value,
                    "stopping value reached"
                );
            }
            if self.config.verbosity.lifecycle() {
                info!(
                    repetition = rep + 1,
                    best_value = record.value,
                    temperature = state.temperature,
                    "repetition finished"
                );
            }
            let last_best = record.solution.clone();
            if self
                .all_time
                .as_ref()
                .is_none_or(|best| objective.is_better(record.value, best.value))
            {
                self.all_time = Some(record);
            }

            if stopped_early || rep + 1 == repetitions {
                break;
            }
            self.status = EngineStatus::Repeating;
            let (restart, _) = problem.neighbor(&last_best, &mut self.rng).into_parts();
            self.init(None, stopping_value, Some(restart))?;
        }

        let record = self
            .all_time
            .clone()
            .ok_or(SearchError::Uninitialized { engine: ENGINE })?;
        let final_temperature = self.state()?.temperature;
        if let Some(state) = self.state.as_mut() {
            state.best = Some(record.clone());
        }
        self.status = EngineStatus::Done;

        if self.config.verbosity.lifecycle() {
            info!(
                iterations,
                repetitions = completed,
                best_value = record.value,
                final_temperature,
                "simulated annealing done"
            );
        }

        Ok(SaResult {
            best: record.solution,
            best_value: record.value,
            iterations,
            best_iteration: record.iteration,
            final_temperature,
            accepted_moves,
            improving_moves,
            repetitions: completed,
            stopped_early,
            history,
        })
    }

    /// The configuration.
    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Lifecycle status.
    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// Current temperature.
    pub fn temperature(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.temperature)
    }

    /// Current temperature level (1 right after init).
    pub fn iteration(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.iteration)
    }

    /// Current solution.
    pub fn current_solution(&self) -> Option<&P::Solution> {
        self.state.as_ref().map(|s| &s.current)
    }

    /// Objective value of the current solution.
    pub fn current_value(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.current_value)
    }

    /// Best accepted solution of the current repetition (the all-time best
    /// after [`run`](Self::run)); `None` until a move is accepted.
    pub fn best_solution(&self) -> Option<&P::Solution> {
        self.state
            .as_ref()
            .and_then(|s| s.best.as_ref())
            .map(|b| &b.solution)
    }

    /// Objective value of [`best_solution`](Self::best_solution).
    pub fn best_value(&self) -> Option<f64> {
        self.state
            .as_ref()
            .and_then(|s| s.best.as_ref())
            .map(|b| b.value)
    }

    /// Best value across the repetitions finished so far.
    pub fn all_time_best_value(&self) -> Option<f64> {
        self.all_time.as_ref().map(|r| r.value)
    }

    fn state(&self) -> Result<&State<P::Solution>> {
        self.state
            .as_ref()
            .ok_or(SearchError::Uninitialized { engine: ENGINE })
    }
}

/// Metropolis criterion for a non-improving cost difference `delta`.
///
/// A non-finite exponent (frozen temperature, infinite or NaN delta) never
/// accepts.
fn metropolis<R: Rng>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    if temperature <= 0.0 {
        return false;
    }
    let exponent = -delta / temperature;
    if !exponent.is_finite() {
        return false;
    }
    rng.random::<f64>() < exponent.exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Neighbor;
    use crate::random::shuffle;
    use crate::sa::CoolingSchedule;

    // ---- Quadratic minimization: f(x) = x^2, minimum at 0 ----

    struct QuadraticProblem {
        sign: f64,
    }

    impl Problem for QuadraticProblem {
        type Solution = f64;
        type Move = ();

        fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<f64> {
            Ok(rng.random_range(-10.0..10.0))
        }

        fn neighbor<R: Rng>(&self, x: &f64, rng: &mut R) -> Neighbor<f64, ()> {
            Neighbor::Plain(x + rng.random_range(-1.0..1.0))
        }

        fn evaluate(&self, x: &f64) -> f64 {
            self.sign * x * x
        }
    }

    const QUADRATIC: QuadraticProblem = QuadraticProblem { sign: 1.0 };

    /// Every neighbor is one lower (or one higher with `step = 1`).
    struct Line {
        step: i64,
    }

    impl Problem for Line {
        type Solution = i64;
        type Move = ();

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Result<i64> {
            Ok(0)
        }

        fn neighbor<R: Rng>(&self, &x: &i64, _rng: &mut R) -> Neighbor<i64, ()> {
            Neighbor::Plain(x + self.step)
        }

        fn evaluate(&self, &x: &i64) -> f64 {
            x as f64
        }
    }

    #[test]
    fn test_sa_quadratic_geometric() {
        let config = SaConfig::default()
            .with_initial_temp(100.0)
            .with_final_temp(0.001)
            .with_cooling(CoolingSchedule::Geometric, 0.85)
            .with_max_iter_per_temp(50)
            .with_seed(42);

        let mut sa = SimulatedAnnealing::new(config).unwrap();
        let result = sa.run(&QUADRATIC, None, None, 1).unwrap();

        assert!(
            result.best_value < 1.0,
            "expected near-zero cost, got {}",
            result.best_value
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves > result.improving_moves);
        assert!(result.final_temperature <= 0.001);
    }

    #[test]
    fn test_sa_quadratic_linear_inverse() {
        let config = SaConfig::default()
            .with_initial_temp(100.0)
            .with_final_temp(0.01)
            .with_cooling(CoolingSchedule::LinearInverse, 1.0)
            .with_max_iter(500)
            .with_max_iter_per_temp(20)
            .with_seed(42);

        let mut sa = SimulatedAnnealing::new(config).unwrap();
        let result = sa.run(&QUADRATIC, None, None, 1).unwrap();

        assert_eq!(result.iterations, 500 * 20);
        assert!(result.best_value < 1.0, "got {}", result.best_value);
    }

    #[test]
    fn test_sa_maximize() {
        let problem = QuadraticProblem { sign: -1.0 };
        let config = SaConfig::default()
            .with_initial_temp(100.0)
            .with_final_temp(0.001)
            .with_cooling(CoolingSchedule::Geometric, 0.85)
            .with_max_iter_per_temp(50)
            .with_maximize(true)
            .with_seed(3);

        let mut sa = SimulatedAnnealing::new(config).unwrap();
        let result = sa.run(&problem, None, None, 1).unwrap();
        assert!(result.best_value > -1.0, "got {}", result.best_value);
    }

    #[test]
    fn test_linear_cooling_ends_on_final_temperature() {
        let config = SaConfig::default()
            .with_initial_temp(100.0)
            .with_final_temp(0.1)
            .with_cooling(CoolingSchedule::Linear, 0.9)
            .with_max_iter(10)
            .with_max_iter_per_temp(1)
            .with_seed(1);

        let mut sa = SimulatedAnnealing::new(config).unwrap();
        let result = sa.run(&QUADRATIC, None, None, 1).unwrap();

        assert_eq!(result.final_temperature, 0.1);
        assert_eq!(sa.temperature(), Some(0.1));
        assert_eq!(sa.iteration(), 11);
        assert_eq!(result.iterations, 10);
    }

    #[test]
    fn test_improvement_always_accepted_when_frozen() {
        let config = SaConfig::default()
            .with_initial_temp(1e-9)
            .with_final_temp(1e-10)
            .with_seed(5);
        let problem = Line { step: -1 };

        let mut sa = SimulatedAnnealing::new(config).unwrap();
        sa.init(Some(&problem), None, None).unwrap();
        for _ in 0..5 {
            assert!(sa.annealing_step().unwrap().is_continue());
        }
        assert_eq!(sa.current_value(), Some(-5.0));
        assert_eq!(sa.best_solution(), Some(&-5));
    }

    #[test]
    fn test_worsening_rejected_when_frozen() {
        let config = SaConfig::default()
            .with_initial_temp(1e-300)
            .with_final_temp(1e-301)
            .with_seed(5);
        let problem = Line { step: 1 };

        let mut sa = SimulatedAnnealing::new(config).unwrap();
        sa.init(Some(&problem), None, None).unwrap();
        for _ in 0..20 {
            sa.annealing_step().unwrap();
        }
        assert_eq!(sa.current_value(), Some(0.0));
        assert_eq!(sa.best_value(), None);
    }

    #[test]
    fn test_metropolis_guards() {
        let mut rng = create_rng(Some(0));
        assert!(!metropolis(1.0, 0.0, &mut rng));
        assert!(!metropolis(f64::INFINITY, 1.0, &mut rng));
        assert!(!metropolis(f64::NAN, 1.0, &mut rng));
        assert!(!metropolis(1.0, f64::MIN_POSITIVE * 1e-10, &mut rng));
        // A zero delta is accepted with probability one.
        assert!(metropolis(0.0, 1.0, &mut rng));
    }

    #[test]
    fn test_sa_metropolis_accepts_uphill() {
        // At very high temperature, almost all moves should be accepted
        let config = SaConfig::default()
            .with_initial_temp(1e8)
            .with_final_temp(1e7)
            .with_cooling(CoolingSchedule::Geometric, 0.9)
            .with_max_iter_per_temp(1000)
            .with_seed(42);

        let mut sa = SimulatedAnnealing::new(config).unwrap();
        let result = sa.run(&QUADRATIC, None, None, 1).unwrap();

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.8,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
    }

    #[test]
    fn test_best_unset_until_first_acceptance() {
        let config = SaConfig::default().with_seed(8);
        let problem = Line { step: -1 };
        let mut sa = SimulatedAnnealing::new(config).unwrap();
        sa.init(Some(&problem), None, None).unwrap();
        assert_eq!(sa.best_value(), None);
        assert_eq!(sa.temperature(), Some(5230.0));
        sa.annealing_step().unwrap();
        assert_eq!(sa.best_value(), Some(-1.0));
    }

    #[test]
    fn test_stopping_value_breaks() {
        let config = SaConfig::default().with_seed(2);
        let problem = Line { step: -1 };
        let mut sa = SimulatedAnnealing::new(config).unwrap();
        let result = sa.run(&problem, Some(-7.0), None, 4).unwrap();

        assert!(result.stopped_early);
        assert_eq!(result.best, -7);
        assert_eq!(result.iterations, 7);
        assert_eq!(result.repetitions, 1);
        assert_eq!(sa.status(), EngineStatus::Done);
    }

    #[test]
    fn test_sa_history_non_increasing() {
        let config = SaConfig::default()
            .with_initial_temp(50.0)
            .with_final_temp(0.01)
            .with_cooling(CoolingSchedule::Geometric, 0.9)
            .with_max_iter_per_temp(100)
            .with_seed(42);

        let mut sa = SimulatedAnnealing::new(config).unwrap();
        let result = sa.run(&QUADRATIC, None, None, 3).unwrap();

        assert_eq!(result.repetitions, 3);
        for window in result.history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best value history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    // ---- Discrete: permutation sorting ----

    struct PermSortProblem {
        n: usize,
    }

    impl Problem for PermSortProblem {
        type Solution = Vec<usize>;
        type Move = (usize, usize);

        fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<Vec<usize>> {
            let mut perm: Vec<usize> = (0..self.n).collect();
            shuffle(&mut perm, rng);
            Ok(perm)
        }

        fn evaluate(&self, perm: &Vec<usize>) -> f64 {
            // Number of elements not in their correct position
            perm.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64
        }

        fn neighbor<R: Rng>(
            &self,
            perm: &Vec<usize>,
            rng: &mut R,
        ) -> Neighbor<Vec<usize>, (usize, usize)> {
            let mut next = perm.clone();
            let i = rng.random_range(0..self.n);
            let j = rng.random_range(0..self.n);
            next.swap(i, j);
            Neighbor::WithMove(next, (i, j))
        }
    }

    #[test]
    fn test_sa_permutation_sort() {
        let problem = PermSortProblem { n: 10 };
        let config = SaConfig::default()
            .with_initial_temp(50.0)
            .with_final_temp(0.01)
            .with_cooling(CoolingSchedule::Geometric, 0.9)
            .with_max_iter_per_temp(200)
            .with_seed(42);

        let mut sa = SimulatedAnnealing::new(config).unwrap();
        let result = sa.run(&problem, None, None, 1).unwrap();

        assert!(
            result.best_value <= 4.0,
            "expected near-sorted permutation, got cost {}",
            result.best_value
        );
    }

    /// Every neighbor is one step right and costs the same.
    struct Flat;

    impl Problem for Flat {
        type Solution = i64;
        type Move = ();

        fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Result<i64> {
            Ok(0)
        }

        fn neighbor<R: Rng>(&self, &x: &i64, _rng: &mut R) -> Neighbor<i64, ()> {
            Neighbor::Plain(x + 1)
        }

        fn evaluate(&self, _x: &i64) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_repetition_restarts_near_its_predecessor_best() {
        let config = SaConfig::default()
            .with_max_iter(1)
            .with_max_iter_per_temp(1)
            .with_seed(6);
        let mut sa = SimulatedAnnealing::new(config).unwrap();
        let result = sa.run(&Flat, None, None, 3).unwrap();

        // Repetition bests are 1, 3 and 5; only the first is kept as the
        // all-time record because later ones are not strictly better.
        assert_eq!(result.repetitions, 3);
        assert_eq!(sa.current_solution(), Some(&5));
        assert_eq!(result.best, 1);
        assert_eq!(result.accepted_moves, 3);
    }

    #[test]
    fn test_repetitions_keep_all_time_best() {
        let problem = PermSortProblem { n: 12 };
        let config = SaConfig::default()
            .with_initial_temp(20.0)
            .with_final_temp(0.5)
            .with_cooling(CoolingSchedule::Geometric, 0.8)
            .with_max_iter_per_temp(5)
            .with_seed(11);

        let single = SimulatedAnnealing::new(config.clone())
            .unwrap()
            .run(&problem, None, None, 1)
            .unwrap();

        let mut sa = SimulatedAnnealing::new(config).unwrap();
        let repeated = sa.run(&problem, None, None, 3).unwrap();

        assert_eq!(repeated.repetitions, 3);
        assert!(repeated.best_value <= single.best_value);
        assert_eq!(sa.best_value(), Some(repeated.best_value));
        assert_eq!(sa.all_time_best_value(), Some(repeated.best_value));
        assert_eq!(problem.evaluate(&repeated.best), repeated.best_value);
    }

    #[test]
    fn test_verbose_run_matches_quiet_run() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("u_localsearch=trace")
            .with_test_writer()
            .try_init();

        let config = SaConfig::default()
            .with_initial_temp(10.0)
            .with_final_temp(1.0)
            .with_cooling(CoolingSchedule::Geometric, 0.8)
            .with_max_iter_per_temp(3)
            .with_seed(4);
        let quiet = SimulatedAnnealing::new(config.clone())
            .unwrap()
            .run(&QUADRATIC, None, None, 2)
            .unwrap();
        let loud = SimulatedAnnealing::new(config.with_verbosity(3))
            .unwrap()
            .run(&QUADRATIC, None, None, 2)
            .unwrap();

        assert_eq!(quiet.best, loud.best);
        assert_eq!(quiet.history, loud.history);
    }

    // ---- Lifecycle and errors ----

    #[test]
    fn test_step_before_init_fails() {
        let mut sa: SimulatedAnnealing<'_, Line> =
            SimulatedAnnealing::new(SaConfig::default()).unwrap();
        assert_eq!(
            sa.annealing_step().unwrap_err(),
            SearchError::Uninitialized {
                engine: "SimulatedAnnealing"
            }
        );
        assert!(sa.cool().is_err());
        assert!(!sa.is_hot());
    }

    #[test]
    fn test_invalid_alpha_fails_construction() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric, 0.95);
        let result: Result<SimulatedAnnealing<'_, Line>> = SimulatedAnnealing::new(config);
        assert!(matches!(result, Err(SearchError::InvalidConfig(_))));
    }
}

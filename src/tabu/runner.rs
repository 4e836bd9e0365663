//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Bind the problem and build (or accept) a starting solution
//! 2. At each iteration:
//!    a. Sample `neighbor_size` distinct neighbors of the current solution
//!    b. Drop tabu candidates unless they aspirate (improve on the current
//!       value while their remaining tenure is below `aspiration_limit`)
//!    c. Move to the best surviving candidate, even if it is worse
//!    d. Age the tabu list and forbid the accepted move for `tabu_tenure`
//! 3. Repeat for `max_iter` iterations per repetition; each repetition
//!    restarts from the best solution of the previous one
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search - Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search - Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, info, warn};

use super::config::TabuConfig;
use super::memory::{FrequencyMemory, TabuKey, TabuList};
use crate::error::{Result, SearchError};
use crate::identity::{Identify, SolutionId};
use crate::problem::Problem;
use crate::random::{create_rng, SearchRng};
use crate::status::{EngineStatus, Record};

const ENGINE: &str = "TabuSearch";

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S> {
    /// Best solution found across all repetitions.
    pub best: S,
    /// Objective value of the best solution.
    pub best_value: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration (within its repetition) at which the best was found.
    pub best_iteration: usize,
    /// Repetitions actually run.
    pub repetitions: usize,
    /// Whether the stopping value was reached.
    pub stopped_early: bool,
    /// Best value of the running repetition after each iteration.
    pub history: Vec<f64>,
}

struct State<S, M> {
    current: S,
    current_value: f64,
    best: S,
    best_value: f64,
    best_iteration: usize,
    iteration: usize,
    tabu: TabuList<TabuKey<M>>,
    longterm: FrequencyMemory<TabuKey<M>>,
}

struct Candidate<S, M> {
    solution: S,
    value: f64,
    key: TabuKey<M>,
}

/// Tabu Search engine.
///
/// Can be driven to completion with [`run`](Self::run), or step by step with
/// [`init`](Self::init) followed by repeated [`step`](Self::step) calls.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_localsearch::tabu::{TabuConfig, TabuSearch};
/// use u_localsearch::{Neighbor, Problem, Result};
///
/// struct Quadratic;
///
/// impl Problem for Quadratic {
///     type Solution = i32;
///     type Move = i32;
///
///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Result<i32> {
///         Ok(-20)
///     }
///
///     fn neighbor<R: Rng>(&self, &x: &i32, rng: &mut R) -> Neighbor<i32, i32> {
///         let next = if rng.random_bool(0.5) { x + 1 } else { x - 1 };
///         Neighbor::WithMove(next, next)
///     }
///
///     fn evaluate(&self, &x: &i32) -> f64 {
///         ((x - 5) * (x - 5)) as f64
///     }
/// }
///
/// let config = TabuConfig::default()
///     .with_max_iter(100)
///     .with_tabu_tenure(3)
///     .with_neighbor_size(2)
///     .with_seed(42);
/// let mut ts = TabuSearch::new(config).unwrap();
/// let result = ts.run(&Quadratic, Some(0.0), None, 1).unwrap();
/// assert_eq!(result.best, 5);
/// ```
pub struct TabuSearch<'p, P: Problem> {
    config: TabuConfig,
    rng: SearchRng,
    problem: Option<&'p P>,
    stopping_value: Option<f64>,
    state: Option<State<P::Solution, P::Move>>,
    all_time: Option<Record<P::Solution>>,
    status: EngineStatus,
}

impl<'p, P> TabuSearch<'p, P>
where
    P: Problem,
    P::Solution: Identify,
{
    /// Creates an engine, validating `config`.
    pub fn new(config: TabuConfig) -> Result<Self> {
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

    /// (Re)initializes the search.
    ///
    /// Binds `problem` if given, otherwise reuses the previously bound one.
    /// Starts from `initial_solution` if given, otherwise from the problem's
    /// own initial solution. Resets the iteration counter, the tabu list and
    /// the long-term memory.
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
            best: current.clone(),
            best_value: current_value,
            current,
            current_value,
            best_iteration: 0,
            iteration: 1,
            tabu: TabuList::new(),
            longterm: FrequencyMemory::new(),
        });
        self.status = EngineStatus::Ready;

        if self.config.verbosity.lifecycle() {
            info!(current_value, "tabu search initialized");
        }
        Ok(())
    }

    /// Performs one iteration.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Uninitialized`] if [`init`](Self::init) was never called
    /// - [`SearchError::SearchSpaceExhausted`] if `max_failed_rounds`
    ///   consecutive neighborhoods had no admissible candidate
    /// - [`SearchError::UnresolvedHashing`] if a neighbor has no identity
    pub fn step(&mut self) -> Result<()> {
        let problem = self
            .problem
            .ok_or(SearchError::Uninitialized { engine: ENGINE })?;
        let state = self
            .state
            .as_mut()
            .ok_or(SearchError::Uninitialized { engine: ENGINE })?;
        let config = &self.config;

        let mut failed_rounds = 0;
        let chosen = loop {
            if let Some(candidate) = select_candidate(problem, config, state, &mut self.rng)? {
                break candidate;
            }
            failed_rounds += 1;
            if failed_rounds >= config.max_failed_rounds {
                warn!(
                    iteration = state.iteration,
                    best_value = state.best_value,
                    best_iteration = state.best_iteration,
                    tabu_len = state.tabu.len(),
                    "no admissible candidate left, search space is too narrow"
                );
                return Err(SearchError::SearchSpaceExhausted {
                    iteration: state.iteration,
                    best_value: state.best_value,
                    tabu_len: state.tabu.len(),
                    rounds: failed_rounds,
                });
            }
        };

        let Candidate {
            solution,
            value,
            key,
        } = chosen;

        if config.objective().is_better(value, state.best_value) {
            state.best = solution.clone();
            state.best_value = value;
            state.best_iteration = state.iteration;
        }
        state.current = solution;
        state.current_value = value;

        state.tabu.tick();
        if config.use_longterm {
            state.longterm.record(key.clone());
        }
        state.tabu.insert(key, config.tabu_tenure);

        if config.verbosity.iterations() {
            debug!(
                iteration = state.iteration,
                current_value = state.current_value,
                best_value = state.best_value,
                best_iteration = state.best_iteration,
                "tabu step"
            );
        }
        state.iteration += 1;
        self.status = EngineStatus::Searching;
        Ok(())
    }

    /// Runs the search to completion.
    ///
    /// Each of the `repetitions` (at least one) runs up to `max_iter`
    /// iterations; the next repetition restarts from the best solution of
    /// the previous one. The run ends early once the best value equals
    /// `stopping_value`. Afterwards the engine's best is the all-time best.
    pub fn run(
        &mut self,
        problem: &'p P,
        stopping_value: Option<f64>,
        initial_solution: Option<P::Solution>,
        repetitions: usize,
    ) -> Result<TabuResult<P::Solution>> {
        let repetitions = repetitions.max(1);
        let objective = self.config.objective();
        self.all_time = None;
        self.init(Some(problem), stopping_value, initial_solution)?;

        let mut history = Vec::with_capacity(self.config.max_iter);
        let mut iterations = 0;
        let mut completed = 0;
        let mut stopped_early = false;

        for rep in 0..repetitions {
            for _ in 0..self.config.max_iter {
                self.step()?;
                iterations += 1;
                history.push(self.state()?.best_value);

                if self.reached_stopping_value() {
                    stopped_early = true;
                    if self.config.verbosity.lifecycle() {
                        let state = self.state()?;
                        info!(
                            iteration = state.iteration - 1,
                            best_value = state.best_value,
                            best_iteration = state.best_iteration,
                            "stopping value reached"
                        );
                    }
                    break;
                }
            }
            completed += 1;

            let state = self.state()?;
            let record = Record {
                solution: state.best.clone(),
                value: state.best_value,
                iteration: state.best_iteration,
            };
            if self.config.verbosity.lifecycle() {
                info!(
                    repetition = rep + 1,
                    best_value = record.value,
                    best_iteration = record.iteration,
                    "repetition finished"
                );
            }
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
            let restart = self.state()?.best.clone();
            self.init(None, stopping_value, Some(restart))?;
        }

        let record = self
            .all_time
            .clone()
            .ok_or(SearchError::Uninitialized { engine: ENGINE })?;
        if let Some(state) = self.state.as_mut() {
            state.best = record.solution.clone();
            state.best_value = record.value;
            state.best_iteration = record.iteration;
        }
        self.status = EngineStatus::Done;

        if self.config.verbosity.lifecycle() {
            info!(
                iterations,
                repetitions = completed,
                best_value = record.value,
                best_iteration = record.iteration,
                "tabu search done"
            );
        }

        Ok(TabuResult {
            best: record.solution,
            best_value: record.value,
            iterations,
            best_iteration: record.iteration,
            repetitions: completed,
            stopped_early,
            history,
        })
    }

    /// Whether the current best equals the stopping value.
    pub fn reached_stopping_value(&self) -> bool {
        match (&self.state, self.stopping_value) {
            (Some(state), Some(target)) => state.best_value == target,
            _ => false,
        }
    }

    /// The configuration.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Lifecycle status.
    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// Number of the next iteration (1 right after init).
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

    /// Best solution of the current repetition, or the all-time best after
    /// [`run`](Self::run).
    pub fn best_solution(&self) -> Option<&P::Solution> {
        self.state.as_ref().map(|s| &s.best)
    }

    /// Objective value of [`best_solution`](Self::best_solution).
    pub fn best_value(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.best_value)
    }

    /// Iteration at which [`best_solution`](Self::best_solution) was found.
    pub fn best_iteration(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.best_iteration)
    }

    /// Best value across the repetitions finished so far.
    pub fn all_time_best_value(&self) -> Option<f64> {
        self.all_time.as_ref().map(|r| r.value)
    }

    /// Short-term memory.
    pub fn tabu_list(&self) -> Option<&TabuList<TabuKey<P::Move>>> {
        self.state.as_ref().map(|s| &s.tabu)
    }

    /// Long-term memory (empty unless `use_longterm`).
    pub fn longterm(&self) -> Option<&FrequencyMemory<TabuKey<P::Move>>> {
        self.state.as_ref().map(|s| &s.longterm)
    }

    fn state(&self) -> Result<&State<P::Solution, P::Move>> {
        self.state
            .as_ref()
            .ok_or(SearchError::Uninitialized { engine: ENGINE })
    }
}

/// Whether a candidate with the given remaining tenure may be selected.
fn is_admissible(
    config: &TabuConfig,
    remaining_tenure: Option<usize>,
    value: f64,
    current_value: f64,
) -> bool {
    match remaining_tenure {
        None => true,
        Some(tenure) => {
            config.use_aspiration
                && config.objective().is_better(value, current_value)
                && tenure < config.aspiration_limit()
        }
    }
}

/// Samples one neighborhood and returns its best admissible candidate.
fn select_candidate<P, R>(
    problem: &P,
    config: &TabuConfig,
    state: &State<P::Solution, P::Move>,
    rng: &mut R,
) -> Result<Option<Candidate<P::Solution, P::Move>>>
where
    P: Problem,
    P::Solution: Identify,
    R: Rng,
{
    let objective = config.objective();

    let mut seen: HashSet<SolutionId> = HashSet::with_capacity(config.neighbor_size);
    let mut pool = Vec::with_capacity(config.neighbor_size);
    let mut attempts = 0;
    while pool.len() < config.neighbor_size && attempts < config.sampling_attempts() {
        attempts += 1;
        let (solution, mv) = problem.neighbor(&state.current, rng).into_parts();
        let id = SolutionId::of(&solution)?;
        if seen.contains(&id) {
            continue;
        }
        seen.insert(id.clone());
        let key = match mv {
            Some(m) => TabuKey::Move(m),
            None => TabuKey::Solution(id),
        };
        let value = problem.evaluate(&solution);
        pool.push(Candidate {
            solution,
            value,
            key,
        });
    }

    let mut best: Option<(Candidate<P::Solution, P::Move>, f64)> = None;
    for candidate in pool {
        let remaining = state.tabu.remaining(&candidate.key);
        if !is_admissible(config, remaining, candidate.value, state.current_value) {
            continue;
        }

        let delta = candidate.value - state.current_value;
        let score = match &candidate.key {
            TabuKey::Move(m) if config.penalize => problem.penalized_delta(delta, m, remaining),
            _ => delta,
        };

        if config.use_longterm {
            if let Some(freq) = state.longterm.frequency(&candidate.key) {
                if rng.random::<f64>() < freq {
                    continue;
                }
            }
        }

        if best
            .as_ref()
            .is_none_or(|(_, best_score)| objective.is_better(score, *best_score))
        {
            best = Some((candidate, score));
        }
    }

    Ok(best.map(|(candidate, _)| candidate))
}

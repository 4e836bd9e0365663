//! Engine lifecycle.

/// Where an engine is in its lifecycle.
///
/// `Uninitialized → Ready → Searching → (Repeating → Ready …) → Done`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineStatus {
    /// No problem bound yet.
    #[default]
    Uninitialized,
    /// Initialized, no step taken since.
    Ready,
    /// At least one step taken.
    Searching,
    /// Between repetitions of a multi-restart run.
    Repeating,
    /// A run finished and the all-time best has been restored.
    Done,
}

/// Best solution of a repetition or of a whole run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Record<S> {
    pub(crate) solution: S,
    pub(crate) value: f64,
    pub(crate) iteration: usize,
}

//! Diagnostic verbosity.
//!
//! The engines emit `tracing` events; a [`Verbosity`] level decides which
//! of them are produced at all, independent of the subscriber's filter.
//!
//! | level | events |
//! |---|---|
//! | 0 | none (search-space exhaustion is still reported) |
//! | 1 | init, per-repetition summary, stopping value, completion (`info`) |
//! | 2 | one per iteration (`debug`) |
//! | 3 | one per annealing inner step (`trace`) |

/// Verbosity level in `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Verbosity(u8);

impl Verbosity {
    /// No lifecycle output.
    pub const QUIET: Verbosity = Verbosity(0);
    /// Run lifecycle events.
    pub const LIFECYCLE: Verbosity = Verbosity(1);
    /// Plus one line per iteration.
    pub const ITERATION: Verbosity = Verbosity(2);
    /// Plus one line per inner step.
    pub const STEP: Verbosity = Verbosity(3);

    /// Creates a level, saturating at 3.
    pub fn new(level: u8) -> Self {
        Verbosity(level.min(3))
    }

    /// Numeric level.
    pub fn level(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) fn lifecycle(self) -> bool {
        self >= Self::LIFECYCLE
    }

    #[inline]
    pub(crate) fn iterations(self) -> bool {
        self >= Self::ITERATION
    }

    #[inline]
    pub(crate) fn steps(self) -> bool {
        self >= Self::STEP
    }
}

impl From<u8> for Verbosity {
    fn from(level: u8) -> Self {
        Verbosity::new(level)
    }
}

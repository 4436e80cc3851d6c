//! Guard predicates for gating inputs by phase.
//!
//! Guards are pure boolean functions that decide whether an input may
//! change the machine while it sits in a given phase.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Pure predicate that determines if an input may act on a phase.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Guard, Phase, State};
///
/// let not_failed = Guard::new(|phase: &Phase| !phase.is_error());
///
/// assert!(not_failed.check(&Phase::Idle));
/// assert!(not_failed.check(&Phase::AwaitingOperand));
/// assert!(!not_failed.check(&Phase::Error));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that admits every phase except error phases.
    pub fn not_error() -> Self {
        Self::new(|state: &S| !state.is_error())
    }

    /// Check if the guard admits this phase.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    #[test]
    fn guard_allows_matching_phases() {
        let guard = Guard::new(|p: &Phase| matches!(p, Phase::Idle));

        assert!(guard.check(&Phase::Idle));
        assert!(!guard.check(&Phase::AwaitingOperand));
    }

    #[test]
    fn not_error_blocks_only_error_phase() {
        let guard = Guard::<Phase>::not_error();

        assert!(guard.check(&Phase::Idle));
        assert!(guard.check(&Phase::AwaitingOperand));
        assert!(!guard.check(&Phase::Error));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::<Phase>::not_error();

        assert_eq!(guard.check(&Phase::Error), guard.check(&Phase::Error));
    }
}

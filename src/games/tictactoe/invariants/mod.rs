//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and testable on their own.

use crate::session::GameSession;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

pub mod alternating_turn;
pub mod monotonic_board;
pub mod outcome_current;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use outcome_current::OutcomeCurrentInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    OutcomeCurrentInvariant,
);

/// Asserts that all session invariants hold (debug builds only).
#[instrument(skip(session))]
pub fn assert_invariants(session: &GameSession) {
    if cfg!(debug_assertions)
        && let Err(violations) = SessionInvariants::check_all(session)
    {
        for v in &violations {
            warn!(description = %v.description, "Session invariant violated");
        }
        panic!("Session invariants violated: {violations:?}");
    }
}

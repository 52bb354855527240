//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions on lifecycle enums such as the canvas stage gate.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for CanvasState {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!(
///             (self, target),
///             (Stage1Active, Stage2Active) | (Stage2Active, Stage3Active) // ...
///         )
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Stage1Active => vec![Stage2Active],
///             // ...
///         }
///     }
/// }
///
/// let next = CanvasState::Stage1Active.transition_to(CanvasState::Stage2Active)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Wizard {
        Intro,
        Editing,
        Done,
    }

    impl StateMachine for Wizard {
        fn can_transition_to(&self, target: &Self) -> bool {
            use Wizard::*;
            matches!((self, target), (Intro, Editing) | (Editing, Done))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Wizard::*;
            match self {
                Intro => vec![Editing],
                Editing => vec![Done],
                Done => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Wizard::Intro.transition_to(Wizard::Editing), Ok(Wizard::Editing));
    }

    #[test]
    fn transition_to_fails_for_skipped_step() {
        let result = Wizard::Intro.transition_to(Wizard::Done);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn is_terminal_only_for_done() {
        assert!(Wizard::Done.is_terminal());
        assert!(!Wizard::Intro.is_terminal());
        assert!(!Wizard::Editing.is_terminal());
    }
}

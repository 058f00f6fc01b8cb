//! Session state machine.

use std::fmt;

use crate::error::SessionError;

/// Where a care session currently is.
///
/// Valid transitions:
///
/// ```text
/// select_species -> select_action
/// select_action  -> await_continue
/// await_continue -> select_action   ("yes")
/// await_continue -> terminated      ("no")
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    SelectSpecies,
    SelectAction,
    AwaitContinue,
    Terminated,
}

impl SessionPhase {
    /// Check whether `from -> to` is an edge in the session graph.
    pub fn is_valid_transition(from: SessionPhase, to: SessionPhase) -> bool {
        matches!(
            (from, to),
            (SessionPhase::SelectSpecies, SessionPhase::SelectAction)
                | (SessionPhase::SelectAction, SessionPhase::AwaitContinue)
                | (SessionPhase::AwaitContinue, SessionPhase::SelectAction)
                | (SessionPhase::AwaitContinue, SessionPhase::Terminated)
        )
    }

    /// Move to `to`, rejecting edges outside the graph.
    pub fn advance(&mut self, to: SessionPhase) -> Result<(), SessionError> {
        if !Self::is_valid_transition(*self, to) {
            return Err(SessionError::InvalidTransition { from: *self, to });
        }
        tracing::debug!(from = %self, to = %to, "session transition");
        *self = to;
        Ok(())
    }

    pub fn is_terminal(self) -> bool {
        self == SessionPhase::Terminated
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::SelectSpecies => "select_species",
            Self::SelectAction => "select_action",
            Self::AwaitContinue => "await_continue",
            Self::Terminated => "terminated",
        };
        f.write_str(s)
    }
}

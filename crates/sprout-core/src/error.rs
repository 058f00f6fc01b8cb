use crate::session::SessionPhase;

/// Errors that can end a care session early.
///
/// Invalid user input is never an error: it is reported on the console and
/// the same question is asked again.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed while waiting for an answer to {prompt:?}")]
    InputClosed { prompt: String },

    #[error("console I/O failed")]
    Io(#[from] std::io::Error),

    #[error("invalid session transition: {from} -> {to}")]
    InvalidTransition { from: SessionPhase, to: SessionPhase },
}

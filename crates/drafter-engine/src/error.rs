//! Engine errors
//!
//! None of these are fatal: the router surfaces each one as a timeline
//! diagnostic and a log warning, and the pending-command state machine is
//! left exactly where it was.

use thiserror::Error;

use drafter_core::CoordError;

/// A rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// Name dispatch miss while no command was pending
    #[error("Invalid command: '{0}'")]
    UnknownCommand(String),

    /// Coordinate expression rejected by the pending shape
    #[error("Invalid coordinate input: '{input}'")]
    InvalidCoordinateSyntax {
        input: String,
        #[source]
        source: CoordError,
    },

    /// Input of the wrong kind for what the pending command awaits
    #[error("Unexpected input for '{command}': {detail}")]
    UnexpectedInputForState {
        command: &'static str,
        detail: String,
    },
}

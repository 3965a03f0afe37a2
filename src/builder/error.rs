//! Build errors for machine construction.

use thiserror::Error;

use crate::engine::MachineError;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No states declared. Add at least one state before .build()")]
    NoStates,

    #[error(transparent)]
    Machine(#[from] MachineError),
}

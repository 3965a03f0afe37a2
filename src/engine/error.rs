//! Errors surfaced by the registry and the machine.
//!
//! Everything here is a programmer error in the sense of the engine's
//! contract: there is no retry policy and nothing is recoverable by the
//! engine itself. Errors exist to fail loudly instead of masking misuse.

use thiserror::Error;

/// Errors from name registration and lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a state named `{0}` is already registered")]
    DuplicateName(String),

    #[error("no state named `{0}` is registered")]
    NotFound(String),
}

/// Errors from machine lifecycle calls and hook-side operations.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("states can only be registered before `initialise_all` runs")]
    RegistrationClosed,

    #[error("`initialise_all` has already run; it must be called exactly once")]
    AlreadyInitialised,

    #[error("`initialise_all` must run before the starting state is set")]
    NotInitialised,

    #[error("the starting state has already been set; it must be set exactly once")]
    AlreadyStarted,

    #[error("the machine has no starting state; call `set_starting_state` before ticking")]
    NotStarted,

    #[error("`add_child` may only be called from `initialise_children`")]
    WiringOutsideInitialise,

    #[error("`enter_child` may only be called from `enter_child_state`")]
    ChildSelectionOutsideEntry,

    #[error("`switch_state` may only be called from `check_switch_states`")]
    SwitchOutsideCheck,

    #[error("state `{state}` requested a second switch in the same tick")]
    DoubleSwitch { state: String },

    #[error("state `{state}` cannot declare itself as a child")]
    SelfChild { state: String },

    #[error("state `{child}` is already a declared child of `{parent}`")]
    DuplicateChild { parent: String, child: String },

    #[error("state `{child}` already belongs to parent `{parent}`; children form a strict tree")]
    ChildAlreadyClaimed { parent: String, child: String },

    #[error("state `{child}` is not a declared child of `{parent}`")]
    NotAChild { parent: String, child: String },

    #[error("a hook was dispatched re-entrantly on state `{state}`")]
    ReentrantHook { state: String },
}

//! Core behavior contract.
//!
//! This module defines what a state *is* from the engine's point of view:
//! - The seven lifecycle hooks, via the [`StateBehavior`] trait
//! - The [`StateId`] handle addressing states inside a machine
//! - The [`StateContext`] view hooks use to inspect and mutate the tree
//!
//! The cascade logic that drives these hooks lives in [`crate::engine`].

pub(crate) mod context;
pub(crate) mod state;

pub use context::StateContext;
pub use state::{StateBehavior, StateId};

//! Builder API for ergonomic machine construction.
//!
//! [`MachineBuilder`] folds the register-then-initialise setup sequence
//! into one fluent call chain, so the one-shot ordering contract of
//! [`Machine::initialise_all`](crate::Machine::initialise_all) cannot be
//! gotten wrong.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::MachineBuilder;

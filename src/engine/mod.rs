//! The machine runtime: arena storage, name registry, and tick cascades.
//!
//! Everything here is synchronous and single-threaded per machine. A
//! cascade is a plain depth-first traversal bounded by tree depth; there is
//! no suspension, no blocking, and no retry policy anywhere.

pub(crate) mod arena;
pub mod error;
pub mod machine;
pub mod registry;

pub use error::{MachineError, RegistryError};
pub use machine::Machine;
pub use registry::Registry;

//! Name-to-state lookup table.

use std::collections::HashMap;

use crate::core::state::StateId;
use crate::engine::error::RegistryError;

/// The named collection of states belonging to one machine.
///
/// Maps stable string identifiers to state handles and remembers the order
/// states were registered in. Mutated only during setup; read afterward by
/// name lookups during transitions.
pub struct Registry {
    by_name: HashMap<String, StateId>,
    order: Vec<StateId>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            by_name: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register a state under `name`.
    ///
    /// Duplicate names are a programmer error, surfaced as
    /// [`RegistryError::DuplicateName`] - never a silent overwrite.
    pub(crate) fn add(&mut self, name: &str, id: StateId) -> Result<(), RegistryError> {
        if self.by_name.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        self.by_name.insert(name.to_string(), id);
        self.order.push(id);
        Ok(())
    }

    /// Resolve `name` to its state handle.
    ///
    /// Fails with [`RegistryError::NotFound`] for unregistered names; the
    /// caller is never handed a default state.
    pub fn get(&self, name: &str) -> Result<StateId, RegistryError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    /// Every registered state, in registration order.
    ///
    /// This is node construction order, not tree order - the initialization
    /// pass iterates it directly.
    pub fn all_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.order.iter().copied()
    }

    /// Number of registered states.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

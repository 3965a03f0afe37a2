//! Arena storage for state nodes.
//!
//! States live in a flat `Vec` addressed by [`StateId`] indices; parent and
//! child links are index fields. Nodes are constructed once at setup time
//! and live for the lifetime of the machine - only the active links mutate
//! after initialization.

use crate::core::state::{StateBehavior, StateId};
use crate::engine::error::MachineError;

/// One state node: its registered name, behavior, and tree links.
pub(crate) struct StateNode<C> {
    name: String,
    /// Vacated while one of the node's hooks runs.
    behavior: Option<Box<dyn StateBehavior<C>>>,
    pub(crate) is_root: bool,
    /// Declaring parent, fixed during initialization (strict tree).
    pub(crate) parent: Option<StateId>,
    /// Substates this node may activate; immutable after initialization.
    pub(crate) children: Vec<StateId>,
    pub(crate) active_child: Option<StateId>,
    pub(crate) active_parent: Option<StateId>,
}

impl<C> StateNode<C> {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

pub(crate) struct StateArena<C> {
    nodes: Vec<StateNode<C>>,
}

impl<C: 'static> StateArena<C> {
    pub(crate) fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn insert(
        &mut self,
        name: String,
        behavior: Box<dyn StateBehavior<C>>,
        is_root: bool,
    ) -> StateId {
        let id = StateId(self.nodes.len());
        self.nodes.push(StateNode {
            name,
            behavior: Some(behavior),
            is_root,
            parent: None,
            children: Vec::new(),
            active_child: None,
            active_parent: None,
        });
        id
    }

    pub(crate) fn node(&self, id: StateId) -> &StateNode<C> {
        &self.nodes[id.0]
    }

    /// Remove a node's behavior so a hook can run on it while the arena
    /// stays borrowable. An already-empty slot means a hook on this node is
    /// somewhere up the call stack.
    pub(crate) fn take_behavior(
        &mut self,
        id: StateId,
    ) -> Result<Box<dyn StateBehavior<C>>, MachineError> {
        self.nodes[id.0]
            .behavior
            .take()
            .ok_or_else(|| MachineError::ReentrantHook {
                state: self.nodes[id.0].name.clone(),
            })
    }

    pub(crate) fn put_behavior(&mut self, id: StateId, behavior: Box<dyn StateBehavior<C>>) {
        self.nodes[id.0].behavior = Some(behavior);
    }

    /// Record `child` as a declared substate of `parent`. Validation happens
    /// at the context layer; this is the raw link.
    pub(crate) fn link_child(&mut self, parent: StateId, child: StateId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Point `parent` at `child` as its active substate, with the back-link.
    pub(crate) fn set_active_child(&mut self, parent: StateId, child: StateId) {
        self.nodes[parent.0].active_child = Some(child);
        self.nodes[child.0].active_parent = Some(parent);
    }
}

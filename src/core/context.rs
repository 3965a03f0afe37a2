//! Engine handle passed into behavior hooks.
//!
//! A [`StateContext`] is the only way a hook can inspect or mutate the tree
//! it lives in. Mutating operations are phase-checked: each one is legal
//! from exactly one hook, and calling it anywhere else is a loud contract
//! error rather than a silent no-op.

use crate::core::state::StateId;
use crate::engine::arena::StateArena;
use crate::engine::registry::Registry;
use crate::engine::{MachineError, RegistryError};

/// Which hook the context is currently serving.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum HookPhase {
    Initialise,
    Enter,
    EnterChild,
    Update,
    FixedUpdate,
    Exit,
    CheckSwitch,
}

/// Borrowed view of the machine handed to a state's hooks.
///
/// Read accessors work from any hook. The three mutating operations each
/// belong to one hook:
///
/// | operation | legal from |
/// |---|---|
/// | [`add_child`](Self::add_child) | `initialise_children` |
/// | [`enter_child`](Self::enter_child) | `enter_child_state` |
/// | [`switch_state`](Self::switch_state) | `check_switch_states` |
pub struct StateContext<'m, C> {
    arena: &'m mut StateArena<C>,
    registry: &'m Registry,
    id: StateId,
    phase: HookPhase,
    pending_switch: Option<StateId>,
}

impl<'m, C: 'static> StateContext<'m, C> {
    pub(crate) fn new(
        arena: &'m mut StateArena<C>,
        registry: &'m Registry,
        id: StateId,
        phase: HookPhase,
    ) -> Self {
        Self {
            arena,
            registry,
            id,
            phase,
            pending_switch: None,
        }
    }

    /// The transition recorded by `switch_state`, if any. Consumes the
    /// context so the borrow on the arena is released before the engine
    /// applies the switch.
    pub(crate) fn into_pending_switch(self) -> Option<StateId> {
        self.pending_switch
    }

    /// Handle of the state this hook is running on.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Registered name of the state this hook is running on.
    pub fn name(&self) -> &str {
        self.arena.node(self.id).name()
    }

    /// Whether this state was registered as a root candidate.
    pub fn is_root(&self) -> bool {
        self.arena.node(self.id).is_root
    }

    /// This state's currently active substate, if any.
    pub fn active_child(&self) -> Option<StateId> {
        self.arena.node(self.id).active_child
    }

    /// Registered name of any state in the machine.
    pub fn name_of(&self, id: StateId) -> &str {
        self.arena.node(id).name()
    }

    /// Resolve a registered name to its handle.
    ///
    /// Fails with [`RegistryError::NotFound`] for unregistered names; the
    /// engine never substitutes a default state.
    pub fn state(&self, name: &str) -> Result<StateId, RegistryError> {
        self.registry.get(name)
    }

    /// Declare `name` as a substate this state may activate.
    ///
    /// Legal only inside
    /// [`initialise_children`](crate::StateBehavior::initialise_children),
    /// before the tree is first entered. Children form a strict tree: a
    /// state already claimed by another parent cannot be declared again.
    ///
    /// Returns the child's handle on success.
    pub fn add_child(&mut self, name: &str) -> Result<StateId, MachineError> {
        if self.phase != HookPhase::Initialise {
            return Err(MachineError::WiringOutsideInitialise);
        }
        let child = self.registry.get(name)?;
        if child == self.id {
            return Err(MachineError::SelfChild {
                state: self.name().to_string(),
            });
        }
        if self.arena.node(self.id).children.contains(&child) {
            return Err(MachineError::DuplicateChild {
                parent: self.name().to_string(),
                child: name.to_string(),
            });
        }
        if let Some(parent) = self.arena.node(child).parent {
            return Err(MachineError::ChildAlreadyClaimed {
                parent: self.name_of(parent).to_string(),
                child: name.to_string(),
            });
        }
        self.arena.link_child(self.id, child);
        Ok(child)
    }

    /// Make `name` this state's active substate for the entry in progress.
    ///
    /// Legal only inside
    /// [`enter_child_state`](crate::StateBehavior::enter_child_state), and
    /// only for a declared child. The cascade descends into whichever child
    /// is active when the hook returns; calling this twice keeps the last
    /// selection.
    pub fn enter_child(&mut self, name: &str) -> Result<StateId, MachineError> {
        if self.phase != HookPhase::EnterChild {
            return Err(MachineError::ChildSelectionOutsideEntry);
        }
        let child = self.registry.get(name)?;
        if !self.arena.node(self.id).children.contains(&child) {
            return Err(MachineError::NotAChild {
                parent: self.name().to_string(),
                child: name.to_string(),
            });
        }
        self.arena.set_active_child(self.id, child);
        Ok(child)
    }

    /// Request a transition from this state to `name`.
    ///
    /// Legal only inside
    /// [`check_switch_states`](crate::StateBehavior::check_switch_states).
    /// The engine applies the transition as soon as the hook returns:
    /// this state's `exit_state` runs (its active descendants are *not*
    /// exited), the target chain is entered with this state as `from`, and
    /// the active-chain pointer is redirected - on the machine itself if
    /// this state is a root, otherwise on its active parent.
    ///
    /// At most one request per state per tick; a second call is a contract
    /// error.
    pub fn switch_state(&mut self, name: &str) -> Result<(), MachineError> {
        if self.phase != HookPhase::CheckSwitch {
            return Err(MachineError::SwitchOutsideCheck);
        }
        let target = self.registry.get(name)?;
        if self.pending_switch.is_some() {
            return Err(MachineError::DoubleSwitch {
                state: self.name().to_string(),
            });
        }
        self.pending_switch = Some(target);
        Ok(())
    }
}

//! The machine: registration, initialization, and the tick cascades.

use tracing::{debug, trace, warn};

use crate::core::context::{HookPhase, StateContext};
use crate::core::state::{StateBehavior, StateId};
use crate::engine::arena::StateArena;
use crate::engine::error::MachineError;
use crate::engine::registry::Registry;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum MachinePhase {
    Registering,
    Initialised,
    Started,
}

/// A hierarchical state machine for one actor.
///
/// The machine owns every state (in an arena, addressed by [`StateId`]) and
/// the [`Registry`] that names them, and holds the single pointer to the
/// currently active root chain. The host drives it through a fixed
/// lifecycle, each step checked loudly:
///
/// 1. [`add`](Self::add) / [`add_root`](Self::add_root) each behavior under
///    a stable name.
/// 2. [`initialise_all`](Self::initialise_all) exactly once, so every state
///    declares its children.
/// 3. [`set_starting_state`](Self::set_starting_state) (or
///    [`start`](Self::start)) exactly once.
/// 4. [`update_states`](Self::update_states) once per logic frame and
///    [`update_fixed_states`](Self::update_fixed_states) once per physics
///    step, for the remaining lifetime of the actor.
///
/// Machines are independent: nothing is shared between instances, and a
/// machine is single-threaded by design.
pub struct Machine<C> {
    arena: StateArena<C>,
    registry: Registry,
    current: Option<StateId>,
    phase: MachinePhase,
}

impl<C: 'static> Machine<C> {
    /// Create an empty machine with its own registry.
    pub fn new() -> Self {
        Self {
            arena: StateArena::new(),
            registry: Registry::new(),
            current: None,
            phase: MachinePhase::Registering,
        }
    }

    /// Register a behavior under `name`.
    ///
    /// Delegates to the machine's [`Registry`]; duplicate names fail without
    /// overwriting. Registration closes once
    /// [`initialise_all`](Self::initialise_all) has run.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        behavior: impl StateBehavior<C> + 'static,
    ) -> Result<StateId, MachineError> {
        self.add_boxed(name.into(), Box::new(behavior), false)
    }

    /// Register a behavior under `name` as a root candidate.
    ///
    /// Root states are addressed directly by the machine's current-state
    /// pointer; a transition issued from a root updates the machine, not a
    /// parent.
    pub fn add_root(
        &mut self,
        name: impl Into<String>,
        behavior: impl StateBehavior<C> + 'static,
    ) -> Result<StateId, MachineError> {
        self.add_boxed(name.into(), Box::new(behavior), true)
    }

    pub(crate) fn add_boxed(
        &mut self,
        name: String,
        behavior: Box<dyn StateBehavior<C>>,
        is_root: bool,
    ) -> Result<StateId, MachineError> {
        if self.phase != MachinePhase::Registering {
            return Err(MachineError::RegistrationClosed);
        }
        let id = StateId(self.arena.len());
        self.registry.add(&name, id)?;
        self.arena.insert(name, behavior, is_root);
        Ok(id)
    }

    /// Run `initialise_children` on every registered state, in registration
    /// order.
    ///
    /// Registration order is node construction order, not tree order - a
    /// state may initialise before the parent that later declares it. Must
    /// be called exactly once, after all states are registered and before
    /// the starting state is set.
    pub fn initialise_all(&mut self) -> Result<(), MachineError> {
        if self.phase != MachinePhase::Registering {
            return Err(MachineError::AlreadyInitialised);
        }
        // TODO: reject parent cycles here instead of recursing forever on
        // the first enter cascade.
        let order: Vec<StateId> = self.registry.all_states().collect();
        for id in order {
            let mut behavior = self.arena.take_behavior(id)?;
            let result = {
                let mut ctx =
                    StateContext::new(&mut self.arena, &self.registry, id, HookPhase::Initialise);
                behavior.initialise_children(&mut ctx)
            };
            self.arena.put_behavior(id, behavior);
            result?;
        }
        self.phase = MachinePhase::Initialised;
        Ok(())
    }

    /// Set the machine's current root chain and run the enter cascade with
    /// no prior state (`from = None`, the cold-start sentinel).
    ///
    /// Must be called exactly once, after
    /// [`initialise_all`](Self::initialise_all). The root flag of `state`
    /// is not validated at runtime (matching the transition protocol's
    /// permissiveness), but a debug assertion catches misuse in testing.
    pub fn set_starting_state(&mut self, world: &mut C, state: StateId) -> Result<(), MachineError> {
        match self.phase {
            MachinePhase::Registering => return Err(MachineError::NotInitialised),
            MachinePhase::Started => return Err(MachineError::AlreadyStarted),
            MachinePhase::Initialised => {}
        }
        debug_assert!(
            self.arena.node(state).is_root,
            "starting state `{}` was not registered as a root state",
            self.arena.node(state).name()
        );
        debug!("machine starting at `{}`", self.arena.node(state).name());
        self.current = Some(state);
        self.enter_chain(world, state, None)?;
        self.phase = MachinePhase::Started;
        Ok(())
    }

    /// Look up `name` in the registry and make it the starting state.
    pub fn start(&mut self, world: &mut C, name: &str) -> Result<(), MachineError> {
        let state = self.registry.get(name)?;
        self.set_starting_state(world, state)
    }

    /// Tick the active chain for one logic frame.
    ///
    /// Cascade order per node: `update_state` on the node, the full update
    /// of its active child subtree, then `check_switch_states` on the node,
    /// so a parent evaluates its transitions only after its descendants have
    /// already updated (and possibly switched) this tick.
    pub fn update_states(&mut self, world: &mut C) -> Result<(), MachineError> {
        let root = self.current.ok_or(MachineError::NotStarted)?;
        self.update_chain(world, root)
    }

    /// Tick the active chain for one fixed timestep.
    ///
    /// Same shape as [`update_states`](Self::update_states) minus the
    /// switch checks; fixed ticks never trigger transitions.
    pub fn update_fixed_states(&mut self, world: &mut C) -> Result<(), MachineError> {
        let root = self.current.ok_or(MachineError::NotStarted)?;
        self.fixed_chain(world, root)
    }

    /// The active root state, or `None` before startup.
    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    /// Whether the starting state has been set.
    pub fn is_started(&self) -> bool {
        self.phase == MachinePhase::Started
    }

    /// Read access to the machine's registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registered name of a state.
    pub fn name_of(&self, id: StateId) -> &str {
        self.arena.node(id).name()
    }

    /// The substates a state declared during initialization.
    pub fn children_of(&self, id: StateId) -> &[StateId] {
        &self.arena.node(id).children
    }

    /// A state's currently active substate, if any.
    pub fn active_child_of(&self, id: StateId) -> Option<StateId> {
        self.arena.node(id).active_child
    }

    /// The state currently owning `id` as its active child, if any.
    pub fn active_parent_of(&self, id: StateId) -> Option<StateId> {
        self.arena.node(id).active_parent
    }

    /// The active chain from the current root down to its deepest active
    /// descendant. Empty before startup.
    pub fn active_path(&self) -> Vec<StateId> {
        let mut path = Vec::new();
        let mut cursor = self.current;
        while let Some(id) = cursor {
            path.push(id);
            cursor = self.arena.node(id).active_child;
        }
        path
    }

    /// Enter cascade: `enter_state`, then `enter_child_state`, then descend
    /// into whichever child is now active, carrying the original `from`
    /// unchanged down the whole chain.
    ///
    /// A child link left over from a previous activation counts: if
    /// `enter_child_state` selects nothing, the stale child is re-entered,
    /// exactly as the original protocol behaves.
    fn enter_chain(
        &mut self,
        world: &mut C,
        id: StateId,
        from: Option<StateId>,
    ) -> Result<(), MachineError> {
        trace!("entering `{}`", self.arena.node(id).name());
        let mut behavior = self.arena.take_behavior(id)?;
        {
            let ctx = StateContext::new(&mut self.arena, &self.registry, id, HookPhase::Enter);
            behavior.enter_state(world, &ctx, from);
        }
        let result = {
            let mut ctx =
                StateContext::new(&mut self.arena, &self.registry, id, HookPhase::EnterChild);
            behavior.enter_child_state(world, &mut ctx)
        };
        self.arena.put_behavior(id, behavior);
        result?;

        if let Some(child) = self.arena.node(id).active_child {
            self.enter_chain(world, child, from)?;
        }
        Ok(())
    }

    fn update_chain(&mut self, world: &mut C, id: StateId) -> Result<(), MachineError> {
        let mut behavior = self.arena.take_behavior(id)?;
        {
            let ctx = StateContext::new(&mut self.arena, &self.registry, id, HookPhase::Update);
            behavior.update_state(world, &ctx);
        }
        self.arena.put_behavior(id, behavior);

        if let Some(child) = self.arena.node(id).active_child {
            self.update_chain(world, child)?;
        }

        let mut behavior = self.arena.take_behavior(id)?;
        let mut ctx =
            StateContext::new(&mut self.arena, &self.registry, id, HookPhase::CheckSwitch);
        let result = behavior.check_switch_states(world, &mut ctx);
        let pending = ctx.into_pending_switch();
        self.arena.put_behavior(id, behavior);
        result?;

        if let Some(target) = pending {
            self.perform_switch(world, id, target)?;
        }
        Ok(())
    }

    fn fixed_chain(&mut self, world: &mut C, id: StateId) -> Result<(), MachineError> {
        let mut behavior = self.arena.take_behavior(id)?;
        {
            let ctx =
                StateContext::new(&mut self.arena, &self.registry, id, HookPhase::FixedUpdate);
            behavior.update_fixed_state(world, &ctx);
        }
        self.arena.put_behavior(id, behavior);

        if let Some(child) = self.arena.node(id).active_child {
            self.fixed_chain(world, child)?;
        }
        Ok(())
    }

    /// Apply a transition recorded during `check_switch_states`.
    ///
    /// Protocol, in order: exit the switching state (and only it - active
    /// descendants are not exited), run the full enter cascade into the
    /// target with the switching state as `from`, then redirect the chain
    /// pointer: the machine's own pointer for a root, otherwise the active
    /// parent's child link.
    fn perform_switch(
        &mut self,
        world: &mut C,
        from: StateId,
        target: StateId,
    ) -> Result<(), MachineError> {
        debug!(
            "switching `{}` -> `{}`",
            self.arena.node(from).name(),
            self.arena.node(target).name()
        );

        let mut behavior = self.arena.take_behavior(from)?;
        {
            let ctx = StateContext::new(&mut self.arena, &self.registry, from, HookPhase::Exit);
            behavior.exit_state(world, &ctx);
        }
        self.arena.put_behavior(from, behavior);
        trace!("exited `{}`", self.arena.node(from).name());

        self.enter_chain(world, target, Some(from))?;

        if self.arena.node(from).is_root {
            self.current = Some(target);
        } else if let Some(parent) = self.arena.node(from).active_parent {
            self.arena.set_active_child(parent, target);
        } else {
            warn!(
                "state `{}` switched with no active parent; the chain pointer is unchanged",
                self.arena.node(from).name()
            );
        }
        Ok(())
    }
}

impl<C: 'static> Default for Machine<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::RegistryError;

    #[derive(Default)]
    struct World {
        log: Vec<String>,
        flag: bool,
    }

    impl World {
        fn count(&self, entry: &str) -> usize {
            self.log.iter().filter(|e| *e == entry).count()
        }
    }

    /// Scripted state: declares fixed children, optionally picks a default
    /// child on entry, optionally switches when a predicate holds. Records
    /// every hook call into the world's log.
    struct Probe {
        tag: &'static str,
        children: &'static [&'static str],
        default_child: Option<&'static str>,
        switch_when: Option<(fn(&World) -> bool, &'static str)>,
    }

    impl Probe {
        fn leaf(tag: &'static str) -> Self {
            Self {
                tag,
                children: &[],
                default_child: None,
                switch_when: None,
            }
        }

        fn switching(tag: &'static str, pred: fn(&World) -> bool, target: &'static str) -> Self {
            Self {
                tag,
                children: &[],
                default_child: None,
                switch_when: Some((pred, target)),
            }
        }

        fn parent(tag: &'static str, children: &'static [&'static str], default_child: &'static str) -> Self {
            Self {
                tag,
                children,
                default_child: Some(default_child),
                switch_when: None,
            }
        }
    }

    impl StateBehavior<World> for Probe {
        fn enter_state(
            &mut self,
            world: &mut World,
            ctx: &StateContext<'_, World>,
            from: Option<StateId>,
        ) {
            let from = from.map_or("none".to_string(), |f| ctx.name_of(f).to_string());
            world.log.push(format!("{}:enter:from={}", self.tag, from));
        }

        fn update_state(&mut self, world: &mut World, _ctx: &StateContext<'_, World>) {
            world.log.push(format!("{}:update", self.tag));
        }

        fn update_fixed_state(&mut self, world: &mut World, _ctx: &StateContext<'_, World>) {
            world.log.push(format!("{}:fixed", self.tag));
        }

        fn exit_state(&mut self, world: &mut World, _ctx: &StateContext<'_, World>) {
            world.log.push(format!("{}:exit", self.tag));
        }

        fn check_switch_states(
            &mut self,
            world: &mut World,
            ctx: &mut StateContext<'_, World>,
        ) -> Result<(), MachineError> {
            world.log.push(format!("{}:check", self.tag));
            if let Some((pred, target)) = self.switch_when {
                if pred(world) {
                    ctx.switch_state(target)?;
                }
            }
            Ok(())
        }

        fn initialise_children(
            &mut self,
            ctx: &mut StateContext<'_, World>,
        ) -> Result<(), MachineError> {
            for child in self.children {
                ctx.add_child(child)?;
            }
            Ok(())
        }

        fn enter_child_state(
            &mut self,
            _world: &mut World,
            ctx: &mut StateContext<'_, World>,
        ) -> Result<(), MachineError> {
            if let Some(child) = self.default_child {
                ctx.enter_child(child)?;
            }
            Ok(())
        }
    }

    #[test]
    fn starting_state_enters_with_no_prior_state() {
        let mut machine = Machine::new();
        let idle = machine.add_root("Idle", Probe::leaf("Idle")).unwrap();
        machine.add_root("Move", Probe::leaf("Move")).unwrap();
        machine.initialise_all().unwrap();

        let mut world = World::default();
        machine.start(&mut world, "Idle").unwrap();

        assert_eq!(machine.current(), Some(idle));
        assert_eq!(world.log, vec!["Idle:enter:from=none"]);
    }

    #[test]
    fn registering_the_same_name_twice_fails() {
        let mut machine: Machine<World> = Machine::new();
        machine.add_root("Idle", Probe::leaf("Idle")).unwrap();

        let err = machine.add_root("Idle", Probe::leaf("Idle")).unwrap_err();
        assert!(matches!(
            err,
            MachineError::Registry(RegistryError::DuplicateName(name)) if name == "Idle"
        ));
    }

    #[test]
    fn unknown_names_surface_a_lookup_error() {
        let mut machine: Machine<World> = Machine::new();
        machine.add_root("Idle", Probe::leaf("Idle")).unwrap();
        machine.initialise_all().unwrap();

        let err = machine.registry().get("Unknown").unwrap_err();
        assert_eq!(err, RegistryError::NotFound("Unknown".to_string()));
    }

    #[test]
    fn entering_a_parent_descends_into_its_default_child() {
        let mut machine = Machine::new();
        // Children registered before their parent: initialization order is
        // registration order, and must not care about tree position.
        let walk = machine.add("Walk", Probe::leaf("Walk")).unwrap();
        machine.add("Run", Probe::leaf("Run")).unwrap();
        let moving = machine
            .add_root("Move", Probe::parent("Move", &["Walk", "Run"], "Walk"))
            .unwrap();
        machine.initialise_all().unwrap();

        let mut world = World::default();
        machine.start(&mut world, "Move").unwrap();

        assert_eq!(machine.active_path(), vec![moving, walk]);
        assert_eq!(
            world.log,
            vec!["Move:enter:from=none", "Walk:enter:from=none"]
        );
    }

    #[test]
    fn child_switch_swaps_only_the_subchain() {
        let mut machine = Machine::new();
        let moving = machine
            .add_root("Move", Probe::parent("Move", &["Walk", "Run"], "Walk"))
            .unwrap();
        machine
            .add("Walk", Probe::switching("Walk", |w| w.flag, "Run"))
            .unwrap();
        let run = machine.add("Run", Probe::leaf("Run")).unwrap();
        machine.initialise_all().unwrap();

        let mut world = World::default();
        machine.start(&mut world, "Move").unwrap();
        world.log.clear();

        world.flag = true;
        machine.update_states(&mut world).unwrap();

        // Child updates and switches before the parent's own check runs.
        assert_eq!(
            world.log,
            vec![
                "Move:update",
                "Walk:update",
                "Walk:check",
                "Walk:exit",
                "Run:enter:from=Walk",
                "Move:check",
            ]
        );
        assert_eq!(machine.active_child_of(moving), Some(run));
        assert_eq!(machine.active_parent_of(run), Some(moving));
        assert_eq!(machine.current(), Some(moving));
        assert_eq!(world.count("Walk:exit"), 1);
        assert_eq!(world.count("Run:enter:from=Walk"), 1);
        assert_eq!(world.count("Move:enter:from=none"), 0);
        assert_eq!(world.count("Move:exit"), 0);
    }

    #[test]
    fn root_switch_redirects_the_machine() {
        let mut machine = Machine::new();
        let idle = machine
            .add_root("Idle", Probe::switching("Idle", |w| w.flag, "Move"))
            .unwrap();
        let moving = machine.add_root("Move", Probe::leaf("Move")).unwrap();
        machine.initialise_all().unwrap();

        let mut world = World::default();
        machine.set_starting_state(&mut world, idle).unwrap();

        world.flag = true;
        machine.update_states(&mut world).unwrap();

        assert_eq!(machine.current(), Some(moving));
        assert_eq!(machine.active_path(), vec![moving]);
        assert_eq!(world.count("Idle:exit"), 1);
        assert_eq!(world.count("Move:enter:from=Idle"), 1);

        // The old root is no longer reachable from the machine.
        world.log.clear();
        machine.update_states(&mut world).unwrap();
        assert_eq!(world.log, vec!["Move:update", "Move:check"]);
    }

    #[test]
    fn switching_exits_only_the_switching_state() {
        let mut machine = Machine::new();
        machine
            .add_root(
                "Move",
                Probe {
                    tag: "Move",
                    children: &["Walk"],
                    default_child: Some("Walk"),
                    switch_when: Some((|w| w.flag, "Combat")),
                },
            )
            .unwrap();
        machine.add("Walk", Probe::leaf("Walk")).unwrap();
        let combat = machine.add_root("Combat", Probe::leaf("Combat")).unwrap();
        machine.initialise_all().unwrap();

        let mut world = World::default();
        machine.start(&mut world, "Move").unwrap();

        world.flag = true;
        machine.update_states(&mut world).unwrap();

        // Move exits; its active descendant Walk does not.
        assert_eq!(world.count("Move:exit"), 1);
        assert_eq!(world.count("Walk:exit"), 0);
        assert_eq!(machine.current(), Some(combat));
    }

    #[test]
    fn fixed_ticks_never_transition() {
        let mut machine = Machine::new();
        let moving = machine
            .add_root("Move", Probe::parent("Move", &["Walk", "Run"], "Walk"))
            .unwrap();
        let walk = machine
            .add("Walk", Probe::switching("Walk", |w| w.flag, "Run"))
            .unwrap();
        machine.add("Run", Probe::leaf("Run")).unwrap();
        machine.initialise_all().unwrap();

        let mut world = World::default();
        machine.start(&mut world, "Move").unwrap();
        world.log.clear();

        // The switch condition holds, but fixed ticks skip the check hook.
        world.flag = true;
        machine.update_fixed_states(&mut world).unwrap();
        machine.update_fixed_states(&mut world).unwrap();

        assert_eq!(
            world.log,
            vec!["Move:fixed", "Walk:fixed", "Move:fixed", "Walk:fixed"]
        );
        assert_eq!(machine.active_child_of(moving), Some(walk));
        assert_eq!(machine.active_parent_of(walk), Some(moving));
    }

    #[test]
    fn switching_to_an_unregistered_state_fails_loudly() {
        let mut machine = Machine::new();
        machine
            .add_root("Idle", Probe::switching("Idle", |w| w.flag, "Sprint"))
            .unwrap();
        machine.initialise_all().unwrap();

        let mut world = World::default();
        machine.start(&mut world, "Idle").unwrap();

        world.flag = true;
        let err = machine.update_states(&mut world).unwrap_err();
        assert!(matches!(
            err,
            MachineError::Registry(RegistryError::NotFound(name)) if name == "Sprint"
        ));
    }

    #[test]
    fn lifecycle_misuse_is_rejected() {
        let mut machine = Machine::new();
        let idle = machine.add_root("Idle", Probe::leaf("Idle")).unwrap();

        let mut world = World::default();
        assert!(matches!(
            machine.update_states(&mut world),
            Err(MachineError::NotStarted)
        ));
        assert!(matches!(
            machine.set_starting_state(&mut world, idle),
            Err(MachineError::NotInitialised)
        ));

        machine.initialise_all().unwrap();
        assert!(matches!(
            machine.initialise_all(),
            Err(MachineError::AlreadyInitialised)
        ));
        assert!(matches!(
            machine.add("Late", Probe::leaf("Late")),
            Err(MachineError::RegistrationClosed)
        ));

        machine.set_starting_state(&mut world, idle).unwrap();
        assert!(machine.is_started());
        assert!(matches!(
            machine.set_starting_state(&mut world, idle),
            Err(MachineError::AlreadyStarted)
        ));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "not registered as a root state")]
    fn starting_a_non_root_state_trips_the_debug_assertion() {
        let mut machine = Machine::new();
        machine.add_root("Idle", Probe::leaf("Idle")).unwrap();
        let walk = machine.add("Walk", Probe::leaf("Walk")).unwrap();
        machine.initialise_all().unwrap();

        let mut world = World::default();
        let _ = machine.set_starting_state(&mut world, walk);
    }

    /// A parent that picks its default child only on the first entry. On
    /// re-entry the stale child link from the previous activation survives
    /// and is re-entered, matching the original protocol.
    struct OneShotParent {
        chosen: bool,
        switch_when: (fn(&World) -> bool, &'static str),
    }

    impl StateBehavior<World> for OneShotParent {
        fn enter_state(
            &mut self,
            world: &mut World,
            _ctx: &StateContext<'_, World>,
            _from: Option<StateId>,
        ) {
            world.log.push("Hold:enter".to_string());
        }

        fn exit_state(&mut self, world: &mut World, _ctx: &StateContext<'_, World>) {
            world.log.push("Hold:exit".to_string());
        }

        fn check_switch_states(
            &mut self,
            world: &mut World,
            ctx: &mut StateContext<'_, World>,
        ) -> Result<(), MachineError> {
            let (pred, target) = self.switch_when;
            if pred(world) {
                ctx.switch_state(target)?;
            }
            Ok(())
        }

        fn initialise_children(
            &mut self,
            ctx: &mut StateContext<'_, World>,
        ) -> Result<(), MachineError> {
            ctx.add_child("A")?;
            Ok(())
        }

        fn enter_child_state(
            &mut self,
            _world: &mut World,
            ctx: &mut StateContext<'_, World>,
        ) -> Result<(), MachineError> {
            if !self.chosen {
                self.chosen = true;
                ctx.enter_child("A")?;
            }
            Ok(())
        }
    }

    #[test]
    fn stale_child_links_are_reentered() {
        let mut machine = Machine::new();
        let hold = machine
            .add_root(
                "Hold",
                OneShotParent {
                    chosen: false,
                    switch_when: (|w| w.flag, "Away"),
                },
            )
            .unwrap();
        let a = machine.add("A", Probe::leaf("A")).unwrap();
        machine
            .add_root("Away", Probe::switching("Away", |w| !w.flag, "Hold"))
            .unwrap();
        machine.initialise_all().unwrap();

        let mut world = World::default();
        machine.start(&mut world, "Hold").unwrap();
        assert_eq!(world.count("A:enter:from=none"), 1);

        // Leave for Away; A stays linked as Hold's (now stale) child.
        world.flag = true;
        machine.update_states(&mut world).unwrap();
        assert_eq!(world.count("A:exit"), 0);

        // Come back. Hold picks nothing this time, but the stale link makes
        // the cascade descend into A again.
        world.flag = false;
        machine.update_states(&mut world).unwrap();
        assert_eq!(world.count("A:enter:from=Away"), 1);
        assert_eq!(machine.active_path(), vec![hold, a]);
    }
}

//! Core behavior contract for hierarchical states.
//!
//! Every state in a machine implements the [`StateBehavior`] trait, which
//! provides the seven lifecycle hooks the engine drives. The engine never
//! calls application logic except through these hooks.

use crate::core::context::StateContext;
use crate::engine::MachineError;

/// Stable handle addressing a state inside its machine's arena.
///
/// Handles are minted by [`Machine::add`](crate::Machine::add) and stay valid
/// for the lifetime of the machine; states are never destroyed while the
/// machine exists. A `StateId` is only meaningful to the machine that issued
/// it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StateId(pub(crate) usize);

/// Behavior hooks for one state in a hierarchical machine.
///
/// A state is a node in a forest of behavior trees: it may own substates and
/// keeps at most one of them active at a time. The engine supplies the
/// cascade logic (enter, update, fixed update, transition) and calls back
/// into these hooks; implementations supply what the state actually *does*.
///
/// All hooks have no-op defaults, so a leaf state implements only the hooks
/// it needs. The type parameter `C` is the host's context (game world,
/// blackboard, actor data); the engine passes it through untouched.
///
/// # Lifecycle
///
/// 1. [`initialise_children`](Self::initialise_children) - once, during
///    [`Machine::initialise_all`](crate::Machine::initialise_all). Declare
///    every substate this state may ever activate via
///    [`StateContext::add_child`].
/// 2. [`enter_state`](Self::enter_state) - each time this state becomes part
///    of the active chain. `from` is the state the transition originated
///    from, or `None` on machine cold start.
/// 3. [`enter_child_state`](Self::enter_child_state) - immediately after
///    `enter_state`. Pick the substate that should start active (if any)
///    via [`StateContext::enter_child`]; the cascade then descends into it.
/// 4. [`update_state`](Self::update_state) /
///    [`update_fixed_state`](Self::update_fixed_state) - every frame /
///    physics step while active. Parents update before their active child.
/// 5. [`check_switch_states`](Self::check_switch_states) - every frame,
///    after this state's entire active subtree has updated. The only hook
///    that may request a transition, via [`StateContext::switch_state`].
/// 6. [`exit_state`](Self::exit_state) - when a transition leaves this
///    state.
///
/// # Non-recursive exit
///
/// When a state switches away, **only that state's** `exit_state` runs; the
/// engine does not cascade the exit into its active descendants. A state
/// that owns exit-critical resources in its substates must release them
/// itself inside its own `exit_state`. This mirrors the transition protocol
/// exactly; see [`StateContext::switch_state`].
///
/// # Example
///
/// ```rust
/// use statecraft::{Machine, MachineError, StateBehavior, StateContext};
///
/// #[derive(Default)]
/// struct World {
///     moving: bool,
///     frames_idle: u32,
/// }
///
/// struct Idle;
///
/// impl StateBehavior<World> for Idle {
///     fn update_state(&mut self, world: &mut World, _ctx: &StateContext<'_, World>) {
///         world.frames_idle += 1;
///     }
///
///     fn check_switch_states(
///         &mut self,
///         world: &mut World,
///         ctx: &mut StateContext<'_, World>,
///     ) -> Result<(), MachineError> {
///         if world.moving {
///             ctx.switch_state("Move")?;
///         }
///         Ok(())
///     }
/// }
///
/// struct Move;
///
/// impl StateBehavior<World> for Move {}
///
/// # fn main() -> Result<(), MachineError> {
/// let mut machine = Machine::new();
/// machine.add_root("Idle", Idle)?;
/// machine.add_root("Move", Move)?;
/// machine.initialise_all()?;
///
/// let mut world = World::default();
/// machine.start(&mut world, "Idle")?;
/// machine.update_states(&mut world)?;
/// assert_eq!(world.frames_idle, 1);
///
/// world.moving = true;
/// machine.update_states(&mut world)?;
/// assert_eq!(machine.name_of(machine.current().unwrap()), "Move");
/// # Ok(())
/// # }
/// ```
pub trait StateBehavior<C>: Send {
    /// Called when this state becomes part of the active chain.
    ///
    /// `from` is the state the transition originated from; `None` means the
    /// machine is cold-starting with no prior state. Every state entered by
    /// one cascade receives the *same* originating `from`, not its parent in
    /// the new chain.
    fn enter_state(&mut self, _world: &mut C, _ctx: &StateContext<'_, C>, _from: Option<StateId>) {}

    /// Called once per logic frame while this state is active.
    fn update_state(&mut self, _world: &mut C, _ctx: &StateContext<'_, C>) {}

    /// Called once per fixed timestep while this state is active.
    ///
    /// Fixed-step ticks never trigger transitions; the engine does not call
    /// [`check_switch_states`](Self::check_switch_states) on this path.
    fn update_fixed_state(&mut self, _world: &mut C, _ctx: &StateContext<'_, C>) {}

    /// Called when a transition leaves this state.
    ///
    /// Runs only on the switching state itself, never on its active
    /// descendants.
    fn exit_state(&mut self, _world: &mut C, _ctx: &StateContext<'_, C>) {}

    /// Decide whether to transition somewhere else.
    ///
    /// Runs after this state's entire active subtree has updated for the
    /// tick, so a child may already have transitioned by the time its parent
    /// is asked. At most one [`StateContext::switch_state`] request is
    /// allowed per call; the engine applies it as soon as the hook returns.
    fn check_switch_states(
        &mut self,
        _world: &mut C,
        _ctx: &mut StateContext<'_, C>,
    ) -> Result<(), MachineError> {
        Ok(())
    }

    /// Declare every substate this state may activate.
    ///
    /// Called exactly once per state by
    /// [`Machine::initialise_all`](crate::Machine::initialise_all), in
    /// registration order - a state must not assume its parent has already
    /// initialised. Use [`StateContext::add_child`] for each substate.
    fn initialise_children(&mut self, _ctx: &mut StateContext<'_, C>) -> Result<(), MachineError> {
        Ok(())
    }

    /// Pick the substate that should start active when this state is
    /// entered, if any, via [`StateContext::enter_child`].
    ///
    /// The selection logic is usually the same shape as the substates'
    /// `check_switch_states` conditions.
    fn enter_child_state(
        &mut self,
        _world: &mut C,
        _ctx: &mut StateContext<'_, C>,
    ) -> Result<(), MachineError> {
        Ok(())
    }
}

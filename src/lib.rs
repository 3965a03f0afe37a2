//! Statecraft: a hierarchical state machine engine
//!
//! Statecraft composes nested, mutually-exclusive behavior states (e.g.
//! "Movement > Grounded > Walking") so a host can tick one machine per
//! actor and have the correct leaf behavior execute, with lifecycle calls
//! cascading up and down the active state chain automatically.
//!
//! The engine supplies the composition and traversal; what any concrete
//! state actually *does* lives behind the seven-hook [`StateBehavior`]
//! contract. The engine performs no I/O and keeps no timers - the host
//! drives it with one [`Machine::update_states`] call per logic frame and
//! one [`Machine::update_fixed_states`] call per physics step.
//!
//! # Core Concepts
//!
//! - **StateBehavior**: the per-state hook contract (enter, update, fixed
//!   update, exit, switch check, child wiring, child selection)
//! - **Machine**: owns every state and the active root chain pointer, and
//!   exposes the start/tick entry points
//! - **Registry**: name-to-state lookup, used for wiring and transitions
//! - **MachineBuilder**: fluent setup that cannot get the one-shot
//!   initialization ordering wrong
//!
//! # Example
//!
//! ```rust
//! use statecraft::{MachineBuilder, MachineError, StateBehavior, StateContext};
//!
//! #[derive(Default)]
//! struct Actor {
//!     airborne: bool,
//!     frames_grounded: u32,
//! }
//!
//! struct Grounded;
//!
//! impl StateBehavior<Actor> for Grounded {
//!     fn update_state(&mut self, actor: &mut Actor, _ctx: &StateContext<'_, Actor>) {
//!         actor.frames_grounded += 1;
//!     }
//!
//!     fn check_switch_states(
//!         &mut self,
//!         actor: &mut Actor,
//!         ctx: &mut StateContext<'_, Actor>,
//!     ) -> Result<(), MachineError> {
//!         if actor.airborne {
//!             ctx.switch_state("Airborne")?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! struct Airborne;
//!
//! impl StateBehavior<Actor> for Airborne {}
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut machine = MachineBuilder::new()
//!     .root("Grounded", Grounded)
//!     .root("Airborne", Airborne)
//!     .build()?;
//!
//! let mut actor = Actor::default();
//! machine.start(&mut actor, "Grounded")?;
//!
//! machine.update_states(&mut actor)?;
//! assert_eq!(actor.frames_grounded, 1);
//!
//! actor.airborne = true;
//! machine.update_states(&mut actor)?;
//! assert_eq!(machine.name_of(machine.current().unwrap()), "Airborne");
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use core::{StateBehavior, StateContext, StateId};
pub use engine::{Machine, MachineError, Registry, RegistryError};

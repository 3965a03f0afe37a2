//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::state::StateBehavior;
use crate::engine::Machine;

/// Builder for constructing machines with a fluent API.
///
/// Collects named behaviors, then registers them and runs the
/// initialization pass in one step, so a built machine is always ready to
/// [`start`](Machine::start).
///
/// # Example
///
/// ```rust
/// use statecraft::{MachineBuilder, StateBehavior};
///
/// struct Idle;
/// impl StateBehavior<()> for Idle {}
///
/// struct Move;
/// impl StateBehavior<()> for Move {}
///
/// # fn main() -> Result<(), statecraft::BuildError> {
/// let mut machine = MachineBuilder::new()
///     .root("Idle", Idle)
///     .root("Move", Move)
///     .build()?;
///
/// let mut world = ();
/// machine.start(&mut world, "Idle")?;
/// # Ok(())
/// # }
/// ```
pub struct MachineBuilder<C> {
    states: Vec<(String, Box<dyn StateBehavior<C>>, bool)>,
}

impl<C: 'static> MachineBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Declare a substate under `name`.
    pub fn state(
        mut self,
        name: impl Into<String>,
        behavior: impl StateBehavior<C> + 'static,
    ) -> Self {
        self.states.push((name.into(), Box::new(behavior), false));
        self
    }

    /// Declare a root candidate under `name`.
    pub fn root(
        mut self,
        name: impl Into<String>,
        behavior: impl StateBehavior<C> + 'static,
    ) -> Self {
        self.states.push((name.into(), Box::new(behavior), true));
        self
    }

    /// Register every declared state and run the initialization pass.
    ///
    /// Returns an error if no states were declared, a name was declared
    /// twice, or a state's `initialise_children` fails.
    pub fn build(self) -> Result<Machine<C>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut machine = Machine::new();
        for (name, behavior, is_root) in self.states {
            machine.add_boxed(name, behavior, is_root)?;
        }
        machine.initialise_all()?;
        Ok(machine)
    }
}

impl<C: 'static> Default for MachineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

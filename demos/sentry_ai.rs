//! Sentry AI Machine
//!
//! An NPC sentry with two root modes: Patrol (nesting Watch and Sweep) and
//! Alert (nesting Chase and Attack). Spotting the player escalates the
//! whole chain; losing them de-escalates back to patrol.
//!
//! Run with: cargo run --example sentry_ai

use statecraft::{Machine, MachineBuilder, MachineError, StateBehavior, StateContext, StateId};

const ATTACK_RANGE: f32 = 2.0;

#[derive(Default)]
struct Sentry {
    player_visible: bool,
    player_distance: f32,
    swept_here: bool,
}

struct Patrol;

impl StateBehavior<Sentry> for Patrol {
    fn check_switch_states(
        &mut self,
        sentry: &mut Sentry,
        ctx: &mut StateContext<'_, Sentry>,
    ) -> Result<(), MachineError> {
        if sentry.player_visible {
            ctx.switch_state("Alert")?;
        }
        Ok(())
    }

    fn initialise_children(
        &mut self,
        ctx: &mut StateContext<'_, Sentry>,
    ) -> Result<(), MachineError> {
        ctx.add_child("Watch")?;
        ctx.add_child("Sweep")?;
        Ok(())
    }

    fn enter_child_state(
        &mut self,
        _sentry: &mut Sentry,
        ctx: &mut StateContext<'_, Sentry>,
    ) -> Result<(), MachineError> {
        ctx.enter_child("Watch")?;
        Ok(())
    }
}

struct Watch;

impl StateBehavior<Sentry> for Watch {
    fn check_switch_states(
        &mut self,
        sentry: &mut Sentry,
        ctx: &mut StateContext<'_, Sentry>,
    ) -> Result<(), MachineError> {
        if !sentry.swept_here {
            ctx.switch_state("Sweep")?;
        }
        Ok(())
    }
}

struct Sweep {
    progress: u32,
}

impl StateBehavior<Sentry> for Sweep {
    fn enter_state(
        &mut self,
        _sentry: &mut Sentry,
        _ctx: &StateContext<'_, Sentry>,
        _from: Option<StateId>,
    ) {
        self.progress = 0;
    }

    fn update_state(&mut self, _sentry: &mut Sentry, _ctx: &StateContext<'_, Sentry>) {
        self.progress += 1;
    }

    fn exit_state(&mut self, sentry: &mut Sentry, _ctx: &StateContext<'_, Sentry>) {
        sentry.swept_here = true;
    }

    fn check_switch_states(
        &mut self,
        _sentry: &mut Sentry,
        ctx: &mut StateContext<'_, Sentry>,
    ) -> Result<(), MachineError> {
        if self.progress >= 2 {
            ctx.switch_state("Watch")?;
        }
        Ok(())
    }
}

struct Alert;

impl StateBehavior<Sentry> for Alert {
    fn check_switch_states(
        &mut self,
        sentry: &mut Sentry,
        ctx: &mut StateContext<'_, Sentry>,
    ) -> Result<(), MachineError> {
        if !sentry.player_visible {
            ctx.switch_state("Patrol")?;
        }
        Ok(())
    }

    fn initialise_children(
        &mut self,
        ctx: &mut StateContext<'_, Sentry>,
    ) -> Result<(), MachineError> {
        ctx.add_child("Chase")?;
        ctx.add_child("Attack")?;
        Ok(())
    }

    fn enter_child_state(
        &mut self,
        sentry: &mut Sentry,
        ctx: &mut StateContext<'_, Sentry>,
    ) -> Result<(), MachineError> {
        if sentry.player_distance < ATTACK_RANGE {
            ctx.enter_child("Attack")?;
        } else {
            ctx.enter_child("Chase")?;
        }
        Ok(())
    }
}

struct Chase;

impl StateBehavior<Sentry> for Chase {
    fn update_state(&mut self, sentry: &mut Sentry, _ctx: &StateContext<'_, Sentry>) {
        sentry.player_distance = (sentry.player_distance - 3.0).max(0.0);
    }

    fn check_switch_states(
        &mut self,
        sentry: &mut Sentry,
        ctx: &mut StateContext<'_, Sentry>,
    ) -> Result<(), MachineError> {
        if sentry.player_distance < ATTACK_RANGE {
            ctx.switch_state("Attack")?;
        }
        Ok(())
    }
}

struct Attack;

impl StateBehavior<Sentry> for Attack {
    fn check_switch_states(
        &mut self,
        sentry: &mut Sentry,
        ctx: &mut StateContext<'_, Sentry>,
    ) -> Result<(), MachineError> {
        if sentry.player_distance >= ATTACK_RANGE {
            ctx.switch_state("Chase")?;
        }
        Ok(())
    }
}

fn active_path(machine: &Machine<Sentry>) -> String {
    machine
        .active_path()
        .iter()
        .map(|id| machine.name_of(*id))
        .collect::<Vec<_>>()
        .join(" > ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut machine = MachineBuilder::new()
        .root("Patrol", Patrol)
        .root("Alert", Alert)
        .state("Watch", Watch)
        .state("Sweep", Sweep { progress: 0 })
        .state("Chase", Chase)
        .state("Attack", Attack)
        .build()?;

    let mut sentry = Sentry {
        player_distance: 10.0,
        ..Sentry::default()
    };
    machine.start(&mut sentry, "Patrol")?;

    // The player walks into view on tick 3 and slips away on tick 8.
    println!("=== Sentry AI Machine ===\n");
    for tick in 0..10 {
        sentry.player_visible = (3..8).contains(&tick);

        machine.update_states(&mut sentry)?;

        println!(
            "tick {tick:02}  distance={:>4.1}  chain: {}",
            sentry.player_distance,
            active_path(&machine)
        );
    }

    Ok(())
}

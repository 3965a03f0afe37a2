//! Player Movement Machine
//!
//! A classic platformer setup: two root states (Grounded, Airborne), with
//! the grounded state nesting Idle / Walk / Run substates picked by speed.
//!
//! Key concepts:
//! - Root states swapping the machine's active chain
//! - A parent selecting its default child on entry
//! - Leaf-to-leaf transitions beneath an unchanged parent
//! - Fixed-step hooks for physics alongside per-frame hooks
//!
//! Run with: cargo run --example player_movement
//! Set RUST_LOG=statecraft=debug to watch the engine's transition log.

use statecraft::{Machine, MachineBuilder, MachineError, StateBehavior, StateContext, StateId};

#[derive(Default)]
struct Player {
    speed: f32,
    jump_queued: bool,
    vertical_velocity: f32,
}

struct Grounded;

impl StateBehavior<Player> for Grounded {
    fn enter_state(
        &mut self,
        player: &mut Player,
        _ctx: &StateContext<'_, Player>,
        _from: Option<StateId>,
    ) {
        player.vertical_velocity = 0.0;
    }

    fn check_switch_states(
        &mut self,
        player: &mut Player,
        ctx: &mut StateContext<'_, Player>,
    ) -> Result<(), MachineError> {
        if player.jump_queued {
            player.jump_queued = false;
            ctx.switch_state("Airborne")?;
        }
        Ok(())
    }

    fn initialise_children(
        &mut self,
        ctx: &mut StateContext<'_, Player>,
    ) -> Result<(), MachineError> {
        ctx.add_child("Idle")?;
        ctx.add_child("Walk")?;
        ctx.add_child("Run")?;
        Ok(())
    }

    fn enter_child_state(
        &mut self,
        player: &mut Player,
        ctx: &mut StateContext<'_, Player>,
    ) -> Result<(), MachineError> {
        // Same shape as the substates' own switch conditions.
        if player.speed > 6.0 {
            ctx.enter_child("Run")?;
        } else if player.speed > 0.1 {
            ctx.enter_child("Walk")?;
        } else {
            ctx.enter_child("Idle")?;
        }
        Ok(())
    }
}

struct Airborne {
    frames_in_air: u32,
}

impl StateBehavior<Player> for Airborne {
    fn enter_state(
        &mut self,
        player: &mut Player,
        _ctx: &StateContext<'_, Player>,
        _from: Option<StateId>,
    ) {
        self.frames_in_air = 0;
        player.vertical_velocity = 8.0;
    }

    fn update_state(&mut self, _player: &mut Player, _ctx: &StateContext<'_, Player>) {
        self.frames_in_air += 1;
    }

    fn update_fixed_state(&mut self, player: &mut Player, _ctx: &StateContext<'_, Player>) {
        player.vertical_velocity -= 4.0;
    }

    fn check_switch_states(
        &mut self,
        player: &mut Player,
        ctx: &mut StateContext<'_, Player>,
    ) -> Result<(), MachineError> {
        if self.frames_in_air >= 3 && player.vertical_velocity <= 0.0 {
            ctx.switch_state("Grounded")?;
        }
        Ok(())
    }
}

struct Idle;

impl StateBehavior<Player> for Idle {
    fn check_switch_states(
        &mut self,
        player: &mut Player,
        ctx: &mut StateContext<'_, Player>,
    ) -> Result<(), MachineError> {
        if player.speed > 0.1 {
            ctx.switch_state("Walk")?;
        }
        Ok(())
    }
}

struct Walk;

impl StateBehavior<Player> for Walk {
    fn check_switch_states(
        &mut self,
        player: &mut Player,
        ctx: &mut StateContext<'_, Player>,
    ) -> Result<(), MachineError> {
        if player.speed > 6.0 {
            ctx.switch_state("Run")?;
        } else if player.speed <= 0.1 {
            ctx.switch_state("Idle")?;
        }
        Ok(())
    }
}

struct Run;

impl StateBehavior<Player> for Run {
    fn check_switch_states(
        &mut self,
        player: &mut Player,
        ctx: &mut StateContext<'_, Player>,
    ) -> Result<(), MachineError> {
        if player.speed <= 6.0 {
            ctx.switch_state("Walk")?;
        }
        Ok(())
    }
}

fn active_path(machine: &Machine<Player>) -> String {
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
        .root("Grounded", Grounded)
        .root("Airborne", Airborne { frames_in_air: 0 })
        .state("Idle", Idle)
        .state("Walk", Walk)
        .state("Run", Run)
        .build()?;

    let mut player = Player::default();
    machine.start(&mut player, "Grounded")?;

    // Scripted input: walk, sprint, jump, land, stop.
    let script: &[(f32, bool)] = &[
        (0.0, false),
        (3.0, false),
        (3.0, false),
        (8.0, false),
        (8.0, true),
        (8.0, false),
        (8.0, false),
        (8.0, false),
        (3.0, false),
        (0.0, false),
    ];

    println!("=== Player Movement Machine ===\n");
    for (frame, (speed, jump)) in script.iter().enumerate() {
        player.speed = *speed;
        player.jump_queued = *jump;

        machine.update_states(&mut player)?;
        machine.update_fixed_states(&mut player)?;

        println!(
            "frame {frame:02}  speed={speed:>4.1}  chain: {}",
            active_path(&machine)
        );
    }

    Ok(())
}

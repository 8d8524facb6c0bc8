//! Duel driver: wires the controller to the stub arena and a drone.
//!
//! Events collected at the start of a tick are delivered before that
//! tick's update, so state set by handlers is always visible to the
//! update that follows. Same seed, same duel.

use glam::DVec2;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skirmish_bot::controller::Controller;
use skirmish_core::events::HostEvent;

use crate::arena::Arena;
use crate::drone::Drone;

/// Two hulls closer than this have collided.
const COLLISION_RANGE: f64 = 40.0;

/// Chance per tick that the drone lands a hit on us.
const STRAY_HIT_CHANCE: f64 = 0.02;

/// Configuration for one duel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DuelConfig {
    /// RNG seed for determinism.
    pub seed: u64,
    /// Number of ticks to run.
    pub ticks: u64,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ticks: 600,
        }
    }
}

/// Observable outcome of a duel, serialized at the end of the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DuelReport {
    pub ticks: u64,
    pub shots_fired: u32,
    pub wall_hits: u32,
    pub bullet_hits_taken: u32,
    pub robot_collisions: u32,
    pub commands_issued: usize,
}

/// Run one duel to completion.
pub fn run_duel(config: &DuelConfig) -> DuelReport {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut arena = Arena::new(800.0, 600.0, DVec2::new(400.0, 300.0));
    let mut drone = Drone::new(DVec2::new(200.0, 450.0), 135.0, 8.0);
    let mut bot = Controller::new();
    let mut report = DuelReport::default();

    bot.start(&mut arena);

    for tick in 0..config.ticks {
        let time = tick as f64;
        arena.cool_down();
        drone.advance(&mut rng, arena.width, arena.height);

        for event in collect_events(&mut rng, &mut arena, &drone, time) {
            debug!("tick {tick}: {event:?}");
            match event {
                HostEvent::Scanned(scan) => bot.on_scanned(&mut arena, &scan),
                HostEvent::HitByBullet => {
                    report.bullet_hits_taken += 1;
                    bot.on_hit_by_bullet();
                }
                HostEvent::HitWall => {
                    report.wall_hits += 1;
                    bot.on_hit_wall(&mut arena);
                }
                HostEvent::HitRobot => {
                    report.robot_collisions += 1;
                    bot.on_hit_robot();
                }
                HostEvent::Won => bot.on_win(&mut arena),
            }
        }

        bot.on_tick(&mut arena);
    }

    // We outlasted the clock; the host calls that a win.
    bot.on_win(&mut arena);

    report.ticks = config.ticks;
    report.shots_fired = arena.shots_fired;
    report.commands_issued = arena.transcript.len();
    info!("duel finished: {report:?}");
    report
}

/// Events the host delivers ahead of this tick's update.
fn collect_events(
    rng: &mut ChaCha8Rng,
    arena: &mut Arena,
    drone: &Drone,
    time: f64,
) -> Vec<HostEvent> {
    let mut events = Vec::new();

    if arena.take_wall_contact() {
        events.push(HostEvent::HitWall);
    }
    if arena.pos.distance(drone.pos) < COLLISION_RANGE {
        events.push(HostEvent::HitRobot);
    }
    if rng.gen_bool(STRAY_HIT_CHANCE) {
        events.push(HostEvent::HitByBullet);
    }
    // The full per-tick sweep always finds the lone opponent.
    events.push(HostEvent::Scanned(drone.scan_from(
        arena.pos,
        arena.heading_deg,
        time,
    )));

    events
}

//! The robot controller: event handlers, movement state machine, firing.

use glam::DVec2;
use log::trace;

use skirmish_core::angles::calibrate;
use skirmish_core::constants::*;
use skirmish_core::enums::{Livery, MoveState};
use skirmish_core::events::ScanEvent;

use crate::hull::Hull;
use crate::targeting;

/// Last-known opponent telemetry.
///
/// All four fields are overwritten together whenever a scan is accepted, so
/// a firing decision never mixes readings from different scans. Zero-valued
/// until the first scan arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnemySnapshot {
    /// Angle to the opponent relative to our body heading (degrees).
    pub bearing_deg: f64,
    /// Distance to the opponent at scan time.
    pub distance: f64,
    /// Opponent's signed scalar speed along its heading.
    pub velocity: f64,
    /// Opponent's absolute heading (degrees).
    pub heading_deg: f64,
}

impl EnemySnapshot {
    fn refresh(&mut self, scan: &ScanEvent) {
        self.bearing_deg = scan.bearing_deg;
        self.distance = scan.distance;
        self.velocity = scan.velocity;
        self.heading_deg = scan.heading_deg;
    }
}

/// The robot's decision logic.
///
/// One instance per robot; owns every piece of mutable state the handlers
/// share. No state is shared across robots or threads.
#[derive(Debug, Default)]
pub struct Controller {
    enemy: EnemySnapshot,
    state: MoveState,
    last_shot_time: f64,
    invert_direction: bool,
    is_turning: bool,
    is_robot_hitting: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current movement state.
    pub fn state(&self) -> MoveState {
        self.state
    }

    /// Force a movement state for the next tick. Outer drivers can use
    /// this to request states no internal transition produces (`Run`).
    pub fn set_state(&mut self, state: MoveState) {
        self.state = state;
    }

    #[cfg(test)]
    pub(crate) fn enemy(&self) -> &EnemySnapshot {
        &self.enemy
    }

    /// One-time setup before the first tick: cruise paint, and decouple
    /// the gun and radar headings from body turns.
    pub fn start(&mut self, hull: &mut impl Hull) {
        hull.set_livery(Livery::Cruise);
        hull.set_adjust_gun_for_body_turn(true);
        hull.set_adjust_radar_for_body_turn(true);
    }

    /// Per-tick update: sweep the radar, then move according to the
    /// current state.
    ///
    /// Whatever state the tick entered with, it leaves in `Usual`;
    /// non-`Usual` states drive exactly one tick's movement. `MoveState`
    /// is a closed set, so the match is exhaustive by construction.
    pub fn on_tick(&mut self, hull: &mut impl Hull) {
        trace!("state: {:?}", self.state);

        hull.turn_radar_left(RADAR_SWEEP_DEG);

        match self.state {
            MoveState::Usual => hull.ahead(USUAL_ADVANCE),
            MoveState::Wall => {
                // Alternates +40 / -40 across successive wall ticks,
                // starting forward.
                let distance = if self.invert_direction {
                    -WALL_ADVANCE
                } else {
                    WALL_ADVANCE
                };
                self.invert_direction = !self.invert_direction;
                hull.ahead(distance);
            }
            MoveState::Run => hull.ahead(RUN_ADVANCE),
            MoveState::HitByBullet => {
                // Synchronous body turn; suppress predictive aiming for
                // any scan the host delivers while it completes.
                self.is_turning = true;
                hull.turn_right(calibrate(self.enemy.bearing_deg + HIT_TURN_OFFSET_DEG));
                self.is_turning = false;
            }
        }

        self.state = MoveState::Usual;
    }

    /// React to a radar scan: refresh the opponent snapshot and, if the
    /// shot cooldown and gun heat allow, aim ahead of the opponent and
    /// fire.
    ///
    /// A NaN lead (degenerate intercept triangle), a mid-turn body, or a
    /// fresh robot collision all downgrade to direct aim. At point-blank
    /// range the gun is not turned at all, but the shot still goes out.
    pub fn on_scanned(&mut self, hull: &mut impl Hull, scan: &ScanEvent) {
        if scan.time - self.last_shot_time <= SHOT_COOLDOWN {
            return;
        }

        self.enemy.refresh(scan);

        if hull.gun_heat() >= GUN_HEAT_READY {
            return;
        }

        let gun_angle = calibrate(hull.heading() - hull.gun_heading() + self.enemy.bearing_deg);
        let power = targeting::firepower(self.enemy.distance);
        let lead = targeting::lead_angle(
            &self.enemy,
            DVec2::new(hull.x(), hull.y()),
            hull.heading(),
            power,
        );

        hull.set_livery(Livery::Firing);

        if !lead.is_nan()
            && self.enemy.distance > POINT_BLANK_DISTANCE
            && !self.is_turning
            && !self.is_robot_hitting
        {
            hull.turn_gun_right(gun_angle + lead);
        } else if self.enemy.distance > POINT_BLANK_DISTANCE {
            hull.turn_gun_right(gun_angle);
        }

        hull.fire(power);
        hull.set_livery(Livery::Cruise);
        self.last_shot_time = scan.time;
        self.is_robot_hitting = false;
    }

    /// An enemy bullet hit us: reorient on the next tick.
    pub fn on_hit_by_bullet(&mut self) {
        self.state = MoveState::HitByBullet;
    }

    /// Wall collision: turn 90° away immediately, direction picked by
    /// battlefield quadrant, then back off on the next tick.
    ///
    /// In the top-right and bottom-left quadrants a left turn points back
    /// toward open field; elsewhere a right turn does.
    pub fn on_hit_wall(&mut self, hull: &mut impl Hull) {
        let half_w = hull.battlefield_width() * 0.5;
        let half_h = hull.battlefield_height() * 0.5;
        let (x, y) = (hull.x(), hull.y());

        if (y > half_h && x > half_w) || (y < half_h && x < half_w) {
            hull.turn_left(WALL_TURN_DEG);
        } else {
            hull.turn_right(WALL_TURN_DEG);
        }

        self.state = MoveState::Wall;
    }

    /// Robot-to-robot collision: position estimates are unreliable this
    /// tick, so the next shot skips the predictive lead.
    pub fn on_hit_robot(&mut self) {
        self.is_robot_hitting = true;
    }

    /// Battle won; strictly cosmetic.
    pub fn on_win(&mut self, hull: &mut impl Hull) {
        hull.set_livery(Livery::Victory);
    }
}

//! Stub battle host.
//!
//! Every command fully resolves before the call returns, which is all the
//! controller's contract requires. Movement clamps at the battlefield edges
//! and raises a wall-contact flag for the driver loop to turn into an
//! event on the next tick.

use glam::DVec2;

use skirmish_bot::hull::Hull;
use skirmish_core::angles::polar_offset;
use skirmish_core::commands::BotCommand;
use skirmish_core::enums::Livery;

/// Distance from a wall at which the hull stops (half a robot).
pub const WALL_MARGIN: f64 = 18.0;

/// Gun heat shed per tick.
pub const GUN_COOLING_PER_TICK: f64 = 0.1;

/// Gun heat added by a shot of the given power.
fn heat_of(power: f64) -> f64 {
    1.0 + power / 5.0
}

/// The robot's side of the battlefield: pose, gun state, and a transcript
/// of every command issued this duel.
pub struct Arena {
    pub pos: DVec2,
    pub heading_deg: f64,
    pub gun_heading_deg: f64,
    pub gun_heat: f64,
    pub livery: Livery,
    pub width: f64,
    pub height: f64,
    pub shots_fired: u32,
    pub transcript: Vec<BotCommand>,
    adjust_gun: bool,
    wall_contact: bool,
}

impl Arena {
    pub fn new(width: f64, height: f64, pos: DVec2) -> Self {
        Self {
            pos,
            heading_deg: 0.0,
            gun_heading_deg: 0.0,
            gun_heat: 0.0,
            livery: Livery::default(),
            width,
            height,
            shots_fired: 0,
            transcript: Vec::new(),
            adjust_gun: false,
            wall_contact: false,
        }
    }

    /// Shed one tick's worth of gun heat.
    pub fn cool_down(&mut self) {
        self.gun_heat = (self.gun_heat - GUN_COOLING_PER_TICK).max(0.0);
    }

    /// True once per wall contact; drains on read.
    pub fn take_wall_contact(&mut self) -> bool {
        std::mem::take(&mut self.wall_contact)
    }

    fn rotate_body(&mut self, degrees: f64) {
        self.heading_deg = (self.heading_deg + degrees).rem_euclid(360.0);
        if !self.adjust_gun {
            self.gun_heading_deg = (self.gun_heading_deg + degrees).rem_euclid(360.0);
        }
    }
}

impl Hull for Arena {
    fn x(&self) -> f64 {
        self.pos.x
    }
    fn y(&self) -> f64 {
        self.pos.y
    }
    fn heading(&self) -> f64 {
        self.heading_deg
    }
    fn gun_heading(&self) -> f64 {
        self.gun_heading_deg
    }
    fn gun_heat(&self) -> f64 {
        self.gun_heat
    }
    fn battlefield_width(&self) -> f64 {
        self.width
    }
    fn battlefield_height(&self) -> f64 {
        self.height
    }

    fn ahead(&mut self, distance: f64) {
        self.transcript.push(BotCommand::Ahead { distance });
        let target = self.pos + polar_offset(self.heading_deg, distance);
        let clamped = DVec2::new(
            target.x.clamp(WALL_MARGIN, self.width - WALL_MARGIN),
            target.y.clamp(WALL_MARGIN, self.height - WALL_MARGIN),
        );
        if clamped != target {
            self.wall_contact = true;
        }
        self.pos = clamped;
    }

    fn turn_left(&mut self, degrees: f64) {
        self.transcript.push(BotCommand::TurnLeft { degrees });
        self.rotate_body(-degrees);
    }

    fn turn_right(&mut self, degrees: f64) {
        self.transcript.push(BotCommand::TurnRight { degrees });
        self.rotate_body(degrees);
    }

    fn turn_gun_right(&mut self, degrees: f64) {
        self.transcript.push(BotCommand::TurnGunRight { degrees });
        self.gun_heading_deg = (self.gun_heading_deg + degrees).rem_euclid(360.0);
    }

    fn turn_radar_left(&mut self, degrees: f64) {
        // The radar heading is not modeled; the driver loop treats every
        // sweep as seeing the lone opponent.
        self.transcript.push(BotCommand::TurnRadarLeft { degrees });
    }

    fn fire(&mut self, power: f64) {
        self.transcript.push(BotCommand::Fire { power });
        self.gun_heat += heat_of(power);
        self.shots_fired += 1;
    }

    fn set_livery(&mut self, livery: Livery) {
        self.transcript.push(BotCommand::SetLivery { livery });
        self.livery = livery;
    }

    fn set_adjust_gun_for_body_turn(&mut self, enabled: bool) {
        self.transcript
            .push(BotCommand::AdjustGunForBodyTurn { enabled });
        self.adjust_gun = enabled;
    }

    fn set_adjust_radar_for_body_turn(&mut self, enabled: bool) {
        self.transcript
            .push(BotCommand::AdjustRadarForBodyTurn { enabled });
    }
}

//! Scripted opponent: cruises the field, jinking on a seeded RNG.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::angles::{calibrate, polar_offset};
use skirmish_core::events::ScanEvent;

pub struct Drone {
    pub pos: DVec2,
    pub heading_deg: f64,
    pub speed: f64,
}

impl Drone {
    pub fn new(pos: DVec2, heading_deg: f64, speed: f64) -> Self {
        Self {
            pos,
            heading_deg,
            speed,
        }
    }

    /// Advance one tick: occasional heading jink, about-face at the edges.
    pub fn advance(&mut self, rng: &mut ChaCha8Rng, width: f64, height: f64) {
        if rng.gen_bool(0.1) {
            self.heading_deg =
                (self.heading_deg + rng.gen_range(-30.0..30.0)).rem_euclid(360.0);
        }

        let next = self.pos + polar_offset(self.heading_deg, self.speed);
        if next.x < 0.0 || next.x > width || next.y < 0.0 || next.y > height {
            self.heading_deg = (self.heading_deg + 180.0).rem_euclid(360.0);
        } else {
            self.pos = next;
        }
    }

    /// The scan a radar sweep from the given observer pose produces.
    pub fn scan_from(&self, observer_pos: DVec2, observer_heading_deg: f64, time: f64) -> ScanEvent {
        let delta = self.pos - observer_pos;
        let absolute_bearing_deg = delta.x.atan2(delta.y).to_degrees();

        ScanEvent {
            bearing_deg: calibrate(absolute_bearing_deg - observer_heading_deg),
            distance: delta.length(),
            velocity: self.speed,
            heading_deg: self.heading_deg,
            time,
        }
    }
}

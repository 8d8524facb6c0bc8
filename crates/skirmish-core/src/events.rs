//! Events delivered by the host to the controller.

use serde::{Deserialize, Serialize};

/// Opponent telemetry captured by one radar scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanEvent {
    /// Angle to the opponent relative to our body heading (degrees).
    pub bearing_deg: f64,
    /// Distance to the opponent (battlefield units).
    pub distance: f64,
    /// Opponent's signed scalar speed along its heading.
    pub velocity: f64,
    /// Opponent's absolute heading (degrees).
    pub heading_deg: f64,
    /// Battle time at which the scan was taken.
    pub time: f64,
}

/// All host callbacks as one queueable value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostEvent {
    /// Radar swept over the opponent.
    Scanned(ScanEvent),
    /// An enemy bullet struck us.
    HitByBullet,
    /// We drove into a wall.
    HitWall,
    /// We collided with the opponent.
    HitRobot,
    /// Last robot standing.
    Won,
}

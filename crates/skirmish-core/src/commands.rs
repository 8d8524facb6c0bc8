//! Commands the controller issues to its host.
//!
//! The controller drives a live host through the `Hull` trait in
//! `skirmish-bot`; this mirror enum exists so harnesses and tests can
//! record, inspect, and serialize the issued command stream.

use serde::{Deserialize, Serialize};

use crate::enums::Livery;

/// One command issued by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BotCommand {
    /// Move along the body heading; negative distance backs up.
    Ahead { distance: f64 },
    /// Rotate the body counterclockwise (degrees).
    TurnLeft { degrees: f64 },
    /// Rotate the body clockwise (degrees).
    TurnRight { degrees: f64 },
    /// Rotate the gun clockwise (degrees).
    TurnGunRight { degrees: f64 },
    /// Rotate the radar counterclockwise (degrees).
    TurnRadarLeft { degrees: f64 },
    /// Fire a projectile with the given power.
    Fire { power: f64 },
    /// Switch the displayed paint scheme.
    SetLivery { livery: Livery },
    /// Keep the gun heading independent of body turns.
    AdjustGunForBodyTurn { enabled: bool },
    /// Keep the radar heading independent of body turns.
    AdjustRadarForBodyTurn { enabled: bool },
}

//! Enumeration types shared between the controller and hosts.

use serde::{Deserialize, Serialize};

/// Movement state driving the per-tick decision.
///
/// Non-`Usual` states are one-shot: each drives exactly one tick's movement
/// and the controller reverts to `Usual` at the end of every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveState {
    /// Cruising; advance a short fixed distance each tick.
    #[default]
    Usual,
    /// Just bounced off a wall; back off, alternating direction per hit.
    Wall,
    /// Flat-out dash. No internal transition produces this; an external
    /// driver can request it through `Controller::set_state`.
    Run,
    /// Took a hit; swing the body perpendicular to the shooter.
    HitByBullet,
}

/// Paint scheme the controller asks the host to display.
///
/// Purely cosmetic; hosts without a visual concept may ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Livery {
    #[default]
    Cruise,
    Firing,
    Victory,
}

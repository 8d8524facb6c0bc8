//! Tuning constants for the robot's movement and fire control.

// --- Movement ---

/// Forward distance per tick while cruising.
pub const USUAL_ADVANCE: f64 = 50.0;

/// Evasive distance after a wall hit (sign alternates hit to hit).
pub const WALL_ADVANCE: f64 = 40.0;

/// Dash distance for the `Run` state.
pub const RUN_ADVANCE: f64 = 250.0;

/// Body turn away from a wall after a collision (degrees).
pub const WALL_TURN_DEG: f64 = 90.0;

/// Body turn offset relative to the shooter's bearing after taking a hit
/// (degrees); puts the hull perpendicular to the incoming fire.
pub const HIT_TURN_OFFSET_DEG: f64 = 90.0;

// --- Radar ---

/// Full sweep commanded at the start of every tick (degrees).
pub const RADAR_SWEEP_DEG: f64 = 360.0;

// --- Fire control ---

/// Minimum battle time between shots.
pub const SHOT_COOLDOWN: f64 = 0.4;

/// Gun heat must be below this before a shot is attempted.
pub const GUN_HEAT_READY: f64 = 0.2;

/// Firepower is this numerator divided by target distance...
pub const FIREPOWER_PER_DISTANCE: f64 = 500.0;

/// ...floored at this minimum. There is deliberately no upper clamp:
/// point-blank targets get whatever the division yields.
pub const MIN_FIREPOWER: f64 = 0.3;

/// At or below this distance the gun is not turned (the shot still fires).
pub const POINT_BLANK_DISTANCE: f64 = 10.0;

// --- Projectile model ---

/// Projectile speed is `BULLET_SPEED_BASE - BULLET_SPEED_PER_POWER * power`
/// (units per time); hotter shots fly slower.
pub const BULLET_SPEED_BASE: f64 = 20.0;
pub const BULLET_SPEED_PER_POWER: f64 = 3.0;

//! Host surface the controller drives.

use skirmish_core::enums::Livery;

/// Query and command surface a battle host exposes to one robot.
///
/// Angles are degrees in the battlefield frame (0° = north, clockwise).
/// Commands are synchronous from the controller's perspective: the host
/// returns once the command has logically completed, and the controller
/// issues the next command only after that. Within one tick the radar
/// sweep is always issued before the movement command.
pub trait Hull {
    // --- Queries ---

    /// Own x position (battlefield units).
    fn x(&self) -> f64;
    /// Own y position (battlefield units).
    fn y(&self) -> f64;
    /// Body heading (degrees).
    fn heading(&self) -> f64;
    /// Gun heading (degrees).
    fn gun_heading(&self) -> f64;
    /// Current gun heat; the gun can fire only once this has cooled.
    fn gun_heat(&self) -> f64;
    /// Battlefield width.
    fn battlefield_width(&self) -> f64;
    /// Battlefield height.
    fn battlefield_height(&self) -> f64;

    // --- Commands ---

    /// Move along the body heading; negative distance backs up.
    fn ahead(&mut self, distance: f64);
    /// Rotate the body counterclockwise.
    fn turn_left(&mut self, degrees: f64);
    /// Rotate the body clockwise.
    fn turn_right(&mut self, degrees: f64);
    /// Rotate the gun clockwise.
    fn turn_gun_right(&mut self, degrees: f64);
    /// Rotate the radar counterclockwise.
    fn turn_radar_left(&mut self, degrees: f64);
    /// Fire a projectile with the given power.
    fn fire(&mut self, power: f64);
    /// Switch the displayed paint scheme.
    fn set_livery(&mut self, livery: Livery);
    /// Keep the gun heading independent of body turns.
    fn set_adjust_gun_for_body_turn(&mut self, enabled: bool);
    /// Keep the radar heading independent of body turns.
    fn set_adjust_radar_for_body_turn(&mut self, enabled: bool);
}

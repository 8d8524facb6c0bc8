//! Headless duel harness for the SKIRMISH robot.
//!
//! Not a battle engine: a stub host with instant-resolution kinematics, a
//! scripted drone opponent, and a deterministic driver loop, used by the
//! demo binary and the integration tests.

pub mod arena;
pub mod drone;
pub mod duel;

//! SKIRMISH robot controller.
//!
//! Decision logic for a single autonomous combat robot: a one-shot movement
//! state machine plus predictive gun targeting. The host battle engine is
//! reached only through the [`hull::Hull`] trait, so the controller runs
//! unchanged against a live engine or a test double.

pub mod controller;
pub mod hull;
pub mod targeting;

pub use skirmish_core as core;

#[cfg(test)]
mod tests;

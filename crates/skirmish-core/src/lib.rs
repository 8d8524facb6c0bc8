//! Core types and definitions for the SKIRMISH robot.
//!
//! This crate defines the vocabulary shared by the controller and any host
//! harness: angle helpers, state enums, host events, bot commands, and
//! tuning constants. It has no dependency on any runtime framework.

pub mod angles;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;

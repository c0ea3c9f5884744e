//! Ayo Arena - a match runner for Ayo bots.
//!
//! This crate plays series of games between two computer players and
//! reports the results.
//!
//! # Modules
//!
//! - [`config`] - `arena.toml` loading: named players and match presets
//! - [`game_runner`] - Game and match execution
//! - [`json_output`] - JSON match reports
//! - [`tutorial`] - How-to-play text

pub mod config;
pub mod game_runner;
pub mod json_output;
pub mod tutorial;

//! Core types for Ayo.
//!
//! This crate provides the fundamental types used across the Ayo engine:
//! - [`Side`] for the two players
//! - [`Pit`] for board coordinates
//! - Position notation parsing and serialization

mod notation;
mod pit;
mod side;

pub use notation::{Notation, NotationError};
pub use pit::{Pit, PitError};
pub use side::Side;

//! Quiz attempt state machine
//!
//! This crate implements the progression of a single quiz attempt and
//! nothing else: no rendering, no input handling, no async. An [`Attempt`]
//! moves through an explicit tagged union of destinations ([`Phase`]) so
//! there is exactly one active destination at any time.

mod attempt;

pub use attempt::{Advance, Attempt, Phase};

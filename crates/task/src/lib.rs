#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Pick-and-Lift Task Definition
//!
//! Declares the pick-and-lift manipulation task over a [`scene::Scene`]:
//! which objects are graspable targets and which are distractors, the
//! boundary blocks spawn in, and the success condition the simulator
//! evaluates each step. Episode setup resamples non-overlapping positions
//! for every block and hands back the natural-language instruction
//! variants.

use thiserror::Error;

pub mod boundary;
pub mod colors;
pub mod conditions;
pub mod pick_and_lift;

pub use boundary::SpawnBoundary;
pub use conditions::{Condition, ConditionSet, DetectedCondition};
pub use pick_and_lift::PickAndLift;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error(transparent)]
    Scene(#[from] scene::SceneError),
    #[error("could not place `{name}` inside the spawn boundary after {attempts} attempts")]
    PlacementFailed { name: String, attempts: usize },
}

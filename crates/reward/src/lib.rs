#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Per-Timestep Reward for Pick-and-Lift
//!
//! Computes a scalar reward each simulation step from live scene state.
//! Scene objects are partitioned once per episode into five role sets —
//! targets, distractors, table surfaces, the goal-area sensor, and the
//! gripper's collidable parts — via an explicit [`RoleMap`] configuration
//! table. Each step, [`RewardTracker::step_reward`] sums a fixed table of
//! deltas: reaching the goal scores, touching the table or a distractor
//! penalises, and clearing every target pays a completion bonus.
//!
//! The only mutable state is the remaining-targets set, which shrinks as
//! targets reach the goal area and never grows within an episode.

pub mod roles;
pub mod tracker;

pub use roles::{RoleMap, Roles};
pub use tracker::RewardTracker;

/// Scored once per step in which any remaining target reaches the goal.
pub const GOAL_REWARD: f32 = 100.0;
/// Scored on every step after the last target has reached the goal.
pub const FINISHED_REWARD: f32 = 500.0;
/// Deducted when any table surface collides with any gripper part.
pub const TABLE_COLLISION_PENALTY: f32 = 20.0;
/// Deducted when any distractor collides with any gripper part.
pub const DISTRACTOR_COLLISION_PENALTY: f32 = 5.0;
/// Default per-step penalty when time-dependent shaping is enabled.
pub const DEFAULT_TIME_PENALTY: f32 = 0.05;

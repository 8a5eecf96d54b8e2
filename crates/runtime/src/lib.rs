#![deny(clippy::all, clippy::pedantic)]
//! # Episode Harness
//!
//! Runs scripted pick-and-lift episodes against the mock scene: a simple
//! controller carries one remaining target toward the goal volume each
//! step while the reward tracker scores the run. Camera snapshots are
//! synthesized since the mock scene has no renderer.

use reward::RewardTracker;
use scene::Scene;
use task::PickAndLift;
use viz::{DepthFrame, Observation, RgbFrame, VizError};

/// JSON layout of the pick-and-lift scene.
pub const FIXTURE: &str = include_str!("../fixtures/pick_and_lift.json");

/// Fraction of the remaining distance to the goal covered per step.
const CARRY_RATE: f32 = 0.25;

pub struct EpisodeOutcome {
    pub steps: u32,
    pub total_reward: f32,
    pub success: bool,
}

/// Step the scripted controller until the task succeeds or `max_steps`
/// runs out, accumulating the per-step rewards.
pub fn run_episode(
    scene: &mut dyn Scene,
    task: &PickAndLift,
    tracker: &mut RewardTracker,
    max_steps: u32,
) -> EpisodeOutcome {
    let goal = scene.position(task.success_sensor());
    let mut total_reward = 0.0;
    let mut steps = 0;

    for step in 0..max_steps {
        if let Some(&target) = tracker.remaining_targets().first() {
            let pos = scene.position(target);
            scene.set_position(target, pos + (goal - pos).scale(CARRY_RATE));
        }

        let reward = tracker.step_reward(scene);
        total_reward += reward;
        steps = step + 1;
        tracing::debug!(step, reward, total_reward, "step complete");

        if task.success(scene) {
            tracing::info!(step, total_reward, "all targets lifted to the goal");
            return EpisodeOutcome {
                steps,
                total_reward,
                success: true,
            };
        }
    }

    EpisodeOutcome {
        steps,
        total_reward,
        success: false,
    }
}

/// Build a synthetic four-camera observation: per-view RGB gradients and
/// radial depth falloff, stand-ins for real render buffers.
pub fn synthetic_observation(width: u32, height: u32) -> Result<Observation, VizError> {
    let rgb = |phase: f32| synthetic_rgb(width, height, phase);
    let depth = |near: f32| synthetic_depth(width, height, near);
    Ok(Observation {
        left_shoulder_rgb: rgb(0.0)?,
        left_shoulder_depth: depth(0.8)?,
        right_shoulder_rgb: rgb(0.25)?,
        right_shoulder_depth: depth(0.8)?,
        wrist_rgb: rgb(0.5)?,
        wrist_depth: depth(0.2)?,
        front_rgb: rgb(0.75)?,
        front_depth: depth(1.1)?,
    })
}

fn synthetic_rgb(width: u32, height: u32, phase: f32) -> Result<RgbFrame, VizError> {
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            #[allow(clippy::cast_precision_loss)]
            let (u, v) = (
                x as f32 / (width - 1).max(1) as f32,
                y as f32 / (height - 1).max(1) as f32,
            );
            data.extend_from_slice(&[u, v, phase]);
        }
    }
    RgbFrame::new(width, height, data)
}

fn synthetic_depth(width: u32, height: u32, near: f32) -> Result<DepthFrame, VizError> {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            #[allow(clippy::cast_precision_loss)]
            let (u, v) = (
                x as f32 / (width - 1).max(1) as f32 - 0.5,
                y as f32 / (height - 1).max(1) as f32 - 0.5,
            );
            data.push(near + (u * u + v * v).sqrt());
        }
    }
    DepthFrame::new(width, height, data)
}

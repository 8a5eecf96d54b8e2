//! Reward accumulation over an episode.

use crate::roles::{RoleMap, Roles};
use crate::{
    DISTRACTOR_COLLISION_PENALTY, FINISHED_REWARD, GOAL_REWARD, TABLE_COLLISION_PENALTY,
};
use scene::{ObjectId, Scene, SceneError};

/// Tracks which targets still have to reach the goal area and turns the
/// scene's current collision/detection state into a scalar reward, once
/// per simulation step.
pub struct RewardTracker {
    roles: Roles,
    remaining: Vec<ObjectId>,
    time_penalty: Option<f32>,
}

impl RewardTracker {
    /// Resolve the role map against the scene and start an episode with
    /// the full target set remaining.
    pub fn new(scene: &dyn Scene, roles: &RoleMap) -> Result<Self, SceneError> {
        let roles = roles.resolve(scene)?;
        let remaining = roles.targets.clone();
        Ok(Self {
            roles,
            remaining,
            time_penalty: None,
        })
    }

    /// Enable time-dependent shaping: every step that does not score a
    /// goal is penalised by `penalty`.
    #[must_use]
    pub fn with_time_penalty(mut self, penalty: f32) -> Self {
        self.time_penalty = Some(penalty);
        self
    }

    /// Targets that have not reached the goal area yet. Non-increasing
    /// within an episode.
    #[must_use]
    pub fn remaining_targets(&self) -> &[ObjectId] {
        &self.remaining
    }

    /// Whether any table surface currently collides with any gripper part.
    #[must_use]
    pub fn check_table_collision(&self, scene: &dyn Scene) -> bool {
        any_collision(scene, &self.roles.table, &self.roles.gripper_parts)
    }

    /// Whether any distractor currently collides with any gripper part.
    #[must_use]
    pub fn check_distractor_collision(&self, scene: &dyn Scene) -> bool {
        any_collision(scene, &self.roles.distractors, &self.roles.gripper_parts)
    }

    /// Whether any remaining target is inside the goal area.
    #[must_use]
    pub fn check_goal(&self, scene: &dyn Scene) -> bool {
        self.remaining
            .iter()
            .any(|&t| scene.is_detected(self.roles.goal_area, t))
    }

    /// Drop every detected target from the remaining set. Removal goes
    /// through `retain`, so two targets arriving in the same step are both
    /// dropped.
    pub fn update_goal(&mut self, scene: &dyn Scene) {
        let sensor = self.roles.goal_area;
        self.remaining.retain(|&t| !scene.is_detected(sensor, t));
    }

    /// Whether every target has reached the goal area.
    #[must_use]
    pub fn check_finished(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Reward for the current step. The checks are independent and
    /// additive: one step can score the goal, take collision penalties,
    /// and earn the completion bonus all at once.
    pub fn step_reward(&mut self, scene: &dyn Scene) -> f32 {
        let mut reward = 0.0;

        if self.check_goal(scene) {
            reward += GOAL_REWARD;
            self.update_goal(scene);
            tracing::info!(
                remaining = self.remaining.len(),
                "target reached the goal area"
            );
        } else if let Some(penalty) = self.time_penalty {
            reward -= penalty;
        }

        if self.check_table_collision(scene) {
            reward -= TABLE_COLLISION_PENALTY;
            tracing::debug!("gripper collided with the table");
        }

        if self.check_distractor_collision(scene) {
            reward -= DISTRACTOR_COLLISION_PENALTY;
            tracing::debug!("gripper collided with a distractor");
        }

        if self.check_finished() {
            reward += FINISHED_REWARD;
        }

        reward
    }
}

fn any_collision(scene: &dyn Scene, objects: &[ObjectId], parts: &[ObjectId]) -> bool {
    objects
        .iter()
        .any(|&obj| parts.iter().any(|&part| scene.check_collision(obj, part)))
}

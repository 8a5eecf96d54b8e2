//! The pick-and-lift task: move three target blocks into the goal volume.

use crate::boundary::SpawnBoundary;
use crate::colors;
use crate::conditions::{Condition, ConditionSet, DetectedCondition};
use crate::TaskError;
use scene::{ObjectId, Scene};

/// Scene names of the three target shapes.
pub const TARGET_NAMES: [&str; 3] = [
    "pick_and_lift_target_cube",
    "pick_and_lift_target_cuboid",
    "pick_and_lift_target_disk",
];

/// Number of distractor blocks in the scene (`distractor0` .. `distractor6`).
pub const DISTRACTOR_COUNT: usize = 7;

/// Minimum separation between spawned blocks, in scene units.
pub const MIN_BLOCK_SPACING: f32 = 0.1;

#[derive(Debug)]
pub struct PickAndLift {
    targets: [ObjectId; 3],
    distractors: Vec<ObjectId>,
    graspable: Vec<ObjectId>,
    boundary: SpawnBoundary,
    success_sensor: ObjectId,
    success_condition: ConditionSet,
}

impl PickAndLift {
    /// Resolve the task's named objects from the scene and build the
    /// success condition: all three targets simultaneously inside the
    /// success sensor's volume. A scene missing any required name fails
    /// here, before the first episode starts.
    pub fn new(scene: &dyn Scene) -> Result<Self, TaskError> {
        let targets = [
            scene.require(TARGET_NAMES[0])?,
            scene.require(TARGET_NAMES[1])?,
            scene.require(TARGET_NAMES[2])?,
        ];
        let distractors = (0..DISTRACTOR_COUNT)
            .map(|i| scene.require(&format!("distractor{i}")))
            .collect::<Result<Vec<_>, _>>()?;

        let boundary = SpawnBoundary::new(scene.require("pick_and_lift_boundary")?);
        let success_sensor = scene.require("pick_and_lift_success")?;

        let success_condition = ConditionSet::new(
            targets
                .iter()
                .map(|&object| {
                    Box::new(DetectedCondition {
                        object,
                        sensor: success_sensor,
                    }) as Box<dyn Condition>
                })
                .collect(),
        );

        tracing::debug!(
            targets = targets.len(),
            distractors = distractors.len(),
            "pick-and-lift task initialised"
        );

        Ok(Self {
            targets,
            distractors,
            graspable: targets.to_vec(),
            boundary,
            success_sensor,
            success_condition,
        })
    }

    /// Start an episode variation: resample non-overlapping positions for
    /// every target and distractor inside the spawn boundary, then return
    /// the instruction variants.
    ///
    /// The instruction color is the literal `"red"` for every variation
    /// index, matching the scene's current block texture.
    // TODO: thread the palette color for `index` into the instruction text.
    pub fn init_episode(
        &mut self,
        scene: &mut dyn Scene,
        index: usize,
    ) -> Result<Vec<String>, TaskError> {
        let _ = index;
        self.boundary.clear();
        for &block in self.targets.iter().chain(self.distractors.iter()) {
            self.boundary.sample(scene, block, MIN_BLOCK_SPACING)?;
        }

        let color = "red";
        Ok(vec![
            format!("pick up the {color} block and lift it up to the target"),
            format!("grasp the {color} block to the target"),
            format!("lift the {color} block up to the target"),
        ])
    }

    /// Number of selectable variations, one per palette color.
    #[must_use]
    pub fn variation_count(&self) -> usize {
        colors::ALL.len()
    }

    /// The workspace geometry does not change between episodes.
    #[must_use]
    pub fn is_static_workspace(&self) -> bool {
        true
    }

    /// Objects the gripper is allowed to grasp.
    #[must_use]
    pub fn graspable_objects(&self) -> &[ObjectId] {
        &self.graspable
    }

    #[must_use]
    pub fn targets(&self) -> &[ObjectId; 3] {
        &self.targets
    }

    #[must_use]
    pub fn distractors(&self) -> &[ObjectId] {
        &self.distractors
    }

    #[must_use]
    pub fn success_sensor(&self) -> ObjectId {
        self.success_sensor
    }

    /// Evaluate the success condition against the current scene state.
    #[must_use]
    pub fn success(&self, scene: &dyn Scene) -> bool {
        self.success_condition.satisfied(scene)
    }
}

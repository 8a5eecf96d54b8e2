//! Success conditions evaluated against the live scene.

use scene::{ObjectId, Scene};

/// A boolean predicate over the current scene state. The simulator's outer
/// loop evaluates the task's condition each step to decide episode end.
pub trait Condition {
    fn satisfied(&self, scene: &dyn Scene) -> bool;
}

/// Satisfied while `object` sits inside `sensor`'s detection volume.
pub struct DetectedCondition {
    pub object: ObjectId,
    pub sensor: ObjectId,
}

impl Condition for DetectedCondition {
    fn satisfied(&self, scene: &dyn Scene) -> bool {
        scene.is_detected(self.sensor, self.object)
    }
}

/// Logical AND over a fixed set of leaf conditions.
pub struct ConditionSet {
    conditions: Vec<Box<dyn Condition>>,
}

impl std::fmt::Debug for ConditionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConditionSet")
            .field("len", &self.conditions.len())
            .finish()
    }
}

impl ConditionSet {
    #[must_use]
    pub fn new(conditions: Vec<Box<dyn Condition>>) -> Self {
        Self { conditions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl Condition for ConditionSet {
    fn satisfied(&self, scene: &dyn Scene) -> bool {
        self.conditions.iter().all(|c| c.satisfied(scene))
    }
}

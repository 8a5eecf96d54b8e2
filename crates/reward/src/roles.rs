//! Mapping from scene object names to reward roles.

use scene::{ObjectId, Scene, SceneError};

/// Name lists for the five reward roles, kept as an explicit configuration
/// table so the scene-name-to-role mapping is visible and testable rather
/// than buried in lookup code. [`RoleMap::default`] is the pick-and-lift
/// scene's table.
#[derive(Clone, Debug)]
pub struct RoleMap {
    pub targets: Vec<String>,
    pub distractors: Vec<String>,
    pub table: Vec<String>,
    pub goal_area: String,
    pub gripper_parts: Vec<String>,
}

impl Default for RoleMap {
    fn default() -> Self {
        Self {
            targets: names(&[
                "pick_and_lift_target_cube",
                "pick_and_lift_target_disk",
                "pick_and_lift_target_cuboid",
            ]),
            distractors: names(&[
                "disc_base",
                "distractor1",
                "distractor2",
                "distractor3",
                "distractor4",
                "distractor5",
                "distractor6",
            ]),
            table: names(&["workspace", "diningTable_visible"]),
            goal_area: "pick_and_lift_success".to_string(),
            gripper_parts: names(&[
                "Panda_gripper_visual",
                "Panda_rightfinger_visual",
                "Panda_leftfinger_visible",
            ]),
        }
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

impl RoleMap {
    /// Resolve every role name against the scene's object tree. Any absent
    /// name is a setup error; role sets are never silently left empty.
    pub fn resolve(&self, scene: &dyn Scene) -> Result<Roles, SceneError> {
        Ok(Roles {
            targets: resolve_all(scene, &self.targets)?,
            distractors: resolve_all(scene, &self.distractors)?,
            table: resolve_all(scene, &self.table)?,
            goal_area: scene.require(&self.goal_area)?,
            gripper_parts: resolve_all(scene, &self.gripper_parts)?,
        })
    }
}

fn resolve_all(scene: &dyn Scene, names: &[String]) -> Result<Vec<ObjectId>, SceneError> {
    names.iter().map(|name| scene.require(name)).collect()
}

/// Resolved role sets, cached for the episode's lifetime.
pub struct Roles {
    pub targets: Vec<ObjectId>,
    pub distractors: Vec<ObjectId>,
    pub table: Vec<ObjectId>,
    pub goal_area: ObjectId,
    pub gripper_parts: Vec<ObjectId>,
}

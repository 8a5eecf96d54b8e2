//! Declarative JSON scene layouts.
//!
//! A fixture describes the object tree of a task scene as data, so the
//! harness and tests can share one layout instead of rebuilding it
//! imperatively.

use crate::mock::MockScene;
use crate::types::{ObjectType, Vec3};
use crate::SceneError;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SceneDescription {
    pub objects: Vec<ObjectDef>,
}

#[derive(Deserialize)]
pub struct ObjectDef {
    pub name: String,
    pub kind: ObjectType,
    #[serde(default)]
    pub collidable: bool,
    #[serde(default = "zero_vec")]
    pub pos: [f32; 3],
    #[serde(default = "zero_vec")]
    pub extent: [f32; 3],
}

fn zero_vec() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

impl SceneDescription {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn into_scene(self) -> MockScene {
        let mut scene = MockScene::new();
        for def in self.objects {
            scene.add_object(
                &def.name,
                def.kind,
                def.collidable,
                Vec3::from(def.pos),
                Vec3::from(def.extent),
            );
        }
        scene
    }
}

impl MockScene {
    /// Parse a JSON scene description directly into a mock scene.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(SceneDescription::from_json(json)?.into_scene())
    }
}

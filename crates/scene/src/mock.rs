//! In-memory scene used by tests and the episode harness.
//!
//! The mock keeps the object tree as a flat list and treats collision
//! state as an explicit pair set, so a test can flip "gripper touches the
//! table" on and off without simulating contact dynamics. Proximity
//! detection stays geometric: an object is detected when its position lies
//! inside the sensor's axis-aligned volume.

use crate::types::{ObjectId, ObjectType, Vec3};
use crate::Scene;
use std::collections::HashSet;

struct ObjectRecord {
    name: String,
    kind: ObjectType,
    collidable: bool,
    pos: Vec3,
    extent: Vec3,
}

#[derive(Default)]
pub struct MockScene {
    objects: Vec<ObjectRecord>,
    colliding: HashSet<(u32, u32)>,
}

impl MockScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the tree and return its handle.
    pub fn add_object(
        &mut self,
        name: &str,
        kind: ObjectType,
        collidable: bool,
        pos: Vec3,
        extent: Vec3,
    ) -> ObjectId {
        let id = ObjectId(u32::try_from(self.objects.len()).unwrap_or(u32::MAX));
        self.objects.push(ObjectRecord {
            name: name.to_string(),
            kind,
            collidable,
            pos,
            extent,
        });
        id
    }

    /// Set or clear the collision flag for a pair of objects. The pair is
    /// stored unordered, so `check_collision` stays symmetric.
    pub fn set_colliding(&mut self, a: ObjectId, b: ObjectId, colliding: bool) {
        let pair = Self::pair(a, b);
        if colliding {
            self.colliding.insert(pair);
        } else {
            self.colliding.remove(&pair);
        }
    }

    fn pair(a: ObjectId, b: ObjectId) -> (u32, u32) {
        if a.0 <= b.0 {
            (a.0, b.0)
        } else {
            (b.0, a.0)
        }
    }

    fn record(&self, id: ObjectId) -> &ObjectRecord {
        &self.objects[id.0 as usize]
    }
}

impl Scene for MockScene {
    fn objects(&self) -> Vec<ObjectId> {
        (0..self.objects.len())
            .map(|i| ObjectId(u32::try_from(i).unwrap_or(u32::MAX)))
            .collect()
    }

    fn name(&self, id: ObjectId) -> &str {
        &self.record(id).name
    }

    fn object_type(&self, id: ObjectId) -> ObjectType {
        self.record(id).kind
    }

    fn is_collidable(&self, id: ObjectId) -> bool {
        self.record(id).collidable
    }

    fn position(&self, id: ObjectId) -> Vec3 {
        self.record(id).pos
    }

    fn set_position(&mut self, id: ObjectId, pos: Vec3) {
        self.objects[id.0 as usize].pos = pos;
    }

    fn extent(&self, id: ObjectId) -> Vec3 {
        self.record(id).extent
    }

    fn check_collision(&self, a: ObjectId, b: ObjectId) -> bool {
        self.colliding.contains(&Self::pair(a, b))
    }

    fn is_detected(&self, sensor: ObjectId, object: ObjectId) -> bool {
        let volume = self.record(sensor);
        let pos = self.record(object).pos;
        let d = pos - volume.pos;
        d.x.abs() <= volume.extent.x && d.y.abs() <= volume.extent.y && d.z.abs() <= volume.extent.z
    }
}

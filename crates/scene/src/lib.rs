#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Scene Capability Interface
//!
//! This crate models the external robot simulator as a minimal trait
//! boundary. Task and reward code never talks to a concrete simulator
//! type; it holds [`ObjectId`] handles into a [`Scene`] and asks only the
//! questions it needs: object names and tags, poses, pairwise collision
//! state, and proximity detection.
//!
//! ## Key Components
//!
//! -   **Handles:** [`ObjectId`] is an opaque, copyable, non-owning
//!     reference into a scene's object tree. [`ObjectType`] tags what kind
//!     of simulator object a handle refers to.
//! -   **Queries:** The [`Scene`] trait exposes the object-tree listing and
//!     per-object queries, plus the provided [`Scene::find`] and
//!     [`Scene::require`] name lookups.
//! -   **Mock backend:** [`MockScene`] is an in-memory implementation used
//!     by tests and the episode harness. Its collision state is set
//!     explicitly; detection is geometric against a sensor's axis-aligned
//!     volume.
//! -   **Fixtures:** [`SceneDescription`] parses a JSON scene layout into a
//!     [`MockScene`], so a full task scene can live in a data file.

use thiserror::Error;

pub mod fixture;
pub mod mock;
pub mod types;

pub use fixture::{ObjectDef, SceneDescription};
pub use mock::MockScene;
pub use types::{ObjectId, ObjectType, Vec3};

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("no object named `{0}` in the scene tree")]
    MissingObject(String),
    #[error("invalid scene description: {0}")]
    Fixture(#[from] serde_json::Error),
}

/// Read/write access to a live simulated scene.
///
/// Handles passed to the per-object methods must originate from the same
/// scene's [`objects`] listing; implementations may panic on foreign
/// handles.
///
/// [`objects`]: Scene::objects
pub trait Scene {
    /// Full object-tree listing, in scene order.
    fn objects(&self) -> Vec<ObjectId>;

    /// Unique name of the object.
    fn name(&self, id: ObjectId) -> &str;

    /// Simulator type tag of the object.
    fn object_type(&self, id: ObjectId) -> ObjectType;

    /// Whether the simulator considers this object for collision tests.
    fn is_collidable(&self, id: ObjectId) -> bool;

    /// World position of the object's frame.
    fn position(&self, id: ObjectId) -> Vec3;

    /// Teleport the object's frame to a new world position.
    fn set_position(&mut self, id: ObjectId, pos: Vec3);

    /// Half-extents of the object's volume. For proximity sensors this is
    /// the detection volume; for boundary regions, the sampling volume.
    fn extent(&self, id: ObjectId) -> Vec3;

    /// Symmetric pairwise collision test between two objects.
    fn check_collision(&self, a: ObjectId, b: ObjectId) -> bool;

    /// Whether `object` currently lies inside `sensor`'s detection volume.
    fn is_detected(&self, sensor: ObjectId, object: ObjectId) -> bool;

    /// Look up an object by exact name.
    fn find(&self, name: &str) -> Option<ObjectId> {
        self.objects().into_iter().find(|&id| self.name(id) == name)
    }

    /// Look up an object by exact name, failing fast when the scene does
    /// not contain it. Task and reward setup use this so a misnamed scene
    /// surfaces as a descriptive error instead of an empty role set.
    fn require(&self, name: &str) -> Result<ObjectId, SceneError> {
        self.find(name)
            .ok_or_else(|| SceneError::MissingObject(name.to_string()))
    }
}

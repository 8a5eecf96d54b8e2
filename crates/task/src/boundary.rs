//! Random placement of objects inside a boundary region.

use crate::TaskError;
use scene::{ObjectId, Scene, Vec3};

/// Candidates drawn per object before placement gives up.
pub const MAX_SAMPLE_ATTEMPTS: usize = 100;

/// Wraps a boundary region object and places blocks at random
/// non-overlapping positions inside it. Placements accumulate until
/// [`clear`] is called at the start of the next episode.
///
/// [`clear`]: SpawnBoundary::clear
#[derive(Debug)]
pub struct SpawnBoundary {
    region: ObjectId,
    placed: Vec<Vec3>,
}

impl SpawnBoundary {
    #[must_use]
    pub fn new(region: ObjectId) -> Self {
        Self {
            region,
            placed: Vec::new(),
        }
    }

    /// Forget the previous episode's placements.
    pub fn clear(&mut self) {
        self.placed.clear();
    }

    /// Place `object` at a uniform random position on the region's plane,
    /// at least `min_distance` away from every earlier placement. Sampling
    /// is rejection-based with a bounded attempt count.
    pub fn sample(
        &mut self,
        scene: &mut dyn Scene,
        object: ObjectId,
        min_distance: f32,
    ) -> Result<(), TaskError> {
        let center = scene.position(self.region);
        let extent = scene.extent(self.region);

        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let x = center.x + (fastrand::f32() * 2.0 - 1.0) * extent.x;
            let z = center.z + (fastrand::f32() * 2.0 - 1.0) * extent.z;
            let candidate = Vec3::new(x, center.y, z);

            if self
                .placed
                .iter()
                .all(|p| p.distance(candidate) >= min_distance)
            {
                scene.set_position(object, candidate);
                self.placed.push(candidate);
                return Ok(());
            }
        }

        Err(TaskError::PlacementFailed {
            name: scene.name(object).to_string(),
            attempts: MAX_SAMPLE_ATTEMPTS,
        })
    }
}

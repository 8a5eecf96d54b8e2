//! Multi-camera observation snapshots.

use crate::frame::{hstack_depth, hstack_rgb, save_depth, save_rgb, DepthFrame, RgbFrame};
use crate::VizError;
use std::path::Path;

/// One timestep's camera buffers: RGB and depth for the left-shoulder,
/// right-shoulder, wrist, and front viewpoints. Read-only input to the
/// stacking and save helpers.
pub struct Observation {
    pub left_shoulder_rgb: RgbFrame,
    pub left_shoulder_depth: DepthFrame,
    pub right_shoulder_rgb: RgbFrame,
    pub right_shoulder_depth: DepthFrame,
    pub wrist_rgb: RgbFrame,
    pub wrist_depth: DepthFrame,
    pub front_rgb: RgbFrame,
    pub front_depth: DepthFrame,
}

impl Observation {
    /// All four RGB viewpoints side by side, left-shoulder first.
    pub fn stacked_rgb(&self) -> Result<RgbFrame, VizError> {
        hstack_rgb(&[
            &self.left_shoulder_rgb,
            &self.right_shoulder_rgb,
            &self.wrist_rgb,
            &self.front_rgb,
        ])
    }

    /// All four depth viewpoints side by side, left-shoulder first.
    pub fn stacked_depth(&self) -> Result<DepthFrame, VizError> {
        hstack_depth(&[
            &self.left_shoulder_depth,
            &self.right_shoulder_depth,
            &self.wrist_depth,
            &self.front_depth,
        ])
    }

    /// Stack the RGB viewpoints and save them as `<name>.png`.
    pub fn save_all_rgb(&self, name: impl AsRef<Path>) -> Result<(), VizError> {
        save_rgb(&self.stacked_rgb()?, name)
    }

    /// Stack the depth viewpoints and save them as `<name>.png`.
    pub fn save_all_depth(&self, name: impl AsRef<Path>) -> Result<(), VizError> {
        save_depth(&self.stacked_depth()?, name)
    }
}

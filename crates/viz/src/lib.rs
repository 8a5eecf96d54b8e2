#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Camera Frame Visualization
//!
//! Stateless helpers that turn raw float camera buffers into 8-bit PNG
//! images. RGB frames are scaled directly from `[0, 1]`; depth frames are
//! min-max normalized per call. [`Observation`] bundles the four task
//! viewpoints and stacks them side by side before encoding.

use thiserror::Error;

pub mod frame;
pub mod observation;

pub use frame::{hstack_depth, hstack_rgb, save_depth, save_rgb, DepthFrame, RgbFrame};
pub use observation::Observation;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("frame buffer has {got} values, expected {width}x{height}x{channels}")]
    BadLength {
        width: u32,
        height: u32,
        channels: u32,
        got: usize,
    },
    #[error("zero-sized frame")]
    EmptyFrame,
    #[error("nothing to stack")]
    EmptyStack,
    #[error("stacked frame heights differ: {0} vs {1}")]
    HeightMismatch(u32, u32),
    #[error(transparent)]
    Encode(#[from] image::ImageError),
}

//! Float camera frames and their 8-bit conversions.

use crate::VizError;
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::Path;

/// Scale factor from `[0, 1]` floats to 8-bit channels. Truncation after
/// the scale maps 1.0 to 255 without a separate clamp at the top end.
const CHANNEL_SCALE: f32 = 255.999;

/// Gray level emitted for a depth frame with no contrast (min == max),
/// where min-max normalization is undefined.
pub const FLAT_DEPTH_GRAY: u8 = 128;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantize(value: f32) -> u8 {
    (value * CHANNEL_SCALE).clamp(0.0, 255.0) as u8
}

/// Interleaved RGB float frame, channels in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct RgbFrame {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl RgbFrame {
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Result<Self, VizError> {
        check_len(width, height, 3, &data)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Quantize to an 8-bit RGB image.
    #[must_use]
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let base = ((y * self.width + x) * 3) as usize;
            Rgb([
                quantize(self.data[base]),
                quantize(self.data[base + 1]),
                quantize(self.data[base + 2]),
            ])
        })
    }
}

/// Single-channel float depth frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthFrame {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl DepthFrame {
    pub fn new(width: u32, height: u32, data: Vec<f32>) -> Result<Self, VizError> {
        check_len(width, height, 1, &data)?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Min-max normalize and quantize to an 8-bit grayscale image. A frame
    /// with no contrast comes out as uniform [`FLAT_DEPTH_GRAY`].
    #[must_use]
    pub fn to_image(&self) -> GrayImage {
        let min = self.data.iter().copied().fold(f32::INFINITY, f32::min);
        let max = self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        if max - min <= f32::EPSILON {
            return GrayImage::from_pixel(self.width, self.height, Luma([FLAT_DEPTH_GRAY]));
        }
        let span = max - min;
        GrayImage::from_fn(self.width, self.height, |x, y| {
            let value = self.data[(y * self.width + x) as usize];
            Luma([quantize((value - min) / span)])
        })
    }
}

fn check_len(width: u32, height: u32, channels: u32, data: &[f32]) -> Result<(), VizError> {
    if width == 0 || height == 0 {
        return Err(VizError::EmptyFrame);
    }
    let expected = width as usize * height as usize * channels as usize;
    if data.len() != expected {
        return Err(VizError::BadLength {
            width,
            height,
            channels,
            got: data.len(),
        });
    }
    Ok(())
}

/// Save an RGB frame as `<name>.png`.
pub fn save_rgb(frame: &RgbFrame, name: impl AsRef<Path>) -> Result<(), VizError> {
    let path = name.as_ref().with_extension("png");
    frame.to_image().save(path)?;
    Ok(())
}

/// Save a depth frame as `<name>.png`.
pub fn save_depth(frame: &DepthFrame, name: impl AsRef<Path>) -> Result<(), VizError> {
    let path = name.as_ref().with_extension("png");
    frame.to_image().save(path)?;
    Ok(())
}

/// Concatenate RGB frames left to right.
pub fn hstack_rgb(frames: &[&RgbFrame]) -> Result<RgbFrame, VizError> {
    let (width, height, data) = hstack(
        frames.iter().map(|f| (f.width, f.height, f.data.as_slice())),
        3,
    )?;
    RgbFrame::new(width, height, data)
}

/// Concatenate depth frames left to right.
pub fn hstack_depth(frames: &[&DepthFrame]) -> Result<DepthFrame, VizError> {
    let (width, height, data) = hstack(
        frames.iter().map(|f| (f.width, f.height, f.data.as_slice())),
        1,
    )?;
    DepthFrame::new(width, height, data)
}

fn hstack<'a>(
    frames: impl Iterator<Item = (u32, u32, &'a [f32])>,
    channels: u32,
) -> Result<(u32, u32, Vec<f32>), VizError> {
    let frames: Vec<_> = frames.collect();
    let Some(&(_, height, _)) = frames.first() else {
        return Err(VizError::EmptyStack);
    };
    for &(_, h, _) in &frames {
        if h != height {
            return Err(VizError::HeightMismatch(height, h));
        }
    }

    let out_width: u32 = frames.iter().map(|&(w, _, _)| w).sum();
    let row_len = |w: u32| w as usize * channels as usize;
    let mut data = Vec::with_capacity(row_len(out_width) * height as usize);
    for y in 0..height as usize {
        for &(w, _, src) in &frames {
            let row = row_len(w);
            data.extend_from_slice(&src[y * row..(y + 1) * row]);
        }
    }
    Ok((out_width, height, data))
}

//! Converts pipeline buffers into frames the renderer can show.
//!
//! The display surfaces have fixed dimensions, matching the window layout;
//! resizing is exact and may distort the aspect ratio. The renderer consumes
//! interleaved RGBA bytes, so the adapter appends a constant alpha channel to
//! the pipeline's RGB buffers. That channel transform is invertible, see
//! [`DisplayFrame::to_rgb8`].

use image::{DynamicImage, RgbImage, RgbaImage, imageops};

/// Fixed size of the annotated-image surface.
pub const ANNOTATED_TARGET: (u32, u32) = (250, 200);
/// Fixed size of the enlarged-plate surface.
pub const PLATE_TARGET: (u32, u32) = (200, 50);

/// An image resized and converted for on-screen rendering.
#[derive(Debug, Clone)]
pub struct DisplayFrame {
    pub width: u32,
    pub height: u32,
    /// Interleaved RGBA bytes, row-major.
    pub pixels: Vec<u8>,
}

impl DisplayFrame {
    /// Invert the channel conversion, dropping the constant alpha.
    ///
    /// Round-tripping through [`prepare_for_display`] at the image's own
    /// dimensions is lossless.
    pub fn to_rgb8(&self) -> RgbImage {
        let rgba = RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .expect("frame dimensions match its pixel buffer");
        DynamicImage::ImageRgba8(rgba).to_rgb8()
    }
}

/// Resize `image` to exactly `target` and convert it to renderer byte order.
pub fn prepare_for_display(image: &RgbImage, target: (u32, u32)) -> DisplayFrame {
    let (width, height) = target;
    let resized = if image.dimensions() == target {
        image.clone()
    } else {
        imageops::resize(image, width, height, imageops::FilterType::Triangle)
    };
    let rgba = DynamicImage::ImageRgb8(resized).to_rgba8();

    DisplayFrame {
        width,
        height,
        pixels: rgba.into_raw(),
    }
}

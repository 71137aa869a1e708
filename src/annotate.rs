//! Draws detection overlays and extracts the plate region.
//!
//! The original image is never mutated: drawing happens on a copy, and the
//! crop is taken from the unannotated source so the enlarged plate stays
//! clean. The recognized text is deliberately not rasterized onto the image;
//! a plain marker tab points at the box instead, and the full string (which
//! may be non-Latin) goes to the text widget.

use image::{DynamicImage, Rgb, RgbImage, imageops};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::error::PipelineError;
use crate::models::Detection;

/// Height of the marker tab drawn above a detection box.
const MARKER_HEIGHT: u32 = 6;
/// Gap between the marker tab and the box's top edge.
const MARKER_GAP: i32 = 4;
/// Widest the marker tab gets, regardless of box width.
const MARKER_MAX_WIDTH: u32 = 40;

/// Annotation settings.
#[derive(Debug, Clone)]
pub struct AnnotateConfig {
    /// Horizontal and vertical magnification applied to the plate crop.
    pub magnification: u32,
    /// Color of the detection rectangle and marker tab.
    pub box_color: Rgb<u8>,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            magnification: 2,
            box_color: Rgb([0, 255, 0]),
        }
    }
}

/// Draw one rectangle and marker tab per detection onto a copy of `image`.
///
/// Boxes cover their corner coordinates inclusively, so a detection spanning
/// (10,10)-(110,40) paints both of those pixels. Out-of-bounds portions are
/// clipped by the drawing primitives.
pub fn draw_detections(
    image: &DynamicImage,
    detections: &[Detection],
    config: &AnnotateConfig,
) -> RgbImage {
    let mut canvas = image.to_rgb8();

    for detection in detections {
        let bbox = detection.bounding_box();

        let outline = Rect::at(bbox.x, bbox.y).of_size(bbox.width + 1, bbox.height + 1);
        draw_hollow_rect_mut(&mut canvas, outline, config.box_color);
        if bbox.width >= 2 && bbox.height >= 2 {
            // Second ring for a 2px outline, matching the usual overlay weight.
            let inner = Rect::at(bbox.x + 1, bbox.y + 1).of_size(bbox.width - 1, bbox.height - 1);
            draw_hollow_rect_mut(&mut canvas, inner, config.box_color);
        }

        let marker_width = (bbox.width + 1).min(MARKER_MAX_WIDTH);
        let marker_y = bbox.y - MARKER_GAP - MARKER_HEIGHT as i32;
        let marker = Rect::at(bbox.x, marker_y).of_size(marker_width, MARKER_HEIGHT);
        draw_filled_rect_mut(&mut canvas, marker, config.box_color);
    }

    canvas
}

/// Crop the (unannotated) image to a detection's bounding box.
///
/// A box that clamps to zero area yields [`PipelineError::EmptyRegion`]
/// instead of a zero-sized buffer; the caller skips the enlargement step for
/// that detection.
pub fn extract_plate(
    image: &DynamicImage,
    detection: &Detection,
) -> Result<RgbImage, PipelineError> {
    let bbox = detection
        .bounding_box()
        .clamp_to(image.width(), image.height())
        .ok_or_else(|| PipelineError::EmptyRegion {
            text: detection.text.clone(),
        })?;

    let crop = image.crop_imm(bbox.x as u32, bbox.y as u32, bbox.width, bbox.height);
    Ok(crop.to_rgb8())
}

/// Upscale a plate crop by the given factor. Output is exactly
/// `(magnification * w, magnification * h)`.
pub fn enlarge(plate: &RgbImage, magnification: u32) -> RgbImage {
    let factor = magnification.max(1);
    imageops::resize(
        plate,
        plate.width() * factor,
        plate.height() * factor,
        imageops::FilterType::CatmullRom,
    )
}

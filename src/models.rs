/// A pixel coordinate in the original image.
///
/// Signed because detector polygons can extend slightly past the image edges;
/// clamping happens when a region is actually cropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One located-and-read plate region produced by a [`PlateReader`].
///
/// Owned by the pipeline invocation that created it and discarded once
/// rendered; nothing is persisted.
///
/// [`PlateReader`]: crate::detection::PlateReader
#[derive(Debug, Clone)]
pub struct Detection {
    /// Bounding quadrilateral, in image coordinates. Corner order is
    /// whatever the engine emitted; consumers must not rely on it.
    pub polygon: [Point; 4],
    /// Recognized text.
    pub text: String,
    /// Recognition confidence in `[0, 1]`.
    pub confidence: f32,
}

impl Detection {
    /// Axis-aligned bounding box over all four polygon points.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_polygon(&self.polygon)
    }

    /// Text shown in the dedicated label widget. The on-image annotation is a
    /// plain marker tab, so non-Latin plates still read correctly here.
    pub fn label(&self) -> String {
        format!("plate number: {}", self.text)
    }
}

/// Axis-aligned bounding box in the original image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Derive the box from the min/max over all polygon points.
    ///
    /// Deliberately order-independent: engines do not guarantee which corner
    /// comes first, so trusting particular indices would mis-crop rotated or
    /// counterclockwise quadrilaterals.
    pub fn from_polygon(polygon: &[Point; 4]) -> Self {
        let min_x = polygon.iter().map(|p| p.x).min().unwrap_or(0);
        let min_y = polygon.iter().map(|p| p.y).min().unwrap_or(0);
        let max_x = polygon.iter().map(|p| p.x).max().unwrap_or(0);
        let max_y = polygon.iter().map(|p| p.y).max().unwrap_or(0);

        Self {
            x: min_x,
            y: min_y,
            width: (max_x - min_x) as u32,
            height: (max_y - min_y) as u32,
        }
    }

    /// Intersect with an image of the given dimensions.
    ///
    /// Returns `None` when the intersection has zero area, which callers
    /// surface as the "region extraction failed" condition.
    pub fn clamp_to(&self, image_width: u32, image_height: u32) -> Option<BoundingBox> {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = (self.x + self.width as i32).min(image_width as i32);
        let y1 = (self.y + self.height as i32).min(image_height as i32);

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(BoundingBox {
            x: x0,
            y: y0,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

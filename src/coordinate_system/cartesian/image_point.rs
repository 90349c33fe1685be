use std::fmt;

/// A position in an output image, in pixels from the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImagePoint {
    pub x: f64,
    pub y: f64,
}

impl ImagePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The pixel containing this point, if it lies inside a `width` x `height` image.
    pub fn pixel(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        let (x, y) = (self.x.floor(), self.y.floor());
        if x < 0.0 || y < 0.0 || x >= f64::from(width) || y >= f64::from(height) {
            return None;
        }
        Some((x as u32, y as u32))
    }

    /// `self - other` as `(dx, dy)`.
    pub fn offset_from(&self, other: ImagePoint) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for ImagePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImagePoint({}, {})", self.x, self.y)
    }
}

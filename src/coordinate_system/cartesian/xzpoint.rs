use std::fmt;

/// A horizontal world position in blocks. Entities sit between block corners, so
/// the components are fractional.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct XZPoint {
    pub x: f64,
    pub z: f64,
}

impl XZPoint {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Position of the block this point lies in.
    pub fn block(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.z.floor() as i32)
    }

    /// Position of the chunk this point lies in.
    pub fn chunk(&self) -> (i32, i32) {
        let (bx, bz) = self.block();
        (bx >> 4, bz >> 4)
    }
}

impl fmt::Display for XZPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XZPoint({}, {})", self.x, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_and_chunk() {
        let p = XZPoint::new(17.5, -0.25);
        assert_eq!(p.block(), (17, -1));
        assert_eq!(p.chunk(), (1, -1));

        let p = XZPoint::new(-16.0, 15.99);
        assert_eq!(p.block(), (-16, 15));
        assert_eq!(p.chunk(), (-1, 0));
    }
}

pub mod cartesian;
pub mod dimension;
pub mod geographic;
pub mod transformation;

pub use dimension::Dimension;
pub use transformation::{CoordinateProjector, DimensionProjection, PlayerMarker};

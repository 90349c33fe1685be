//! Projection settings.

use crate::coordinate_system::{CoordinateProjector, Dimension, DimensionProjection};
use crate::error::LoadError;
use serde::{Deserialize, Serialize};

/// Projection settings for all dimensions. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Overlay units per block, shared by all dimensions.
    pub geo_scale: f64,
    pub overworld: DimensionBounds,
    pub nether: DimensionBounds,
    pub the_end: DimensionBounds,
}

/// Chunk extent of a dimension and its image scale (pixels per block).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionBounds {
    pub min_chunk_x: i32,
    pub min_chunk_z: i32,
    pub max_chunk_x: i32,
    pub max_chunk_z: i32,
    pub image_scale: f64,
}

impl Default for DimensionBounds {
    fn default() -> Self {
        Self {
            min_chunk_x: -64,
            min_chunk_z: -64,
            max_chunk_x: 63,
            max_chunk_z: 63,
            image_scale: 1.0,
        }
    }
}

impl DimensionBounds {
    pub fn projection(&self) -> Result<DimensionProjection, String> {
        DimensionProjection::from_chunk_bounds(
            self.min_chunk_x,
            self.min_chunk_z,
            self.max_chunk_x,
            self.max_chunk_z,
            self.image_scale,
        )
    }

    /// Image size in pixels for these bounds.
    pub fn image_size(&self) -> (u32, u32) {
        let blocks = |min: i32, max: i32| (f64::from(max) - f64::from(min) + 1.0).max(0.0) * 16.0;
        let w = blocks(self.min_chunk_x, self.max_chunk_x) * self.image_scale;
        let h = blocks(self.min_chunk_z, self.max_chunk_z) * self.image_scale;
        (w.ceil() as u32, h.ceil() as u32)
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            geo_scale: 1.0,
            overworld: DimensionBounds::default(),
            nether: DimensionBounds::default(),
            the_end: DimensionBounds::default(),
        }
    }
}

impl ProjectionConfig {
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn bounds(&self, dimension: Dimension) -> &DimensionBounds {
        match dimension {
            Dimension::Overworld => &self.overworld,
            Dimension::Nether => &self.nether,
            Dimension::TheEnd => &self.the_end,
        }
    }

    pub fn build_projector(&self) -> Result<CoordinateProjector, LoadError> {
        let mut projections = [DimensionProjection::default(); 3];
        for dimension in Dimension::ALL {
            projections[dimension.index()] = self
                .bounds(dimension)
                .projection()
                .map_err(|e| LoadError::Projection(format!("{dimension}: {e}")))?;
        }
        CoordinateProjector::new(projections, self.geo_scale).map_err(LoadError::Projection)
    }
}

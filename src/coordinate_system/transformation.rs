use super::cartesian::{ImagePoint, XZPoint};
use super::geographic::GeoFeature;
use super::Dimension;
use crate::colors::PackedColor;
use geo::{AffineTransform, Coord, Point};

/// Fixed projection parameters of one dimension.
///
/// `origin_x`/`origin_z` is the world position drawn at pixel (0, 0). `height` is
/// the extent of the dimension along Z in blocks, used to flip the geo axis so
/// north points up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DimensionProjection {
    origin_x: f64,
    origin_z: f64,
    height: f64,
    image_scale: f64,
}

impl DimensionProjection {
    pub fn new(origin_x: f64, origin_z: f64, height: f64, image_scale: f64) -> Result<Self, String> {
        let err_header = "Construct dimension projection failed";

        if !image_scale.is_finite() || image_scale <= 0.0 {
            return Err(format!("{err_header}: image scale {image_scale} is not a positive finite number"));
        }
        if !height.is_finite() || height < 0.0 {
            return Err(format!("{err_header}: height {height} is not a finite number >= 0.0"));
        }
        if !origin_x.is_finite() || !origin_z.is_finite() {
            return Err(format!("{err_header}: origin is not finite"));
        }

        Ok(Self {
            origin_x,
            origin_z,
            height,
            image_scale,
        })
    }

    /// Projection covering chunks `min..=max` on both axes.
    pub fn from_chunk_bounds(
        min_chunk_x: i32,
        min_chunk_z: i32,
        max_chunk_x: i32,
        max_chunk_z: i32,
        image_scale: f64,
    ) -> Result<Self, String> {
        if max_chunk_x < min_chunk_x || max_chunk_z < min_chunk_z {
            return Err(format!(
                "Construct dimension projection failed: chunk bounds ({min_chunk_x}, {min_chunk_z})..({max_chunk_x}, {max_chunk_z}) are inverted"
            ));
        }
        let height = (f64::from(max_chunk_z) - f64::from(min_chunk_z) + 1.0) * 16.0;
        Self::new(
            f64::from(min_chunk_x) * 16.0,
            f64::from(min_chunk_z) * 16.0,
            height,
            image_scale,
        )
    }

    pub fn origin(&self) -> XZPoint {
        XZPoint::new(self.origin_x, self.origin_z)
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn image_scale(&self) -> f64 {
        self.image_scale
    }

    fn image_transform(&self) -> AffineTransform<f64> {
        let s = self.image_scale;
        AffineTransform::new(s, 0.0, -s * self.origin_x, 0.0, s, -s * self.origin_z)
    }

    fn geo_transform(&self, geo_scale: f64) -> AffineTransform<f64> {
        let s = geo_scale;
        AffineTransform::new(
            s,
            0.0,
            -s * self.origin_x,
            0.0,
            -s,
            s * (self.height + self.origin_z),
        )
    }
}

impl Default for DimensionProjection {
    fn default() -> Self {
        // 128 x 128 chunks centered on the world origin
        Self {
            origin_x: -1024.0,
            origin_z: -1024.0,
            height: 2048.0,
            image_scale: 1.0,
        }
    }
}

/// Last known player position, in image space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlayerMarker {
    pub dimension: Dimension,
    pub image: ImagePoint,
}

/// Maps world positions into image and overlay space.
///
/// The two transforms are independent: the image transform uses each dimension's
/// image scale, the overlay transform uses one geo scale for all dimensions.
/// Projection itself never touches the mutable state kept here (active dimension,
/// player marker, pending overlay features).
#[derive(Debug, Clone)]
pub struct CoordinateProjector {
    projections: [DimensionProjection; 3],
    geo_scale: f64,
    image_transforms: [AffineTransform<f64>; 3],
    geo_transforms: [AffineTransform<f64>; 3],
    active_dimension: Dimension,
    player_marker: Option<PlayerMarker>,
    features: Vec<GeoFeature>,
}

impl CoordinateProjector {
    /// `projections` is indexed by [`Dimension::id`].
    pub fn new(projections: [DimensionProjection; 3], geo_scale: f64) -> Result<Self, String> {
        if !geo_scale.is_finite() || geo_scale <= 0.0 {
            return Err(format!(
                "Construct coordinate projector failed: geo scale {geo_scale} is not a positive finite number"
            ));
        }

        Ok(Self {
            projections,
            geo_scale,
            image_transforms: projections.map(|p| p.image_transform()),
            geo_transforms: projections.map(|p| p.geo_transform(geo_scale)),
            active_dimension: Dimension::Overworld,
            player_marker: None,
            features: Vec::new(),
        })
    }

    pub fn projection(&self, dimension: Dimension) -> &DimensionProjection {
        &self.projections[dimension.index()]
    }

    pub fn geo_scale(&self) -> f64 {
        self.geo_scale
    }

    pub fn world_to_image(&self, dimension: Dimension, world_x: f64, world_z: f64) -> ImagePoint {
        let c = self.image_transforms[dimension.index()].apply(Coord {
            x: world_x,
            y: world_z,
        });
        ImagePoint::new(c.x, c.y)
    }

    pub fn world_to_geo(&self, dimension: Dimension, world_x: f64, world_z: f64) -> Point<f64> {
        let c = self.geo_transforms[dimension.index()].apply(Coord {
            x: world_x,
            y: world_z,
        });
        Point::from(c)
    }

    pub fn point_to_image(&self, dimension: Dimension, point: XZPoint) -> ImagePoint {
        self.world_to_image(dimension, point.x, point.z)
    }

    pub fn point_to_geo(&self, dimension: Dimension, point: XZPoint) -> Point<f64> {
        self.world_to_geo(dimension, point.x, point.z)
    }

    pub fn active_dimension(&self) -> Dimension {
        self.active_dimension
    }

    pub fn set_active_dimension(&mut self, dimension: Dimension) {
        self.active_dimension = dimension;
    }

    /// Records the player's position for this rendering pass.
    pub fn update_player_marker(&mut self, dimension: Dimension, world_x: f64, world_z: f64) -> PlayerMarker {
        let marker = PlayerMarker {
            dimension,
            image: self.world_to_image(dimension, world_x, world_z),
        };
        self.player_marker = Some(marker);
        marker
    }

    pub fn player_marker(&self) -> Option<PlayerMarker> {
        self.player_marker
    }

    pub fn clear_player_marker(&mut self) {
        self.player_marker = None;
    }

    /// Queues a named point feature at a world position for the overlay writer.
    pub fn add_point_feature(
        &mut self,
        dimension: Dimension,
        world_x: f64,
        world_z: f64,
        name: &str,
        color: PackedColor,
    ) -> &mut GeoFeature {
        let point = self.world_to_geo(dimension, world_x, world_z);
        self.push_feature(GeoFeature::point(dimension, point).with_name(name).with_color(color))
    }

    pub fn push_feature(&mut self, feature: GeoFeature) -> &mut GeoFeature {
        self.features.push(feature);
        let last = self.features.len() - 1;
        &mut self.features[last]
    }

    pub fn features(&self) -> &[GeoFeature] {
        &self.features
    }

    /// Hands the queued features to the caller and clears the queue.
    pub fn take_features(&mut self) -> Vec<GeoFeature> {
        std::mem::take(&mut self.features)
    }
}

impl Default for CoordinateProjector {
    fn default() -> Self {
        let projections = [DimensionProjection::default(); 3];
        Self {
            projections,
            geo_scale: 1.0,
            image_transforms: projections.map(|p| p.image_transform()),
            geo_transforms: projections.map(|p| p.geo_transform(1.0)),
            active_dimension: Dimension::Overworld,
            player_marker: None,
            features: Vec::new(),
        }
    }
}

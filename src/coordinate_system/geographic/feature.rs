use crate::colors::PackedColor;
use crate::coordinate_system::Dimension;
use geo::Point;
use serde_json::{json, Map, Value};

/// A point feature for the vector overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    dimension: Dimension,
    point: Point<f64>,
    properties: Map<String, Value>,
}

impl GeoFeature {
    pub fn point(dimension: Dimension, point: Point<f64>) -> Self {
        Self {
            dimension,
            point,
            properties: Map::new(),
        }
    }

    pub fn with_name(self, name: &str) -> Self {
        self.with_property("name", name)
    }

    pub fn with_color(self, color: PackedColor) -> Self {
        self.with_property("color", color.to_string())
    }

    pub fn with_property(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn set_property(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn geometry(&self) -> Point<f64> {
        self.point
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    pub fn to_geojson(&self) -> Value {
        let mut properties = self.properties.clone();
        properties.insert("dimension".to_string(), json!(self.dimension.id()));
        json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [self.point.x(), self.point.y()],
            },
            "properties": properties,
        })
    }

    /// The feature as a compact GeoJSON text fragment.
    pub fn to_fragment(&self) -> String {
        self.to_geojson().to_string()
    }
}

/// Wraps features into a GeoJSON `FeatureCollection`.
pub fn feature_collection(features: &[GeoFeature]) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": features.iter().map(GeoFeature::to_geojson).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::pack;

    #[test]
    fn test_feature_geojson() {
        let feature = GeoFeature::point(Dimension::Nether, Point::new(12.5, -3.0))
            .with_name("Zombie Pigman")
            .with_color(pack(0xEA9393))
            .with_property("pairs", 2);

        let value = feature.to_geojson();
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "Point");
        assert_eq!(value["geometry"]["coordinates"][0], 12.5);
        assert_eq!(value["geometry"]["coordinates"][1], -3.0);
        assert_eq!(value["properties"]["name"], "Zombie Pigman");
        assert_eq!(value["properties"]["color"], "#ea9393");
        assert_eq!(value["properties"]["dimension"], 1);
        assert_eq!(value["properties"]["pairs"], 2);

        let parsed: Value = serde_json::from_str(&feature.to_fragment()).unwrap();
        assert_eq!(parsed, value);
    }

    #[test]
    fn test_collection() {
        let features = vec![
            GeoFeature::point(Dimension::Overworld, Point::new(0.0, 0.0)).with_name("a"),
            GeoFeature::point(Dimension::TheEnd, Point::new(1.0, 1.0)).with_name("b"),
        ];
        let value = feature_collection(&features);
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["features"][1]["properties"]["dimension"], 2);
    }
}

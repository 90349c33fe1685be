mod feature;

pub use feature::{feature_collection, GeoFeature};

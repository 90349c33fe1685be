//! Metadata and projection layer for rendering voxel worlds.
//!
//! * [`registry`]: block, item, entity, biome and enchantment tables, configured on a
//!   [`RegistryBuilder`] and frozen into a shareable [`Registry`].
//! * [`colors`]: packed pixel colors and the helpers that write them into images.
//! * [`edition_map`]: numeric id translation between the Java and Bedrock editions.
//! * [`coordinate_system`]: per-dimension world to image and world to geographic
//!   projection, plus the player marker and the point-feature queue.
//! * [`definitions`] and [`config`]: JSON documents that extend the built-in tables
//!   and describe the projection.

mod builtin;
pub mod colors;
pub mod config;
pub mod coordinate_system;
pub mod definitions;
pub mod edition_map;
pub mod error;
pub mod registry;
#[cfg(test)]
mod test_utilities;

pub use colors::PackedColor;
pub use config::ProjectionConfig;
pub use coordinate_system::{CoordinateProjector, Dimension};
pub use definitions::DefinitionDocument;
pub use edition_map::{Edition, EditionTranslator, TranslationTable};
pub use error::LoadError;
pub use registry::{Registry, RegistryBuilder};

//! Definition documents.
//!
//! A definition document is JSON text describing blocks, items, entities, biomes,
//! enchantments and edition translation pairs. Documents are applied on top of a
//! [`RegistryBuilder`] during startup; every entry in a document replaces whatever
//! was registered under the same id before.
//!
//! ```json
//! {
//!   "blocks": [
//!     { "id": 17, "name": "Log", "uname": "log;wood", "color": "#6b5130",
//!       "variants": [ { "blockdata": 1, "name": "Spruce Log", "color": "0x3d2813" } ] }
//!   ],
//!   "items": [ { "id": 351, "name": "Dye", "variants": [ { "extradata": 4, "name": "Lapis Lazuli" } ] } ],
//!   "entities": [ { "id": 32, "identifier": "minecraft:zombie", "id_string": "Zombie", "name": "Zombie", "etype": "Hostile" } ],
//!   "biomes": [ { "id": 0, "name": "Ocean", "color": "#000070" } ],
//!   "enchantments": [ { "id": 9, "name": "fire", "official_name": "Fire Aspect" } ],
//!   "translations": { "java_to_bedrock_block": [[125, 157]] }
//! }
//! ```

use crate::colors::color_text_to_rgb;
use crate::edition_map::{EditionTranslator, TranslationTable};
use crate::error::LoadError;
use crate::registry::{BiomeInfo, EnchantmentInfo, EntityInfo, RegistryBuilder};
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DefinitionDocument {
    pub blocks: Vec<BlockDef>,
    pub items: Vec<ItemDef>,
    pub entities: Vec<EntityDef>,
    pub biomes: Vec<BiomeDef>,
    pub enchantments: Vec<EnchantmentDef>,
    /// Table name to `[from, to]` pairs.
    pub translations: BTreeMap<String, Vec<(i32, i32)>>,
}

/// A color as written in a document: a number (`0xRRGGBB`) or color text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Rgb(u32),
    Text(String),
}

impl ColorValue {
    fn to_rgb(&self, context: impl FnOnce() -> String) -> Result<u32, LoadError> {
        match self {
            ColorValue::Rgb(rgb) => Ok(*rgb & 0xFF_FFFF),
            ColorValue::Text(text) => color_text_to_rgb(text).ok_or_else(|| LoadError::InvalidColor {
                text: text.clone(),
                context: context(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BlockDef {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub uname: Option<String>,
    #[serde(default)]
    pub color: Option<ColorValue>,
    #[serde(default)]
    pub solid: Option<bool>,
    #[serde(default)]
    pub opaque: Option<bool>,
    #[serde(default)]
    pub liquid: Option<bool>,
    #[serde(default)]
    pub spawnable: Option<bool>,
    #[serde(default)]
    pub variants: Vec<BlockVariantDef>,
}

#[derive(Debug, Deserialize)]
pub struct BlockVariantDef {
    pub blockdata: i32,
    pub name: String,
    #[serde(default)]
    pub uname: Option<String>,
    #[serde(default)]
    pub color: Option<ColorValue>,
    #[serde(default)]
    pub solid: Option<bool>,
    #[serde(default)]
    pub opaque: Option<bool>,
    #[serde(default)]
    pub liquid: Option<bool>,
    #[serde(default)]
    pub spawnable: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ItemDef {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub variants: Vec<ItemVariantDef>,
}

#[derive(Debug, Deserialize)]
pub struct ItemVariantDef {
    pub extradata: i32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct EntityDef {
    pub id: i32,
    pub identifier: String,
    #[serde(default)]
    pub id_string: String,
    pub name: String,
    #[serde(default)]
    pub etype: String,
}

#[derive(Debug, Deserialize)]
pub struct BiomeDef {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub color: Option<ColorValue>,
}

#[derive(Debug, Deserialize)]
pub struct EnchantmentDef {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub official_name: Option<String>,
}

impl DefinitionDocument {
    /// Parses a document. Reading the file is the caller's job.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let document: Self = serde_json::from_str(text)?;
        info!(
            "parsed definitions: {} blocks, {} items, {} entities, {} biomes, {} enchantments",
            document.blocks.len(),
            document.items.len(),
            document.entities.len(),
            document.biomes.len(),
            document.enchantments.len()
        );
        Ok(document)
    }

    /// Applies the registry part of the document.
    ///
    /// Validation happens before anything is written, so a failing document leaves
    /// the builder untouched.
    pub fn apply(&self, builder: &mut RegistryBuilder) -> Result<(), LoadError> {
        let blocks = self.resolve_block_colors()?;
        let biomes = self
            .biomes
            .iter()
            .map(|b| {
                b.color
                    .as_ref()
                    .map(|c| c.to_rgb(|| format!("biome {}", b.id)))
                    .transpose()
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (def, (color, variant_colors)) in self.blocks.iter().zip(blocks) {
            let block = builder
                .reset_block(def.id)
                .ok_or(LoadError::BlockIdOutOfRange(def.id))?;
            block.set_name(def.name.as_str());
            if let Some(uname) = &def.uname {
                block.set_uname(uname);
            }
            if let Some(rgb) = color {
                block.set_color(rgb);
            }
            if let Some(flag) = def.solid {
                block.set_solid(flag);
            }
            if let Some(flag) = def.opaque {
                block.set_opaque(flag);
            }
            if let Some(flag) = def.liquid {
                block.set_liquid(flag);
            }
            if let Some(flag) = def.spawnable {
                block.set_spawnable(flag);
            }

            for (vdef, vcolor) in def.variants.iter().zip(variant_colors) {
                let variant = block.add_variant(vdef.blockdata, vdef.name.as_str());
                if let Some(uname) = &vdef.uname {
                    variant.set_uname(uname);
                }
                if let Some(rgb) = vcolor {
                    variant.set_color(rgb);
                }
                if let Some(flag) = vdef.solid {
                    variant.set_solid(flag);
                }
                if let Some(flag) = vdef.opaque {
                    variant.set_opaque(flag);
                }
                if let Some(flag) = vdef.liquid {
                    variant.set_liquid(flag);
                }
                if let Some(flag) = vdef.spawnable {
                    variant.set_spawnable(flag);
                }
            }
        }

        for def in &self.items {
            let item = builder.replace_item(def.id, &def.name);
            for vdef in &def.variants {
                item.add_variant(vdef.extradata, vdef.name.as_str());
            }
        }

        for def in &self.entities {
            builder.replace_entity(EntityInfo::new(
                def.id,
                &def.identifier,
                &def.id_string,
                &def.name,
                &def.etype,
            ));
        }

        for (def, color) in self.biomes.iter().zip(biomes) {
            let biome = match color {
                Some(rgb) => BiomeInfo::with_color(def.id, &def.name, rgb),
                None => BiomeInfo::new(def.id, &def.name),
            };
            builder.replace_biome(biome);
        }

        for def in &self.enchantments {
            let mut enchantment = EnchantmentInfo::new(def.id, &def.name);
            if let Some(official) = &def.official_name {
                enchantment = enchantment.with_official_name(official);
            }
            builder.replace_enchantment(enchantment);
        }

        Ok(())
    }

    /// Applies the translation pairs of the document.
    pub fn apply_translations(&self, translator: &mut EditionTranslator) -> Result<(), LoadError> {
        let tables = self
            .translations
            .keys()
            .map(|name| TranslationTable::from_name(name).ok_or_else(|| LoadError::UnknownTable(name.clone())))
            .collect::<Result<Vec<_>, _>>()?;

        for (table, pairs) in tables.into_iter().zip(self.translations.values()) {
            translator.extend(table, pairs);
        }
        Ok(())
    }

    #[allow(clippy::type_complexity)]
    fn resolve_block_colors(&self) -> Result<Vec<(Option<u32>, Vec<Option<u32>>)>, LoadError> {
        self.blocks
            .iter()
            .map(|def| {
                if !(0..crate::registry::BLOCK_ID_COUNT as i32).contains(&def.id) {
                    return Err(LoadError::BlockIdOutOfRange(def.id));
                }
                let color = def
                    .color
                    .as_ref()
                    .map(|c| c.to_rgb(|| format!("block {}", def.id)))
                    .transpose()?;
                let variant_colors = def
                    .variants
                    .iter()
                    .map(|v| {
                        v.color
                            .as_ref()
                            .map(|c| c.to_rgb(|| format!("block {}:{}", def.id, v.blockdata)))
                            .transpose()
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((color, variant_colors))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::UNKNOWN_NAME;

    const DOC: &str = r##"{
        "blocks": [
            { "id": 1, "name": "stone", "color": 8947848, "solid": true },
            { "id": 2, "name": "log", "uname": "log;wood", "color": "#6b5130",
              "variants": [
                { "blockdata": 0, "name": "oak log" },
                { "blockdata": 1, "name": "spruce log", "uname": "spruce_log", "color": "0x3d2813", "spawnable": false }
              ] },
            { "id": 8, "name": "water", "color": "blue", "solid": false, "liquid": true, "spawnable": false }
        ],
        "items": [ { "id": 351, "name": "dye", "variants": [ { "extradata": 4, "name": "lapis lazuli" } ] } ],
        "entities": [ { "id": 32, "identifier": "zombie", "id_string": "Zombie", "name": "Zombie", "etype": "Hostile" } ],
        "biomes": [ { "id": 0, "name": "Ocean", "color": "#000070" }, { "id": 1, "name": "Plains" } ],
        "enchantments": [ { "id": 9, "name": "fire", "official_name": "Fire Aspect" } ],
        "translations": { "java_to_bedrock_block": [[125, 157]], "bedrock_to_java_item": [[446, 425]] }
    }"##;

    #[test]
    fn test_apply_document() {
        let document = DefinitionDocument::from_json_str(DOC).unwrap();
        let mut builder = RegistryBuilder::new();
        document.apply(&mut builder).unwrap();
        let registry = builder.build();

        assert_eq!(registry.block_name(1, 7), "stone");
        assert_eq!(registry.block_color(1, 0).unpack(), 0x888888);
        assert_eq!(registry.block_name(2, 1), "spruce log");
        assert_eq!(registry.block_name(2, 9), "log");
        assert_eq!(registry.block_color(2, 0).unpack(), 0x6B5130);
        assert_eq!(registry.block_color(2, 1).unpack(), 0x3D2813);
        assert!(!registry.is_spawnable(2, 1));
        assert!(registry.is_spawnable(2, 0));
        assert!(registry.block_flags(8, 0).liquid);
        assert_eq!(registry.find_by_short_name("wood"), Some((2, 0)));
        assert_eq!(registry.find_by_short_name("spruce_log"), Some((2, 1)));

        assert_eq!(registry.item_name(351, 4), "lapis lazuli");
        assert_eq!(registry.find_entity_by_identifier("minecraft:zombie"), Some(32));
        assert!(registry.biome(0).unwrap().is_color_set());
        assert!(!registry.biome(1).unwrap().is_color_set());
        assert_eq!(registry.enchantment_name(9), "Fire Aspect");
    }

    #[test]
    fn test_document_overrides_existing() {
        let mut builder = RegistryBuilder::new();
        let old = builder.block(2).unwrap();
        old.set_name("old").set_uname("ancient");
        old.add_variant(7, "old variant");
        builder.item(351, "old dye");

        let document = DefinitionDocument::from_json_str(DOC).unwrap();
        document.apply(&mut builder).unwrap();
        let registry = builder.build();

        assert_eq!(registry.block_name(2, 7), "log");
        assert_eq!(registry.find_by_short_name("ancient"), None);
        assert_eq!(registry.item_name(351, 0), "dye");
    }

    #[test]
    fn test_translations() {
        let document = DefinitionDocument::from_json_str(DOC).unwrap();
        let mut translator = EditionTranslator::new();
        document.apply_translations(&mut translator).unwrap();
        assert_eq!(translator.translate(TranslationTable::JavaToBedrockBlock, 125), Some(157));
        assert_eq!(translator.translate(TranslationTable::BedrockToJavaItem, 446), Some(425));
        assert_eq!(translator.translate(TranslationTable::BedrockToJavaBlock, 157), None);
    }

    #[test]
    fn test_unknown_table() {
        let document =
            DefinitionDocument::from_json_str(r#"{ "translations": { "sideways": [[1, 2]] } }"#).unwrap();
        let mut translator = EditionTranslator::new();
        match document.apply_translations(&mut translator) {
            Err(LoadError::UnknownTable(name)) => assert_eq!(name, "sideways"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(translator.is_empty());
    }

    #[test]
    fn test_invalid_documents_leave_builder_untouched() {
        let bad_color = r##"{ "blocks": [ { "id": 1, "name": "stone" }, { "id": 3, "name": "dirt", "color": "#zzzzzz" } ] }"##;
        let bad_id = r#"{ "blocks": [ { "id": 1, "name": "stone" }, { "id": 512, "name": "nope" } ] }"#;

        let mut builder = RegistryBuilder::new();
        let document = DefinitionDocument::from_json_str(bad_color).unwrap();
        assert!(matches!(
            document.apply(&mut builder),
            Err(LoadError::InvalidColor { ref text, .. }) if text == "#zzzzzz"
        ));
        let document = DefinitionDocument::from_json_str(bad_id).unwrap();
        assert!(matches!(document.apply(&mut builder), Err(LoadError::BlockIdOutOfRange(512))));

        assert_eq!(builder.build().block_name(1, 0), UNKNOWN_NAME);
    }
}

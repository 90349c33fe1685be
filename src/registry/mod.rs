//! Typed metadata registries for blocks, items, entities, biomes and enchantments.
//!
//! Configuration happens on a [`RegistryBuilder`] during startup. [`RegistryBuilder::build`]
//! freezes it into a [`Registry`] that only hands out shared references, so lookups
//! can be issued from any number of threads. Every lookup is total: unknown ids
//! resolve to [`UNKNOWN_NAME`] and the sentinel color instead of failing.

mod biome;
mod block;
mod enchantment;
mod entity;
mod item;
mod scratch;

pub use biome::BiomeInfo;
pub use block::{BlockFlags, BlockInfo, BlockVariant, ResolvedBlock};
pub use enchantment::EnchantmentInfo;
pub use entity::{normalize_identifier, EntityInfo, DEFAULT_NAMESPACE};
pub use item::{ItemInfo, ItemVariant};
pub use scratch::Scratch;

use crate::builtin;
use crate::colors::PackedColor;
use fnv::FnvHashMap;
use log::{debug, warn};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Number of block slots. Block ids are `0..BLOCK_ID_COUNT`.
pub const BLOCK_ID_COUNT: usize = 512;

/// Name reported for anything the registry does not know.
pub const UNKNOWN_NAME: &str = "(unknown)";

/// Outcome of matching a secondary value against a variant list.
#[derive(Debug)]
pub enum VariantMatch<'a, V> {
    Matched(&'a V),
    /// The record has variants but none matches; callers use the base record.
    Fallback,
    NoVariants,
}

pub(crate) fn split_unames(list: &str) -> Vec<String> {
    list.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn block_index(id: i32) -> Option<usize> {
    usize::try_from(id).ok().filter(|&i| i < BLOCK_ID_COUNT)
}

// first registration wins
fn insert_first<V>(map: &mut BTreeMap<i32, V>, id: i32, value: V, kind: &str) -> bool {
    match map.entry(id) {
        Entry::Occupied(_) => {
            warn!("ignoring duplicate {kind} id {id}");
            false
        }
        Entry::Vacant(slot) => {
            slot.insert(value);
            true
        }
    }
}

/// Mutable registry state for the startup configuration pass.
pub struct RegistryBuilder {
    blocks: Vec<BlockInfo>,
    items: BTreeMap<i32, ItemInfo>,
    entities: BTreeMap<i32, EntityInfo>,
    biomes: BTreeMap<i32, BiomeInfo>,
    enchantments: BTreeMap<i32, EnchantmentInfo>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            blocks: (0..BLOCK_ID_COUNT as i32).map(BlockInfo::new).collect(),
            items: BTreeMap::new(),
            entities: BTreeMap::new(),
            biomes: BTreeMap::new(),
            enchantments: BTreeMap::new(),
        }
    }

    /// A builder preloaded with the built-in definition tables.
    pub fn with_builtin() -> Self {
        let mut builder = Self::new();
        builtin::register_all(&mut builder);
        builder
    }

    /// The block slot for `id`, or `None` if `id` is outside the block table.
    pub fn block(&mut self, id: i32) -> Option<&mut BlockInfo> {
        block_index(id).map(|i| &mut self.blocks[i])
    }

    /// Clears the slot for `id` back to its unconfigured state and returns it.
    pub fn reset_block(&mut self, id: i32) -> Option<&mut BlockInfo> {
        let slot = self.block(id)?;
        *slot = BlockInfo::new(id);
        Some(slot)
    }

    /// The item with `id`, created with `name` if it does not exist yet. An existing
    /// item keeps its name.
    pub fn item(&mut self, id: i32, name: &str) -> &mut ItemInfo {
        match self.items.entry(id) {
            Entry::Occupied(slot) => {
                if slot.get().name() != name {
                    warn!(
                        "item id {id} already registered as '{}', ignoring '{name}'",
                        slot.get().name()
                    );
                }
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(ItemInfo::new(id, name)),
        }
    }

    /// Replaces any item registered under `id` with a fresh one.
    pub fn replace_item(&mut self, id: i32, name: &str) -> &mut ItemInfo {
        let slot = self
            .items
            .entry(id)
            .or_insert_with(|| ItemInfo::new(id, name));
        *slot = ItemInfo::new(id, name);
        slot
    }

    /// Returns `false` and keeps the existing entry if the id is taken.
    pub fn add_entity(&mut self, entity: EntityInfo) -> bool {
        insert_first(&mut self.entities, entity.id(), entity, "entity")
    }

    pub fn replace_entity(&mut self, entity: EntityInfo) -> Option<EntityInfo> {
        self.entities.insert(entity.id(), entity)
    }

    pub fn add_biome(&mut self, biome: BiomeInfo) -> bool {
        insert_first(&mut self.biomes, biome.id(), biome, "biome")
    }

    pub fn replace_biome(&mut self, biome: BiomeInfo) -> Option<BiomeInfo> {
        self.biomes.insert(biome.id(), biome)
    }

    pub fn add_enchantment(&mut self, enchantment: EnchantmentInfo) -> bool {
        insert_first(
            &mut self.enchantments,
            enchantment.id(),
            enchantment,
            "enchantment",
        )
    }

    pub fn replace_enchantment(&mut self, enchantment: EnchantmentInfo) -> Option<EnchantmentInfo> {
        self.enchantments.insert(enchantment.id(), enchantment)
    }

    /// Freezes the configuration.
    pub fn build(self) -> Registry {
        let short_names = build_short_name_index(&self.blocks);

        debug!(
            "registry frozen: {} blocks, {} items, {} entities, {} biomes, {} enchantments, {} short names",
            self.blocks.iter().filter(|b| b.is_valid()).count(),
            self.items.len(),
            self.entities.len(),
            self.biomes.len(),
            self.enchantments.len(),
            short_names.len()
        );

        Registry {
            blocks: self.blocks.into_boxed_slice(),
            items: self.items,
            entities: self.entities,
            biomes: self.biomes,
            enchantments: self.enchantments,
            short_names,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_short_name_index(blocks: &[BlockInfo]) -> FnvHashMap<String, (i32, i32)> {
    let mut index: FnvHashMap<String, (i32, i32)> = FnvHashMap::default();
    let mut register = |uname: &str, target: (i32, i32)| {
        if let Some(existing) = index.get(uname) {
            warn!(
                "short name '{uname}' already maps to {}:{}, ignoring {}:{}",
                existing.0, existing.1, target.0, target.1
            );
        } else {
            index.insert(uname.to_string(), target);
        }
    };

    for block in blocks.iter().filter(|b| b.is_valid()) {
        for uname in block.unames() {
            register(uname, (block.id(), 0));
        }
        for variant in block.variants() {
            for uname in variant.unames() {
                register(uname, (block.id(), variant.block_data()));
            }
        }
    }
    index
}

/// Frozen metadata tables.
pub struct Registry {
    blocks: Box<[BlockInfo]>,
    items: BTreeMap<i32, ItemInfo>,
    entities: BTreeMap<i32, EntityInfo>,
    biomes: BTreeMap<i32, BiomeInfo>,
    enchantments: BTreeMap<i32, EnchantmentInfo>,
    short_names: FnvHashMap<String, (i32, i32)>,
}

impl Registry {
    /// The registry built from the built-in tables.
    pub fn builtin() -> Self {
        RegistryBuilder::with_builtin().build()
    }

    /// The block slot for `id`, configured or not.
    pub fn block(&self, id: i32) -> Option<&BlockInfo> {
        block_index(id).map(|i| &self.blocks[i])
    }

    /// All configured blocks in id order.
    pub fn blocks(&self) -> impl Iterator<Item = &BlockInfo> {
        self.blocks.iter().filter(|b| b.is_valid())
    }

    /// Name, color and flags of a block in one lookup. Unknown ids resolve to
    /// [`UNKNOWN_NAME`], the sentinel color and default flags; an unmatched block
    /// data logs one warning.
    pub fn resolve_block(&self, id: i32, block_data: i32) -> ResolvedBlock<'_> {
        match self.block(id) {
            Some(block) if block.is_valid() => block.resolve(block_data),
            _ => ResolvedBlock {
                name: UNKNOWN_NAME,
                color: PackedColor::DEFAULT,
                flags: BlockFlags::default(),
            },
        }
    }

    pub fn block_name(&self, id: i32, block_data: i32) -> &str {
        self.resolve_block(id, block_data).name
    }

    pub fn block_color(&self, id: i32, block_data: i32) -> PackedColor {
        self.resolve_block(id, block_data).color
    }

    pub fn block_flags(&self, id: i32, block_data: i32) -> BlockFlags {
        self.resolve_block(id, block_data).flags
    }

    pub fn is_spawnable(&self, id: i32, block_data: i32) -> bool {
        self.block_flags(id, block_data).spawnable
    }

    /// Reverse lookup of a short name to `(block id, block data)`. Names listed on
    /// the base block map to block data 0.
    pub fn find_by_short_name(&self, uname: &str) -> Option<(i32, i32)> {
        self.short_names.get(uname).copied()
    }

    /// Configured blocks and variants still drawn with the sentinel color, as
    /// `(id, block data)` pairs. Base blocks report `None` for block data.
    pub fn blocks_without_color(&self) -> Vec<(i32, Option<i32>)> {
        let mut missing = Vec::new();
        for block in self.blocks() {
            if !block.is_color_set() {
                missing.push((block.id(), None));
            }
            missing.extend(
                block
                    .variants()
                    .iter()
                    .filter(|v| !v.is_color_set() && v.color() == PackedColor::DEFAULT)
                    .map(|v| (block.id(), Some(v.block_data()))),
            );
        }
        missing
    }

    pub fn item(&self, id: i32) -> Option<&ItemInfo> {
        self.items.get(&id)
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemInfo> {
        self.items.values()
    }

    pub fn item_name(&self, id: i32, extra_data: i32) -> &str {
        self.item(id)
            .map_or(UNKNOWN_NAME, |item| item.resolve_name(extra_data))
    }

    pub fn entity(&self, id: i32) -> Option<&EntityInfo> {
        self.entities.get(&id)
    }

    pub fn entities(&self) -> impl Iterator<Item = &EntityInfo> {
        self.entities.values()
    }

    pub fn entity_name(&self, id: i32) -> &str {
        self.entity(id).map_or(UNKNOWN_NAME, EntityInfo::name)
    }

    /// Finds an entity by its namespaced identifier code. A bare code is looked up in
    /// the default namespace.
    pub fn find_entity_by_identifier(&self, code: &str) -> Option<i32> {
        let code = normalize_identifier(code);
        self.entities
            .values()
            .find(|e| e.identifier() == code)
            .map(EntityInfo::id)
    }

    /// Finds an entity by its legacy id string.
    pub fn find_entity_by_id_string(&self, id_string: &str) -> Option<i32> {
        self.entities
            .values()
            .find(|e| e.id_string() == id_string)
            .map(EntityInfo::id)
    }

    pub fn biome(&self, id: i32) -> Option<&BiomeInfo> {
        self.biomes.get(&id)
    }

    pub fn biomes(&self) -> impl Iterator<Item = &BiomeInfo> {
        self.biomes.values()
    }

    pub fn biome_name(&self, id: i32) -> &str {
        self.biome(id).map_or(UNKNOWN_NAME, BiomeInfo::name)
    }

    pub fn biome_color(&self, id: i32) -> PackedColor {
        self.biome(id).map_or(PackedColor::DEFAULT, BiomeInfo::color)
    }

    pub fn enchantment(&self, id: i32) -> Option<&EnchantmentInfo> {
        self.enchantments.get(&id)
    }

    pub fn enchantment_name(&self, id: i32) -> &str {
        self.enchantment(id)
            .map_or(UNKNOWN_NAME, EnchantmentInfo::display_name)
    }
}

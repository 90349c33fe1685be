use super::scratch::Scratch;
use super::{split_unames, VariantMatch, UNKNOWN_NAME};
use crate::colors::PackedColor;
use log::warn;
use std::fmt;

/// Physical flags of a block or block variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlockFlags {
    pub solid: bool,
    pub opaque: bool,
    pub liquid: bool,
    pub spawnable: bool,
}

impl Default for BlockFlags {
    fn default() -> Self {
        Self {
            solid: true,
            opaque: true,
            liquid: false,
            spawnable: true,
        }
    }
}

/// What a block draws as for one block data value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedBlock<'a> {
    pub name: &'a str,
    pub color: PackedColor,
    pub flags: BlockFlags,
}

/// One slot of the block table.
///
/// A slot is `valid` once a name has been assigned. Variants are keyed by block
/// data and owned by their parent.
#[derive(Debug)]
pub struct BlockInfo {
    id: i32,
    name: String,
    unames: Vec<String>,
    color: PackedColor,
    color_set: bool,
    flags: BlockFlags,
    valid: bool,
    variants: Vec<BlockVariant>,
    scratch: Scratch,
}

impl BlockInfo {
    pub(crate) fn new(id: i32) -> Self {
        Self {
            id,
            name: UNKNOWN_NAME.to_string(),
            unames: Vec::new(),
            color: PackedColor::DEFAULT,
            color_set: false,
            flags: BlockFlags::default(),
            valid: false,
            variants: Vec::new(),
            scratch: Scratch::default(),
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unames(&self) -> &[String] {
        &self.unames
    }

    pub fn color(&self) -> PackedColor {
        self.color
    }

    pub fn is_color_set(&self) -> bool {
        self.color_set
    }

    pub fn flags(&self) -> BlockFlags {
        self.flags
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_solid(&self) -> bool {
        self.flags.solid
    }

    pub fn is_opaque(&self) -> bool {
        self.flags.opaque
    }

    pub fn is_liquid(&self) -> bool {
        self.flags.liquid
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    pub fn variants(&self) -> &[BlockVariant] {
        &self.variants
    }

    pub fn scratch(&self) -> &Scratch {
        &self.scratch
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self.valid = true;
        self
    }

    /// Sets the short names from a `;`-separated list.
    pub fn set_uname(&mut self, list: &str) -> &mut Self {
        self.unames = split_unames(list);
        self
    }

    pub fn set_color(&mut self, rgb: u32) -> &mut Self {
        self.color = PackedColor::pack(rgb);
        self.color_set = true;
        self
    }

    pub fn set_solid(&mut self, flag: bool) -> &mut Self {
        self.flags.solid = flag;
        self
    }

    pub fn set_opaque(&mut self, flag: bool) -> &mut Self {
        self.flags.opaque = flag;
        self
    }

    pub fn set_liquid(&mut self, flag: bool) -> &mut Self {
        self.flags.liquid = flag;
        self
    }

    pub fn set_spawnable(&mut self, flag: bool) -> &mut Self {
        self.flags.spawnable = flag;
        self
    }

    /// Appends a variant and returns it for further configuration.
    ///
    /// The variant starts out with this block's current color and flags.
    pub fn add_variant(&mut self, block_data: i32, name: impl Into<String>) -> &mut BlockVariant {
        let variant = BlockVariant {
            block_data,
            name: name.into(),
            unames: Vec::new(),
            color: self.color,
            color_set: false,
            flags: self.flags,
            scratch: Scratch::default(),
        };
        self.variants.push(variant);
        let last = self.variants.len() - 1;
        &mut self.variants[last]
    }

    /// First variant with a matching block data, without diagnostics.
    pub fn find_variant(&self, block_data: i32) -> Option<&BlockVariant> {
        self.variants.iter().find(|v| v.block_data == block_data)
    }

    /// Classifies a block data lookup against the variant list.
    pub fn lookup_variant(&self, block_data: i32) -> VariantMatch<'_, BlockVariant> {
        if self.variants.is_empty() {
            return VariantMatch::NoVariants;
        }
        match self.find_variant(block_data) {
            Some(variant) => VariantMatch::Matched(variant),
            None => VariantMatch::Fallback,
        }
    }

    fn resolve_variant(&self, block_data: i32) -> Option<&BlockVariant> {
        match self.lookup_variant(block_data) {
            VariantMatch::Matched(variant) => Some(variant),
            VariantMatch::Fallback => {
                warn!(
                    "did not find blockdata {} (0x{:x}) for block '{}' (id {})",
                    block_data, block_data, self.name, self.id
                );
                None
            }
            VariantMatch::NoVariants => None,
        }
    }

    /// Name, color and flags for `block_data` from a single variant lookup, so an
    /// unmatched block data is reported once.
    pub fn resolve(&self, block_data: i32) -> ResolvedBlock<'_> {
        match self.resolve_variant(block_data) {
            Some(variant) => ResolvedBlock {
                name: &variant.name,
                color: variant.color,
                flags: variant.flags,
            },
            None => ResolvedBlock {
                name: &self.name,
                color: self.color,
                flags: self.flags,
            },
        }
    }

    /// Variant name for `block_data`, or the base name.
    pub fn resolve_name(&self, block_data: i32) -> &str {
        match self.resolve_variant(block_data) {
            Some(variant) => &variant.name,
            None => &self.name,
        }
    }

    pub fn resolve_color(&self, block_data: i32) -> PackedColor {
        self.resolve_variant(block_data)
            .map_or(self.color, |variant| variant.color)
    }

    pub fn resolve_flags(&self, block_data: i32) -> BlockFlags {
        self.resolve_variant(block_data)
            .map_or(self.flags, |variant| variant.flags)
    }

    /// Spawnability for `block_data`. An unmatched block data is logged and the base
    /// flag is used.
    pub fn is_spawnable(&self, block_data: i32) -> bool {
        self.resolve_flags(block_data).spawnable
    }
}

impl fmt::Display for BlockInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block: name={} color={} solid={} opaque={} liquid={} spawnable={} variants={}",
            self.name,
            self.color,
            self.flags.solid as u8,
            self.flags.opaque as u8,
            self.flags.liquid as u8,
            self.flags.spawnable as u8,
            self.variants.len()
        )
    }
}

/// A block data specific identity of a block.
#[derive(Debug)]
pub struct BlockVariant {
    block_data: i32,
    name: String,
    unames: Vec<String>,
    color: PackedColor,
    color_set: bool,
    flags: BlockFlags,
    scratch: Scratch,
}

impl BlockVariant {
    pub fn block_data(&self) -> i32 {
        self.block_data
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unames(&self) -> &[String] {
        &self.unames
    }

    pub fn color(&self) -> PackedColor {
        self.color
    }

    pub fn is_color_set(&self) -> bool {
        self.color_set
    }

    pub fn flags(&self) -> BlockFlags {
        self.flags
    }

    pub fn scratch(&self) -> &Scratch {
        &self.scratch
    }

    pub fn set_uname(&mut self, list: &str) -> &mut Self {
        self.unames = split_unames(list);
        self
    }

    pub fn set_color(&mut self, rgb: u32) -> &mut Self {
        self.color = PackedColor::pack(rgb);
        self.color_set = true;
        self
    }

    pub fn set_solid(&mut self, flag: bool) -> &mut Self {
        self.flags.solid = flag;
        self
    }

    pub fn set_opaque(&mut self, flag: bool) -> &mut Self {
        self.flags.opaque = flag;
        self
    }

    pub fn set_liquid(&mut self, flag: bool) -> &mut Self {
        self.flags.liquid = flag;
        self
    }

    pub fn set_spawnable(&mut self, flag: bool) -> &mut Self {
        self.flags.spawnable = flag;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_block() -> BlockInfo {
        let mut block = BlockInfo::new(17);
        block.set_name("log").set_color(0x6B5130);
        block.add_variant(0, "oak log").set_color(0x6B5130);
        block
            .add_variant(1, "spruce log")
            .set_color(0x3D2813)
            .set_spawnable(false);
        block
    }

    #[test]
    fn test_unconfigured_slot() {
        let block = BlockInfo::new(300);
        assert!(!block.is_valid());
        assert_eq!(block.name(), UNKNOWN_NAME);
        assert_eq!(block.color(), PackedColor::DEFAULT);
        assert!(!block.is_color_set());
        assert_eq!(block.flags(), BlockFlags::default());
    }

    #[test]
    fn test_variant_resolution() {
        let block = log_block();
        assert_eq!(block.resolve_name(0), "oak log");
        assert_eq!(block.resolve_name(1), "spruce log");
        assert_eq!(block.resolve_name(5), "log");

        assert_eq!(block.resolve_color(1).unpack(), 0x3D2813);
        assert_eq!(block.resolve_color(9).unpack(), 0x6B5130);

        assert!(matches!(block.lookup_variant(1), VariantMatch::Matched(v) if v.name() == "spruce log"));
        assert!(matches!(block.lookup_variant(5), VariantMatch::Fallback));
    }

    #[test]
    fn test_resolve_all_at_once() {
        let block = log_block();
        let spruce = block.resolve(1);
        assert_eq!(spruce.name, "spruce log");
        assert_eq!(spruce.color.unpack(), 0x3D2813);
        assert!(!spruce.flags.spawnable);

        let base = block.resolve(5);
        assert_eq!(base.name, "log");
        assert_eq!(base.color.unpack(), 0x6B5130);
        assert_eq!(base.flags, BlockFlags::default());
    }

    #[test]
    fn test_spawnable_fallback() {
        let mut block = log_block();
        assert!(block.is_spawnable(0));
        assert!(!block.is_spawnable(1));
        // unmatched data falls back to the base flag
        assert!(block.is_spawnable(7));
        block.set_spawnable(false);
        assert!(!block.is_spawnable(7));
    }

    #[test]
    fn test_no_variants() {
        let mut block = BlockInfo::new(1);
        block.set_name("stone").set_solid(true).set_color(0x888888);
        assert!(matches!(block.lookup_variant(3), VariantMatch::NoVariants));
        assert_eq!(block.resolve_name(3), "stone");
        assert_eq!(block.color().as_bytes(), [0x88, 0x88, 0x88, 0x00]);
    }

    #[test]
    fn test_variant_inherits_base_flags() {
        let mut block = BlockInfo::new(8);
        block.set_name("water").set_liquid(true).set_solid(false);
        let variant = block.add_variant(0, "still water");
        assert!(variant.flags().liquid);
        assert!(!variant.flags().solid);
        assert!(!variant.is_color_set());
    }

    #[test]
    fn test_display() {
        let mut block = BlockInfo::new(1);
        block.set_name("stone").set_color(0x888888).set_spawnable(false);
        assert_eq!(
            block.to_string(),
            "Block: name=stone color=#888888 solid=1 opaque=1 liquid=0 spawnable=0 variants=0"
        );
    }
}

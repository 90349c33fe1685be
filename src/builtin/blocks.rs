//! Built-in block table, using legacy numeric ids.

use crate::registry::{BlockFlags, RegistryBuilder};

const SOLID: BlockFlags = BlockFlags {
    solid: true,
    opaque: true,
    liquid: false,
    spawnable: true,
};
const CLEAR: BlockFlags = BlockFlags {
    solid: true,
    opaque: false,
    liquid: false,
    spawnable: false,
};
const PLANT: BlockFlags = BlockFlags {
    solid: false,
    opaque: false,
    liquid: false,
    spawnable: false,
};
const LIQUID: BlockFlags = BlockFlags {
    solid: false,
    opaque: false,
    liquid: true,
    spawnable: false,
};

struct BlockDef {
    id: i32,
    name: &'static str,
    uname: &'static str,
    color: u32,
    flags: BlockFlags,
    variants: &'static [VariantDef],
}

struct VariantDef {
    data: i32,
    name: &'static str,
    uname: &'static str,
    color: u32,
}

const fn block(id: i32, name: &'static str, uname: &'static str, color: u32, flags: BlockFlags) -> BlockDef {
    BlockDef {
        id,
        name,
        uname,
        color,
        flags,
        variants: &[],
    }
}

const fn with_variants(
    id: i32,
    name: &'static str,
    uname: &'static str,
    flags: BlockFlags,
    variants: &'static [VariantDef],
) -> BlockDef {
    // the base color follows the first variant
    let color = match variants.first() {
        Some(v) => v.color,
        None => crate::colors::DEFAULT_RGB,
    };
    BlockDef {
        id,
        name,
        uname,
        color,
        flags,
        variants,
    }
}

const fn v(data: i32, name: &'static str, uname: &'static str, color: u32) -> VariantDef {
    VariantDef {
        data,
        name,
        uname,
        color,
    }
}

const STONE_VARIANTS: &[VariantDef] = &[
    v(0, "Stone", "", 0x808080),
    v(1, "Granite", "granite", 0x956C5B),
    v(2, "Polished Granite", "polished_granite", 0x9A7062),
    v(3, "Diorite", "diorite", 0xBDBCBD),
    v(4, "Polished Diorite", "polished_diorite", 0xC3C3C3),
    v(5, "Andesite", "andesite", 0x888889),
    v(6, "Polished Andesite", "polished_andesite", 0x848786),
];

const DIRT_VARIANTS: &[VariantDef] = &[
    v(0, "Dirt", "", 0x8B5A2B),
    v(1, "Coarse Dirt", "coarse_dirt", 0x77553B),
    v(2, "Podzol", "podzol", 0x5B3F18),
];

const PLANK_VARIANTS: &[VariantDef] = &[
    v(0, "Oak Wood Planks", "oak_planks", 0xA2824E),
    v(1, "Spruce Wood Planks", "spruce_planks", 0x735531),
    v(2, "Birch Wood Planks", "birch_planks", 0xC4B37B),
    v(3, "Jungle Wood Planks", "jungle_planks", 0xA07351),
    v(4, "Acacia Wood Planks", "acacia_planks", 0xA85A32),
    v(5, "Dark Oak Wood Planks", "dark_oak_planks", 0x432B14),
];

const SAPLING_VARIANTS: &[VariantDef] = &[
    v(0, "Oak Sapling", "oak_sapling", 0x476D26),
    v(1, "Spruce Sapling", "spruce_sapling", 0x35452B),
    v(2, "Birch Sapling", "birch_sapling", 0x769448),
    v(3, "Jungle Sapling", "jungle_sapling", 0x31561A),
    v(4, "Acacia Sapling", "acacia_sapling", 0x6F7F1E),
    v(5, "Dark Oak Sapling", "dark_oak_sapling", 0x3D5A1E),
];

const SAND_VARIANTS: &[VariantDef] = &[
    v(0, "Sand", "", 0xDBD3A0),
    v(1, "Red Sand", "red_sand", 0xBE6621),
];

const LOG_VARIANTS: &[VariantDef] = &[
    v(0, "Oak Wood", "oak_log", 0x6D5532),
    v(1, "Spruce Wood", "spruce_log", 0x3A2510),
    v(2, "Birch Wood", "birch_log", 0xD8D7D2),
    v(3, "Jungle Wood", "jungle_log", 0x554419),
];

const LEAF_VARIANTS: &[VariantDef] = &[
    v(0, "Oak Leaves", "oak_leaves", 0x375F24),
    v(1, "Spruce Leaves", "spruce_leaves", 0x3D633D),
    v(2, "Birch Leaves", "birch_leaves", 0x506A2F),
    v(3, "Jungle Leaves", "jungle_leaves", 0x307114),
];

const LOG2_VARIANTS: &[VariantDef] = &[
    v(0, "Acacia Wood", "acacia_log", 0x676056),
    v(1, "Dark Oak Wood", "dark_oak_log", 0x3C2E1A),
];

const LEAF2_VARIANTS: &[VariantDef] = &[
    v(0, "Acacia Leaves", "acacia_leaves", 0x4B6828),
    v(1, "Dark Oak Leaves", "dark_oak_leaves", 0x23520B),
];

const WOOL_VARIANTS: &[VariantDef] = &[
    v(0, "White Wool", "white_wool", 0xE9ECEC),
    v(1, "Orange Wool", "orange_wool", 0xF07613),
    v(2, "Magenta Wool", "magenta_wool", 0xBD44B3),
    v(3, "Light Blue Wool", "light_blue_wool", 0x3AAFD9),
    v(4, "Yellow Wool", "yellow_wool", 0xF8C627),
    v(5, "Lime Wool", "lime_wool", 0x70B919),
    v(6, "Pink Wool", "pink_wool", 0xED8DAC),
    v(7, "Gray Wool", "gray_wool", 0x3E4447),
    v(8, "Light Gray Wool", "light_gray_wool", 0x8E8E86),
    v(9, "Cyan Wool", "cyan_wool", 0x158991),
    v(10, "Purple Wool", "purple_wool", 0x792AAC),
    v(11, "Blue Wool", "blue_wool", 0x35399D),
    v(12, "Brown Wool", "brown_wool", 0x724728),
    v(13, "Green Wool", "green_wool", 0x546D1B),
    v(14, "Red Wool", "red_wool", 0xA12722),
    v(15, "Black Wool", "black_wool", 0x141519),
];

const STAINED_CLAY_VARIANTS: &[VariantDef] = &[
    v(0, "White Terracotta", "white_terracotta", 0xD2B2A1),
    v(1, "Orange Terracotta", "orange_terracotta", 0xA25426),
    v(2, "Magenta Terracotta", "magenta_terracotta", 0x95586D),
    v(3, "Light Blue Terracotta", "light_blue_terracotta", 0x716D8A),
    v(4, "Yellow Terracotta", "yellow_terracotta", 0xBA8523),
    v(5, "Lime Terracotta", "lime_terracotta", 0x687635),
    v(6, "Pink Terracotta", "pink_terracotta", 0xA24E4F),
    v(7, "Gray Terracotta", "gray_terracotta", 0x3A2A24),
    v(8, "Light Gray Terracotta", "light_gray_terracotta", 0x876B62),
    v(9, "Cyan Terracotta", "cyan_terracotta", 0x575B5B),
    v(10, "Purple Terracotta", "purple_terracotta", 0x764656),
    v(11, "Blue Terracotta", "blue_terracotta", 0x4A3B5B),
    v(12, "Brown Terracotta", "brown_terracotta", 0x4D3324),
    v(13, "Green Terracotta", "green_terracotta", 0x4C532A),
    v(14, "Red Terracotta", "red_terracotta", 0x8F3D2E),
    v(15, "Black Terracotta", "black_terracotta", 0x251610),
];

const STONE_BRICK_VARIANTS: &[VariantDef] = &[
    v(0, "Stone Bricks", "stone_bricks", 0x7A7A7A),
    v(1, "Mossy Stone Bricks", "mossy_stone_bricks", 0x737969),
    v(2, "Cracked Stone Bricks", "cracked_stone_bricks", 0x767576),
    v(3, "Chiseled Stone Bricks", "chiseled_stone_bricks", 0x777777),
];

const STONE_SLAB_VARIANTS: &[VariantDef] = &[
    v(0, "Stone Slab", "stone_slab", 0x9E9E9E),
    v(1, "Sandstone Slab", "sandstone_slab", 0xD8CB9B),
    v(3, "Cobblestone Slab", "cobblestone_slab", 0x807F7F),
    v(4, "Brick Slab", "brick_slab", 0x966153),
    v(5, "Stone Brick Slab", "stone_brick_slab", 0x7A7A7A),
    v(6, "Quartz Slab", "quartz_slab", 0xEBE5DE),
    v(7, "Nether Brick Slab", "nether_brick_slab", 0x2C1519),
];

const TALL_GRASS_VARIANTS: &[VariantDef] = &[
    v(0, "Shrub", "shrub", 0x7A5E35),
    v(1, "Tall Grass", "tall_grass", 0x567D46),
    v(2, "Fern", "fern", 0x4F7541),
];

const FLOWER_VARIANTS: &[VariantDef] = &[
    v(0, "Poppy", "poppy", 0xC5241B),
    v(1, "Blue Orchid", "blue_orchid", 0x2FA2A8),
    v(2, "Allium", "allium", 0xB176D8),
    v(3, "Azure Bluet", "azure_bluet", 0xE0E6EE),
    v(4, "Red Tulip", "red_tulip", 0xC92A1B),
    v(8, "Oxeye Daisy", "oxeye_daisy", 0xD6D6D6),
];

static BLOCKS: &[BlockDef] = &[
    block(0, "Air", "air", 0xFFFFFF, PLANT),
    with_variants(1, "Stone", "stone", SOLID, STONE_VARIANTS),
    block(2, "Grass", "grass;grass_block", 0x567D46, SOLID),
    with_variants(3, "Dirt", "dirt", SOLID, DIRT_VARIANTS),
    block(4, "Cobblestone", "cobblestone", 0x807F7F, SOLID),
    with_variants(5, "Wood Planks", "planks", SOLID, PLANK_VARIANTS),
    with_variants(6, "Sapling", "sapling", PLANT, SAPLING_VARIANTS),
    block(7, "Bedrock", "bedrock", 0x555555, SOLID),
    block(8, "Flowing Water", "flowing_water", 0x3B56A5, LIQUID),
    block(9, "Water", "water", 0x3B56A5, LIQUID),
    block(10, "Flowing Lava", "flowing_lava", 0xCF5B13, LIQUID),
    block(11, "Lava", "lava", 0xCF5B13, LIQUID),
    with_variants(12, "Sand", "sand", SOLID, SAND_VARIANTS),
    block(13, "Gravel", "gravel", 0x837F7E, SOLID),
    block(14, "Gold Ore", "gold_ore", 0x8F8B7C, SOLID),
    block(15, "Iron Ore", "iron_ore", 0x88827E, SOLID),
    block(16, "Coal Ore", "coal_ore", 0x737373, SOLID),
    with_variants(17, "Wood", "log;wood", SOLID, LOG_VARIANTS),
    with_variants(18, "Leaves", "leaves", CLEAR, LEAF_VARIANTS),
    block(19, "Sponge", "sponge", 0xC3C04A, SOLID),
    block(20, "Glass", "glass", 0xDAF0F4, CLEAR),
    block(24, "Sandstone", "sandstone", 0xD8CB9B, SOLID),
    with_variants(31, "Tall Grass", "tallgrass", PLANT, TALL_GRASS_VARIANTS),
    with_variants(35, "Wool", "wool", SOLID, WOOL_VARIANTS),
    block(37, "Dandelion", "dandelion;yellow_flower", 0xF1F902, PLANT),
    with_variants(38, "Flower", "red_flower", PLANT, FLOWER_VARIANTS),
    with_variants(44, "Stone Slab", "slab", CLEAR, STONE_SLAB_VARIANTS),
    block(45, "Bricks", "brick_block;bricks", 0x966153, SOLID),
    block(48, "Moss Stone", "mossy_cobblestone", 0x6E765E, SOLID),
    block(49, "Obsidian", "obsidian", 0x14121E, SOLID),
    block(50, "Torch", "torch", 0xFFD800, PLANT),
    block(53, "Oak Wood Stairs", "oak_stairs", 0xA2824E, CLEAR),
    block(54, "Chest", "chest", 0xA2752F, CLEAR),
    block(56, "Diamond Ore", "diamond_ore", 0x7D8E8D, SOLID),
    block(58, "Crafting Table", "crafting_table", 0x6B4A2B, SOLID),
    block(59, "Wheat", "wheat", 0xA6A13D, PLANT),
    block(60, "Farmland", "farmland", 0x58391C, CLEAR),
    block(78, "Snow", "snow_layer", 0xF9FEFE, CLEAR),
    block(79, "Ice", "ice", 0x91B7FD, CLEAR),
    block(80, "Snow Block", "snow", 0xF9FEFE, SOLID),
    block(81, "Cactus", "cactus", 0x0D6B1A, CLEAR),
    block(82, "Clay", "clay", 0xA0A6B3, SOLID),
    block(83, "Sugar Cane", "reeds", 0x94C065, PLANT),
    block(87, "Netherrack", "netherrack", 0x6F3634, SOLID),
    block(88, "Soul Sand", "soul_sand", 0x513E32, SOLID),
    block(89, "Glowstone", "glowstone", 0xAB8654, CLEAR),
    with_variants(98, "Stone Bricks", "stonebrick", SOLID, STONE_BRICK_VARIANTS),
    block(112, "Nether Brick", "nether_brick", 0x2C1519, SOLID),
    block(121, "End Stone", "end_stone", 0xDBDE9E, SOLID),
    with_variants(159, "Stained Clay", "stained_hardened_clay", SOLID, STAINED_CLAY_VARIANTS),
    with_variants(161, "Leaves2", "leaves2", CLEAR, LEAF2_VARIANTS),
    with_variants(162, "Wood2", "log2", SOLID, LOG2_VARIANTS),
    block(172, "Hardened Clay", "hardened_clay;terracotta", 0x985E43, SOLID),
    block(174, "Packed Ice", "packed_ice", 0x8DB4FA, SOLID),
    block(243, "Podzol (Bedrock)", "", 0x5B3F18, SOLID),
];

pub(super) fn register(builder: &mut RegistryBuilder) {
    for def in BLOCKS {
        let Some(block) = builder.block(def.id) else {
            continue;
        };
        block
            .set_name(def.name)
            .set_uname(def.uname)
            .set_color(def.color)
            .set_solid(def.flags.solid)
            .set_opaque(def.flags.opaque)
            .set_liquid(def.flags.liquid)
            .set_spawnable(def.flags.spawnable);

        for vdef in def.variants {
            block
                .add_variant(vdef.data, vdef.name)
                .set_uname(vdef.uname)
                .set_color(vdef.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::RegistryBuilder;

    #[test]
    fn test_builtin_blocks() {
        let registry = RegistryBuilder::with_builtin().build();

        assert_eq!(registry.block_name(1, 0), "Stone");
        assert_eq!(registry.block_name(1, 3), "Diorite");
        assert_eq!(registry.block_name(17, 1), "Spruce Wood");
        assert_eq!(registry.block_name(17, 12), "Wood");
        assert_eq!(registry.block_name(35, 14), "Red Wool");
        assert_eq!(registry.block_color(35, 14).unpack(), 0xA12722);

        assert!(registry.block_flags(9, 0).liquid);
        assert!(!registry.is_spawnable(18, 2));
        assert!(registry.is_spawnable(2, 0));

        assert_eq!(registry.find_by_short_name("wood"), Some((17, 0)));
        assert_eq!(registry.find_by_short_name("spruce_log"), Some((17, 1)));
        assert_eq!(registry.find_by_short_name("red_wool"), Some((35, 14)));
        assert_eq!(registry.find_by_short_name("terracotta"), Some((172, 0)));
    }

    #[test]
    fn test_builtin_ids_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for def in super::BLOCKS {
            assert!(seen.insert(def.id), "block id {} listed twice", def.id);
            assert!((0..512).contains(&def.id));
        }
    }

    #[test]
    fn test_builtin_colors_all_set() {
        let registry = RegistryBuilder::with_builtin().build();
        assert!(registry.blocks_without_color().is_empty());
    }
}

//! Built-in item table. Item ids below 256 name the block of the same id.

use crate::registry::RegistryBuilder;

static ITEMS: &[(i32, &str)] = &[
    (1, "Stone"),
    (2, "Grass"),
    (3, "Dirt"),
    (4, "Cobblestone"),
    (5, "Wood Planks"),
    (12, "Sand"),
    (13, "Gravel"),
    (17, "Wood"),
    (20, "Glass"),
    (35, "Wool"),
    (45, "Bricks"),
    (50, "Torch"),
    (54, "Chest"),
    (58, "Crafting Table"),
    (256, "Iron Shovel"),
    (257, "Iron Pickaxe"),
    (258, "Iron Axe"),
    (259, "Flint and Steel"),
    (260, "Apple"),
    (261, "Bow"),
    (262, "Arrow"),
    (263, "Coal"),
    (264, "Diamond"),
    (265, "Iron Ingot"),
    (266, "Gold Ingot"),
    (267, "Iron Sword"),
    (268, "Wooden Sword"),
    (272, "Stone Sword"),
    (276, "Diamond Sword"),
    (278, "Diamond Pickaxe"),
    (280, "Stick"),
    (281, "Bowl"),
    (287, "String"),
    (288, "Feather"),
    (289, "Gunpowder"),
    (295, "Seeds"),
    (296, "Wheat"),
    (297, "Bread"),
    (298, "Leather Cap"),
    (299, "Leather Tunic"),
    (310, "Diamond Helmet"),
    (311, "Diamond Chestplate"),
    (318, "Flint"),
    (319, "Raw Porkchop"),
    (320, "Cooked Porkchop"),
    (323, "Sign"),
    (325, "Bucket"),
    (331, "Redstone"),
    (332, "Snowball"),
    (334, "Leather"),
    (336, "Brick"),
    (337, "Clay"),
    (338, "Sugar Canes"),
    (339, "Paper"),
    (340, "Book"),
    (341, "Slimeball"),
    (344, "Egg"),
    (345, "Compass"),
    (346, "Fishing Rod"),
    (347, "Clock"),
    (348, "Glowstone Dust"),
    (349, "Raw Fish"),
    (351, "Dye"),
    (352, "Bone"),
    (353, "Sugar"),
    (354, "Cake"),
    (355, "Bed"),
    (357, "Cookie"),
    (360, "Melon"),
    (363, "Raw Beef"),
    (364, "Steak"),
    (367, "Rotten Flesh"),
    (368, "Ender Pearl"),
    (383, "Spawn Egg"),
    (388, "Emerald"),
    (391, "Carrot"),
    (392, "Potato"),
    (403, "Enchanted Book"),
];

static COAL_VARIANTS: &[(i32, &str)] = &[(0, "Coal"), (1, "Charcoal")];

static DYE_VARIANTS: &[(i32, &str)] = &[
    (0, "Ink Sac"),
    (1, "Rose Red"),
    (2, "Cactus Green"),
    (3, "Cocoa Beans"),
    (4, "Lapis Lazuli"),
    (5, "Purple Dye"),
    (6, "Cyan Dye"),
    (7, "Light Gray Dye"),
    (8, "Gray Dye"),
    (9, "Pink Dye"),
    (10, "Lime Dye"),
    (11, "Dandelion Yellow"),
    (12, "Light Blue Dye"),
    (13, "Magenta Dye"),
    (14, "Orange Dye"),
    (15, "Bone Meal"),
];

static FISH_VARIANTS: &[(i32, &str)] = &[
    (0, "Raw Fish"),
    (1, "Raw Salmon"),
    (2, "Clownfish"),
    (3, "Pufferfish"),
];

fn variants_of(id: i32) -> &'static [(i32, &'static str)] {
    match id {
        263 => COAL_VARIANTS,
        349 => FISH_VARIANTS,
        351 => DYE_VARIANTS,
        _ => &[],
    }
}

pub(super) fn register(builder: &mut RegistryBuilder) {
    for &(id, name) in ITEMS {
        let item = builder.item(id, name);
        for &(extra_data, variant) in variants_of(id) {
            item.add_variant(extra_data, variant);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::{Registry, UNKNOWN_NAME};

    #[test]
    fn test_builtin_items() {
        let registry = Registry::builtin();
        assert_eq!(registry.item_name(264, 0), "Diamond");
        assert_eq!(registry.item_name(263, 1), "Charcoal");
        assert_eq!(registry.item_name(351, 4), "Lapis Lazuli");
        assert_eq!(registry.item_name(351, 99), "Dye");
        assert_eq!(registry.item_name(9999, 0), UNKNOWN_NAME);
    }
}

use crate::registry::{BiomeInfo, RegistryBuilder};

static BIOMES: &[(i32, &str, u32)] = &[
    (0, "Ocean", 0x000070),
    (1, "Plains", 0x8DB360),
    (2, "Desert", 0xFA9418),
    (3, "Extreme Hills", 0x606060),
    (4, "Forest", 0x056621),
    (5, "Taiga", 0x0B6659),
    (6, "Swampland", 0x07F9B2),
    (7, "River", 0x0000FF),
    (8, "Hell", 0xFF0000),
    (9, "The End", 0x8080FF),
    (10, "Frozen Ocean", 0x9090A0),
    (11, "Frozen River", 0xA0A0FF),
    (12, "Ice Plains", 0xFFFFFF),
    (13, "Ice Mountains", 0xA0A0A0),
    (14, "Mushroom Island", 0xFF00FF),
    (15, "Mushroom Island Shore", 0xA000FF),
    (16, "Beach", 0xFADE55),
    (17, "Desert Hills", 0xD25F12),
    (18, "Forest Hills", 0x22551C),
    (19, "Taiga Hills", 0x163933),
    (20, "Extreme Hills Edge", 0x72789A),
    (21, "Jungle", 0x537B09),
    (22, "Jungle Hills", 0x2C4205),
    (23, "Jungle Edge", 0x628B17),
    (24, "Deep Ocean", 0x000030),
    (25, "Stone Beach", 0xA2A284),
    (26, "Cold Beach", 0xFAF0C0),
    (27, "Birch Forest", 0x307444),
    (28, "Birch Forest Hills", 0x1F5F32),
    (29, "Roofed Forest", 0x40511A),
    (30, "Cold Taiga", 0x31554A),
    (31, "Cold Taiga Hills", 0x243F36),
    (32, "Mega Taiga", 0x596651),
    (33, "Mega Taiga Hills", 0x545F3E),
    (34, "Extreme Hills+", 0x507050),
    (35, "Savanna", 0xBDB25F),
    (36, "Savanna Plateau", 0xA79D64),
    (37, "Mesa", 0xD94515),
    (38, "Mesa Plateau F", 0xB09765),
    (39, "Mesa Plateau", 0xCA8C65),
];

pub(super) fn register(builder: &mut RegistryBuilder) {
    for &(id, name, rgb) in BIOMES {
        builder.add_biome(BiomeInfo::with_color(id, name, rgb));
    }
}

#[cfg(test)]
mod tests {
    use crate::colors::PackedColor;
    use crate::registry::Registry;

    #[test]
    fn test_builtin_biomes() {
        let registry = Registry::builtin();
        assert_eq!(registry.biome_name(21), "Jungle");
        assert_eq!(registry.biome_color(2).unpack(), 0xFA9418);
        assert_eq!(registry.biome_color(200), PackedColor::DEFAULT);
        assert!(registry.biomes().all(|b| b.is_color_set()));
    }
}

use crate::registry::{EnchantmentInfo, RegistryBuilder};

// (id, internal name, official name)
static ENCHANTMENTS: &[(i32, &str, &str)] = &[
    (0, "protection", "Protection"),
    (1, "fire_protection", "Fire Protection"),
    (2, "feather_falling", "Feather Falling"),
    (3, "blast_protection", "Blast Protection"),
    (4, "projectile_protection", "Projectile Protection"),
    (5, "thorns", "Thorns"),
    (6, "respiration", "Respiration"),
    (7, "depth_strider", "Depth Strider"),
    (8, "aqua_affinity", "Aqua Affinity"),
    (9, "sharpness", "Sharpness"),
    (10, "smite", "Smite"),
    (11, "bane_of_arthropods", "Bane of Arthropods"),
    (12, "knockback", "Knockback"),
    (13, "fire_aspect", "Fire Aspect"),
    (14, "looting", "Looting"),
    (15, "efficiency", "Efficiency"),
    (16, "silk_touch", "Silk Touch"),
    (17, "unbreaking", "Unbreaking"),
    (18, "fortune", "Fortune"),
    (19, "power", "Power"),
    (20, "punch", "Punch"),
    (21, "flame", "Flame"),
    (22, "infinity", "Infinity"),
    (23, "luck_of_the_sea", "Luck of the Sea"),
    (24, "lure", "Lure"),
];

pub(super) fn register(builder: &mut RegistryBuilder) {
    for &(id, name, official_name) in ENCHANTMENTS {
        builder.add_enchantment(EnchantmentInfo::new(id, name).with_official_name(official_name));
    }
}

#[cfg(test)]
mod tests {
    use crate::registry::{Registry, UNKNOWN_NAME};

    #[test]
    fn test_builtin_enchantments() {
        let registry = Registry::builtin();
        assert_eq!(registry.enchantment_name(16), "Silk Touch");
        assert_eq!(registry.enchantment(16).map(|e| e.name()), Some("silk_touch"));
        assert_eq!(registry.enchantment_name(99), UNKNOWN_NAME);
    }
}

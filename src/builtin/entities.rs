use crate::registry::{EntityInfo, RegistryBuilder};

// (id, identifier, legacy id string, display name, type)
static ENTITIES: &[(i32, &str, &str, &str, &str)] = &[
    (10, "chicken", "Chicken", "Chicken", "Passive"),
    (11, "cow", "Cow", "Cow", "Passive"),
    (12, "pig", "Pig", "Pig", "Passive"),
    (13, "sheep", "Sheep", "Sheep", "Passive"),
    (14, "wolf", "Wolf", "Wolf", "Neutral"),
    (15, "villager", "Villager", "Villager", "Passive"),
    (16, "mooshroom", "MushroomCow", "Mooshroom", "Passive"),
    (17, "squid", "Squid", "Squid", "Passive"),
    (18, "rabbit", "Rabbit", "Rabbit", "Passive"),
    (19, "bat", "Bat", "Bat", "Passive"),
    (20, "iron_golem", "VillagerGolem", "Iron Golem", "Utility"),
    (21, "snow_golem", "SnowMan", "Snow Golem", "Utility"),
    (22, "ocelot", "Ozelot", "Ocelot", "Passive"),
    (23, "horse", "EntityHorse", "Horse", "Passive"),
    (32, "zombie", "Zombie", "Zombie", "Hostile"),
    (33, "creeper", "Creeper", "Creeper", "Hostile"),
    (34, "skeleton", "Skeleton", "Skeleton", "Hostile"),
    (35, "spider", "Spider", "Spider", "Hostile"),
    (36, "zombie_pigman", "PigZombie", "Zombie Pigman", "Neutral"),
    (37, "slime", "Slime", "Slime", "Hostile"),
    (38, "enderman", "Enderman", "Enderman", "Neutral"),
    (39, "silverfish", "Silverfish", "Silverfish", "Hostile"),
    (40, "cave_spider", "CaveSpider", "Cave Spider", "Hostile"),
    (41, "ghast", "Ghast", "Ghast", "Hostile"),
    (42, "magma_cube", "LavaSlime", "Magma Cube", "Hostile"),
    (43, "blaze", "Blaze", "Blaze", "Hostile"),
    (44, "zombie_villager", "ZombieVillager", "Zombie Villager", "Hostile"),
    (45, "witch", "Witch", "Witch", "Hostile"),
    (63, "player", "Player", "Player", "Player"),
    (64, "item", "Item", "Dropped Item", "Misc"),
    (65, "tnt", "PrimedTnt", "Primed TNT", "Misc"),
    (66, "falling_block", "FallingSand", "Falling Block", "Misc"),
    (69, "xp_orb", "XPOrb", "Experience Orb", "Misc"),
    (80, "arrow", "Arrow", "Arrow", "Projectile"),
    (81, "snowball", "Snowball", "Snowball", "Projectile"),
    (82, "egg", "ThrownEgg", "Thrown Egg", "Projectile"),
    (83, "painting", "Painting", "Painting", "Misc"),
    (84, "minecart", "MinecartRideable", "Minecart", "Vehicle"),
    (90, "boat", "Boat", "Boat", "Vehicle"),
];

pub(super) fn register(builder: &mut RegistryBuilder) {
    for &(id, identifier, id_string, name, etype) in ENTITIES {
        builder.add_entity(EntityInfo::new(id, identifier, id_string, name, etype));
    }
}

/// Material name resolution
///
/// Mirrors how the server resolves item-type names in config: an optional
/// `minecraft:` namespace, any case, spaces or dashes in place of underscores.

use std::collections::HashSet;

use crate::types::Material;

/// Item types a hotbar entry may use out of the box
const VANILLA_ITEMS: &[&str] = &[
    // weapons and tools
    "WOODEN_SWORD", "STONE_SWORD", "IRON_SWORD", "GOLDEN_SWORD", "DIAMOND_SWORD",
    "NETHERITE_SWORD", "WOODEN_AXE", "STONE_AXE", "IRON_AXE", "GOLDEN_AXE",
    "DIAMOND_AXE", "NETHERITE_AXE", "BOW", "CROSSBOW", "TRIDENT", "MACE",
    "FISHING_ROD", "SHIELD", "SHEARS", "FLINT_AND_STEEL",
    // armour
    "LEATHER_HELMET", "IRON_HELMET", "DIAMOND_HELMET", "NETHERITE_HELMET",
    "LEATHER_CHESTPLATE", "IRON_CHESTPLATE", "DIAMOND_CHESTPLATE",
    "NETHERITE_CHESTPLATE", "ELYTRA", "TURTLE_HELMET",
    // utility
    "COMPASS", "RECOVERY_COMPASS", "CLOCK", "MAP", "FILLED_MAP", "BOOK",
    "WRITABLE_BOOK", "WRITTEN_BOOK", "ENCHANTED_BOOK", "KNOWLEDGE_BOOK", "PAPER",
    "NAME_TAG", "LEAD", "SADDLE", "BUNDLE", "SPYGLASS", "ENDER_PEARL", "ENDER_EYE",
    "SNOWBALL", "EGG", "FIREWORK_ROCKET", "FIRE_CHARGE", "BLAZE_ROD", "STICK",
    "BONE", "FEATHER", "STRING", "ARROW", "SPECTRAL_ARROW", "TOTEM_OF_UNDYING",
    "NETHER_STAR", "HEART_OF_THE_SEA", "EXPERIENCE_BOTTLE", "GLASS_BOTTLE",
    "POTION", "SPLASH_POTION", "LINGERING_POTION", "MILK_BUCKET", "BUCKET",
    "WATER_BUCKET", "LAVA_BUCKET",
    // food
    "APPLE", "GOLDEN_APPLE", "ENCHANTED_GOLDEN_APPLE", "GOLDEN_CARROT", "BREAD",
    "COOKED_BEEF", "CAKE", "COOKIE", "MUSHROOM_STEW",
    // materials
    "DIAMOND", "EMERALD", "GOLD_INGOT", "IRON_INGOT", "NETHERITE_INGOT",
    "REDSTONE", "GLOWSTONE_DUST", "LAPIS_LAZULI", "AMETHYST_SHARD", "QUARTZ",
    "SLIME_BALL", "MAGMA_CREAM", "GUNPOWDER", "SUGAR", "BLAZE_POWDER",
    // blocks
    "STONE", "COBBLESTONE", "DIRT", "GRASS_BLOCK", "OAK_PLANKS", "OAK_LOG",
    "GLASS", "CHEST", "ENDER_CHEST", "TRAPPED_CHEST", "BARREL", "ANVIL",
    "CRAFTING_TABLE", "FURNACE", "ENCHANTING_TABLE", "BEACON", "BOOKSHELF",
    "TNT", "HOPPER", "DISPENSER", "REPEATER", "COMPARATOR", "LEVER", "TORCH",
    "REDSTONE_TORCH", "SLIME_BLOCK", "BARRIER", "STRUCTURE_VOID", "NOTE_BLOCK",
    "JUKEBOX", "RESPAWN_ANCHOR", "LODESTONE", "WHITE_WOOL", "RED_WOOL",
    "LIME_WOOL", "RED_BED", "WHITE_BED", "PLAYER_HEAD", "SKELETON_SKULL",
    "WITHER_SKELETON_SKULL", "ZOMBIE_HEAD", "CREEPER_HEAD", "DRAGON_HEAD",
    "ARMOR_STAND", "ITEM_FRAME", "PAINTING", "OAK_SIGN", "OAK_DOOR",
    // dyes
    "WHITE_DYE", "BLACK_DYE", "RED_DYE", "GREEN_DYE", "LIME_DYE", "GRAY_DYE",
    "LIGHT_GRAY_DYE", "YELLOW_DYE", "BLUE_DYE", "PURPLE_DYE", "MAGENTA_DYE",
    "ORANGE_DYE", "PINK_DYE", "CYAN_DYE", "LIGHT_BLUE_DYE", "BROWN_DYE",
    "INK_SAC", "GLOW_INK_SAC",
];

/// Set of item-type identifiers the loader accepts
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    known: HashSet<String>,
}

impl MaterialCatalog {
    /// Catalog of the built-in vanilla item list
    pub fn vanilla() -> Self {
        Self {
            known: VANILLA_ITEMS.iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Vanilla catalog plus ids the server operator registered in `config.toml`
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::vanilla();
        for id in extra {
            let normalized = Self::normalize(id.as_ref());
            if !normalized.is_empty() {
                catalog.known.insert(normalized);
            }
        }
        catalog
    }

    fn normalize(name: &str) -> String {
        let trimmed = name.trim();
        let bare = trimmed
            .strip_prefix("minecraft:")
            .or_else(|| trimmed.strip_prefix("MINECRAFT:"))
            .unwrap_or(trimmed);

        bare.chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_uppercase() })
            .collect()
    }

    /// Resolve a config name to a material. Air never resolves: it cannot
    /// be held, so an item made of it could never be clicked.
    pub fn resolve(&self, name: &str) -> Option<Material> {
        let normalized = Self::normalize(name);
        if !self.known.contains(&normalized) {
            return None;
        }
        let material = Material::new(normalized);
        (!material.is_air()).then_some(material)
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        Self::vanilla()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_accepts_config_spellings() {
        let catalog = MaterialCatalog::vanilla();
        assert_eq!(catalog.resolve("IRON_SWORD").unwrap().id(), "IRON_SWORD");
        assert_eq!(catalog.resolve("iron_sword").unwrap().id(), "IRON_SWORD");
        assert_eq!(catalog.resolve("minecraft:compass").unwrap().id(), "COMPASS");
        assert_eq!(catalog.resolve(" ender pearl ").unwrap().id(), "ENDER_PEARL");
    }

    #[test]
    fn test_resolve_rejects_unknown_and_air() {
        let catalog = MaterialCatalog::with_extra(["AIR"]);
        assert!(catalog.resolve("NOT_A_REAL_ITEM").is_none());
        assert!(catalog.resolve("AIR").is_none());
        assert!(catalog.resolve("").is_none());
    }

    #[test]
    fn test_extra_materials() {
        let catalog = MaterialCatalog::with_extra(["custom_token", "minecraft:echo_shard"]);
        assert_eq!(catalog.len(), MaterialCatalog::vanilla().len() + 2);
        assert!(catalog.resolve("CUSTOM_TOKEN").is_some());
        assert!(catalog.resolve("echo shard").is_some());
    }
}

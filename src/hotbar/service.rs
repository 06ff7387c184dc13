use parking_lot::RwLock;
use std::sync::Arc;
use toml::Table;
use tracing::{debug, info};
use uuid::Uuid;

use crate::hotbar::item::HotbarItem;
use crate::hotbar::loader::{RegistryLoader, SkippedEntry};
use crate::hotbar::material::MaterialCatalog;
use crate::hotbar::registry::Registry;
use crate::host::Host;
use crate::types::{ItemStack, ProfileState};

/// Owns the live registry and answers give/lookup requests against it.
///
/// Readers work on an `Arc` snapshot; a reload builds a fresh registry and
/// swaps it in whole, so nobody observes a half-loaded state.
pub struct HotbarService {
    registry: RwLock<Arc<Registry>>,
    catalog: MaterialCatalog,
    fallback_state: ProfileState,
}

impl HotbarService {
    pub fn new(catalog: MaterialCatalog, fallback_state: ProfileState) -> Self {
        Self {
            registry: RwLock::new(Arc::new(Registry::new())),
            catalog,
            fallback_state,
        }
    }

    /// Rebuild the registry from a parsed hotbar config and swap it in.
    /// Returns the entries that were skipped.
    pub fn reload(&self, root: &Table) -> Vec<SkippedEntry> {
        let report = RegistryLoader::new(&self.catalog)
            .with_fallback_state(self.fallback_state)
            .load_report(root);

        let items = report.registry.len();
        *self.registry.write() = Arc::new(report.registry);
        info!("[Hotbar] Registry swapped in with {} item(s)", items);
        report.skipped
    }

    /// Current registry snapshot
    pub fn snapshot(&self) -> Arc<Registry> {
        self.registry.read().clone()
    }

    /// Clear `player`'s inventory and lay out the items of `state`
    pub fn give(&self, host: &mut dyn Host, player: Uuid, state: ProfileState) {
        let registry = self.snapshot();
        host.clear_inventory(player);

        let items = registry.state(state);
        for item in items.iter() {
            host.set_item(player, item.slot, item.render());
        }

        host.update_inventory(player);
        debug!("[Hotbar] Gave {} {} item(s) to {}", items.len(), state, player);
    }

    /// Find the item a held stack was rendered from. The player's own state
    /// is searched first, then every other state.
    pub fn resolve_stack(&self, state: ProfileState, stack: &ItemStack) -> Option<HotbarItem> {
        if stack.is_empty() || stack.display_name.is_none() {
            return None;
        }

        let registry = self.snapshot();
        std::iter::once(state)
            .chain(ProfileState::ALL.into_iter().filter(|other| *other != state))
            .find_map(|candidate| registry.state(candidate).by_stack(stack).cloned())
    }

    /// Item configured at `slot` for `state`
    pub fn resolve_slot(&self, state: ProfileState, slot: u8) -> Option<HotbarItem> {
        self.snapshot().state(state).by_slot(slot).cloned()
    }

    /// Item by key, for commands and menus that refer to items by name
    pub fn lookup(&self, state: ProfileState, key: &str) -> Option<HotbarItem> {
        self.snapshot().get(state, key).cloned()
    }

    /// Items of `state` sorted by slot
    pub fn items(&self, state: ProfileState) -> Vec<HotbarItem> {
        let mut items: Vec<HotbarItem> = self.snapshot().state(state).iter().cloned().collect();
        items.sort_by_key(|item| item.slot);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCall, MemoryHost};
    use crate::types::Material;

    const CONFIG: &str = r#"
        [ITEMS.IN_LOBBY.UNRANKED]
        NAME = "&aUnranked"
        MATERIAL = "IRON_SWORD"
        SLOT = 0
        LORE = ["&7Casual queue"]

        [ITEMS.IN_LOBBY.KIT_EDITOR]
        NAME = "&eKit Editor"
        MATERIAL = "BOOK"
        SLOT = 4
        CUSTOM_MODEL_DATA = 5

        [ITEMS.IN_QUEUE.LEAVE_QUEUE]
        NAME = "&cLeave Queue"
        MATERIAL = "RED_DYE"
        SLOT = 8

        [CUSTOM_ITEMS.SPAWN]
        NAME = "&bSpawn"
        MATERIAL = "COMPASS"
        SLOT = 8
        COMMAND = ["/spawn", "say hi"]
    "#;

    fn service() -> HotbarService {
        let service = HotbarService::new(MaterialCatalog::vanilla(), ProfileState::InLobby);
        let skipped = service.reload(&toml::from_str(CONFIG).unwrap());
        assert!(skipped.is_empty());
        service
    }

    #[test]
    fn test_give_then_resolve_every_slot() {
        let service = service();
        let mut host = MemoryHost::new();
        let player = host.join("Steve");

        service.give(&mut host, player, ProfileState::InLobby);

        for slot in 0..9u8 {
            let placed = host.slot(player, slot);
            let resolved = service.resolve_slot(ProfileState::InLobby, slot);
            match (placed, resolved) {
                (Some(stack), Some(item)) => {
                    assert!(item.matches_stack(stack));
                    let by_stack = service.resolve_stack(ProfileState::InLobby, stack).unwrap();
                    assert_eq!(by_stack.key, item.key);
                }
                (None, None) => {}
                other => panic!("slot {} mismatch: {:?}", slot, other),
            }
        }

        assert_eq!(host.inventory(player).len(), 3);
        assert_eq!(service.resolve_slot(ProfileState::InLobby, 8).unwrap().key, "SPAWN");
        assert!(service.resolve_slot(ProfileState::InLobby, 2).is_none());
    }

    #[test]
    fn test_give_clears_first_and_updates_last() {
        let service = service();
        let mut host = MemoryHost::new();
        let player = host.join("Steve");
        host.set_item(player, 20, ItemStack::new(Material::new("DIRT")));
        host.take_calls();

        service.give(&mut host, player, ProfileState::InQueue);

        let calls = host.take_calls();
        assert_eq!(calls.first(), Some(&HostCall::ClearInventory { player }));
        assert_eq!(calls.last(), Some(&HostCall::UpdateInventory { player }));
        assert!(host.slot(player, 20).is_none());
        assert_eq!(host.inventory(player).len(), 1);
    }

    #[test]
    fn test_render_carries_lore_and_model_data() {
        let service = service();
        let mut host = MemoryHost::new();
        let player = host.join("Steve");
        service.give(&mut host, player, ProfileState::InLobby);

        let sword = host.slot(player, 0).unwrap();
        assert_eq!(sword.lore, vec!["§7Casual queue".to_string()]);
        let book = host.slot(player, 4).unwrap();
        assert_eq!(book.custom_model_data, Some(5));
        assert!(book.lore.is_empty());
    }

    #[test]
    fn test_resolve_stack_falls_back_to_other_states() {
        let service = service();
        let leave = service.lookup(ProfileState::InQueue, "LEAVE_QUEUE").unwrap();

        let found = service.resolve_stack(ProfileState::InLobby, &leave.render()).unwrap();
        assert_eq!(found.key, "LEAVE_QUEUE");
    }

    #[test]
    fn test_resolve_stack_rejects_foreign_stacks() {
        let service = service();
        let plain = ItemStack::new(Material::new("IRON_SWORD"));
        assert!(service.resolve_stack(ProfileState::InLobby, &plain).is_none());

        let renamed = plain.with_name("§aUnranked!");
        assert!(service.resolve_stack(ProfileState::InLobby, &renamed).is_none());

        let air = ItemStack::new(Material::air()).with_name("§aUnranked");
        assert!(service.resolve_stack(ProfileState::InLobby, &air).is_none());
    }

    #[test]
    fn test_reload_replaces_wholesale() {
        let service = service();
        let before = service.snapshot();

        service.reload(&toml::from_str("[ITEMS.IN_LOBBY.STATS]\nSLOT = 1").unwrap());

        assert_eq!(before.len(), 4);
        assert!(service.lookup(ProfileState::InLobby, "UNRANKED").is_none());
        assert!(service.lookup(ProfileState::InLobby, "STATS").is_some());
        assert_eq!(service.items(ProfileState::InLobby).len(), 1);
    }
}

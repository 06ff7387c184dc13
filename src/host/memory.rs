/// In-memory host
///
/// Keeps per-player inventories and records every side effect, so the
/// console harness and the tests can see what the hotbar did.

use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

use super::{CommandSender, Host, Menu};
use crate::types::{GameMode, ItemStack};
use crate::utils::strip_colors;

/// Main inventory size (hotbar is slots 0-8)
const INVENTORY_SIZE: usize = 36;

/// A side effect observed by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    ClearInventory { player: Uuid },
    SetItem { player: Uuid, slot: u8 },
    UpdateInventory { player: Uuid },
    PlayerCommand { player: Uuid, command: String },
    ConsoleCommand { command: String },
    OpenMenu { player: Uuid, menu: Menu },
    ToggleVisibility { player: Uuid },
    Message { target: CommandSender, message: String },
}

struct OnlinePlayer {
    name: String,
    game_mode: GameMode,
    slots: Vec<Option<ItemStack>>,
    others_hidden: bool,
}

impl OnlinePlayer {
    fn new(name: String) -> Self {
        Self {
            name,
            game_mode: GameMode::Survival,
            slots: vec![None; INVENTORY_SIZE],
            others_hidden: false,
        }
    }
}

#[derive(Default)]
pub struct MemoryHost {
    players: HashMap<Uuid, OnlinePlayer>,
    calls: Vec<HostCall>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an online player in survival with an empty inventory
    pub fn join(&mut self, name: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.players.insert(id, OnlinePlayer::new(name.to_string()));
        info!("{} joined ({})", name, id);
        id
    }

    pub fn quit(&mut self, player: Uuid) -> bool {
        self.players.remove(&player).is_some()
    }

    pub fn set_game_mode(&mut self, player: Uuid, mode: GameMode) {
        if let Some(online) = self.players.get_mut(&player) {
            online.game_mode = mode;
        }
    }

    /// Get item at slot
    pub fn slot(&self, player: Uuid, slot: u8) -> Option<&ItemStack> {
        self.players.get(&player)?.slots.get(slot as usize)?.as_ref()
    }

    /// Occupied slots in slot order
    pub fn inventory(&self, player: Uuid) -> Vec<(u8, &ItemStack)> {
        self.players
            .get(&player)
            .map(|online| {
                online
                    .slots
                    .iter()
                    .enumerate()
                    .filter_map(|(i, stack)| stack.as_ref().map(|s| (i as u8, s)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn others_hidden(&self, player: Uuid) -> bool {
        self.players.get(&player).map(|p| p.others_hidden).unwrap_or(false)
    }

    pub fn online(&self) -> impl Iterator<Item = (Uuid, &str)> {
        self.players.iter().map(|(id, p)| (*id, p.name.as_str()))
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Drain recorded calls
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    fn name_of(&self, player: Uuid) -> String {
        self.players
            .get(&player)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| player.to_string())
    }
}

impl Host for MemoryHost {
    fn clear_inventory(&mut self, player: Uuid) {
        if let Some(online) = self.players.get_mut(&player) {
            online.slots = vec![None; INVENTORY_SIZE];
        }
        self.calls.push(HostCall::ClearInventory { player });
    }

    fn set_item(&mut self, player: Uuid, slot: u8, stack: ItemStack) {
        if let Some(online) = self.players.get_mut(&player) {
            if let Some(target) = online.slots.get_mut(slot as usize) {
                *target = Some(stack);
            }
        }
        self.calls.push(HostCall::SetItem { player, slot });
    }

    fn update_inventory(&mut self, player: Uuid) {
        self.calls.push(HostCall::UpdateInventory { player });
    }

    fn game_mode(&self, player: Uuid) -> Option<GameMode> {
        self.players.get(&player).map(|p| p.game_mode)
    }

    fn player_name(&self, player: Uuid) -> Option<String> {
        self.players.get(&player).map(|p| p.name.clone())
    }

    fn find_player(&self, name: &str) -> Option<Uuid> {
        self.players
            .iter()
            .find(|(_, p)| p.name.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }

    fn perform_command(&mut self, player: Uuid, command: &str) -> bool {
        info!("{} issued command: /{}", self.name_of(player), command);
        self.calls.push(HostCall::PlayerCommand {
            player,
            command: command.to_string(),
        });
        true
    }

    fn dispatch_console_command(&mut self, command: &str) -> bool {
        info!("CONSOLE issued command: /{}", command);
        self.calls.push(HostCall::ConsoleCommand {
            command: command.to_string(),
        });
        true
    }

    fn open_menu(&mut self, player: Uuid, menu: Menu) {
        info!("Opening {} menu for {}", menu, self.name_of(player));
        self.calls.push(HostCall::OpenMenu { player, menu });
    }

    fn toggle_visibility(&mut self, player: Uuid) {
        if let Some(online) = self.players.get_mut(&player) {
            online.others_hidden = !online.others_hidden;
            debug!("{} now hides others: {}", online.name, online.others_hidden);
        }
        self.calls.push(HostCall::ToggleVisibility { player });
    }

    fn send_message(&mut self, target: CommandSender, message: &str) {
        let recipient = match target {
            CommandSender::Player(id) => self.name_of(id),
            CommandSender::Console => "CONSOLE".to_string(),
        };
        info!("[-> {}] {}", recipient, strip_colors(message));
        self.calls.push(HostCall::Message {
            target,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Material;

    #[test]
    fn test_set_and_clear_slots() {
        let mut host = MemoryHost::new();
        let player = host.join("Steve");

        host.set_item(player, 4, ItemStack::new(Material::new("COMPASS")));
        host.set_item(player, 40, ItemStack::new(Material::new("BOOK")));
        assert_eq!(host.slot(player, 4).map(|s| s.material.id()), Some("COMPASS"));
        assert_eq!(host.inventory(player).len(), 1);

        host.clear_inventory(player);
        assert!(host.slot(player, 4).is_none());
    }

    #[test]
    fn test_find_player_ignores_case() {
        let mut host = MemoryHost::new();
        let player = host.join("Notch");
        assert_eq!(host.find_player("notch"), Some(player));
        assert_eq!(host.find_player("jeb_"), None);
    }

    #[test]
    fn test_toggle_visibility() {
        let mut host = MemoryHost::new();
        let player = host.join("Steve");
        host.toggle_visibility(player);
        assert!(host.others_hidden(player));
        host.toggle_visibility(player);
        assert!(!host.others_hidden(player));
    }

    #[test]
    fn test_take_calls_drains_the_log() {
        let mut host = MemoryHost::new();
        host.dispatch_console_command("say hi");
        assert_eq!(
            host.take_calls(),
            vec![HostCall::ConsoleCommand { command: "say hi".to_string() }]
        );
        assert!(host.calls().is_empty());
        assert!(host.take_calls().is_empty());
    }
}

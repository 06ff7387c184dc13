//! Capabilities the plugin needs from the game server.
//!
//! Everything server-side (inventories, command dispatch, menus, the event
//! bus) is reached through [`Host`], so the hotbar logic runs the same
//! against a live server or the in-memory [`MemoryHost`].

pub mod events;
pub mod memory;

pub use events::{EventBus, InteractEvent, Listener};
pub use memory::{HostCall, MemoryHost};

use std::fmt;
use uuid::Uuid;

use crate::types::{GameMode, ItemStack};

/// Menus the server knows how to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Menu {
    Queue,
    RankedQueue,
    KitEditor,
    Settings,
    Stats,
    Leaderboards,
    Divisions,
    Spectate,
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Menu::Queue => "Queues",
            Menu::RankedQueue => "Ranked Queues",
            Menu::KitEditor => "Kit Editor",
            Menu::Settings => "Settings",
            Menu::Stats => "Stats",
            Menu::Leaderboards => "Leaderboards",
            Menu::Divisions => "Divisions",
            Menu::Spectate => "Spectate",
        };
        f.write_str(name)
    }
}

/// Who issued a chat command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandSender {
    Player(Uuid),
    Console,
}

/// Server-side operations used by the hotbar
pub trait Host {
    fn clear_inventory(&mut self, player: Uuid);

    fn set_item(&mut self, player: Uuid, slot: u8, stack: ItemStack);

    /// Push pending inventory changes to the client
    fn update_inventory(&mut self, player: Uuid);

    fn game_mode(&self, player: Uuid) -> Option<GameMode>;

    fn player_name(&self, player: Uuid) -> Option<String>;

    /// Online player by exact name, ignoring case
    fn find_player(&self, name: &str) -> Option<Uuid>;

    /// Run `command` (no leading slash) as `player`. Returns whether the
    /// server knew the command.
    fn perform_command(&mut self, player: Uuid, command: &str) -> bool;

    /// Run `command` (no leading slash) as the console
    fn dispatch_console_command(&mut self, command: &str) -> bool;

    fn open_menu(&mut self, player: Uuid, menu: Menu);

    fn toggle_visibility(&mut self, player: Uuid);

    fn send_message(&mut self, target: CommandSender, message: &str);
}

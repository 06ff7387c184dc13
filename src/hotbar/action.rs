use std::fmt;

use tracing::debug;
use uuid::Uuid;

use crate::host::{Host, Menu};

/// Built-in behaviours a hotbar item can trigger.
///
/// A built-in entry in `ITEMS.<STATE>` is bound to an action by its key, so
/// `ITEMS.IN_LOBBY.UNRANKED` runs [`ItemAction::Unranked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemAction {
    Unranked,
    Ranked,
    Queues,
    KitEditor,
    Settings,
    Stats,
    Leaderboards,
    Divisions,
    PartyCreate,
    PartyInfo,
    PartyDisband,
    SpectateMenu,
    LeaveQueue,
    StopSpectating,
    Rematch,
    ToggleVisibility,
}

/// What running an action does on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionEffect {
    OpenMenu(Menu),
    PlayerCommand(&'static str),
    ToggleVisibility,
}

impl ItemAction {
    pub const ALL: [ItemAction; 16] = [
        ItemAction::Unranked,
        ItemAction::Ranked,
        ItemAction::Queues,
        ItemAction::KitEditor,
        ItemAction::Settings,
        ItemAction::Stats,
        ItemAction::Leaderboards,
        ItemAction::Divisions,
        ItemAction::PartyCreate,
        ItemAction::PartyInfo,
        ItemAction::PartyDisband,
        ItemAction::SpectateMenu,
        ItemAction::LeaveQueue,
        ItemAction::StopSpectating,
        ItemAction::Rematch,
        ItemAction::ToggleVisibility,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ItemAction::Unranked => "UNRANKED",
            ItemAction::Ranked => "RANKED",
            ItemAction::Queues => "QUEUES",
            ItemAction::KitEditor => "KIT_EDITOR",
            ItemAction::Settings => "SETTINGS",
            ItemAction::Stats => "STATS",
            ItemAction::Leaderboards => "LEADERBOARDS",
            ItemAction::Divisions => "DIVISIONS",
            ItemAction::PartyCreate => "PARTY_CREATE",
            ItemAction::PartyInfo => "PARTY_INFO",
            ItemAction::PartyDisband => "PARTY_DISBAND",
            ItemAction::SpectateMenu => "SPECTATE_MENU",
            ItemAction::LeaveQueue => "LEAVE_QUEUE",
            ItemAction::StopSpectating => "STOP_SPECTATING",
            ItemAction::Rematch => "REMATCH",
            ItemAction::ToggleVisibility => "TOGGLE_VISIBILITY",
        }
    }

    /// Look up an action by item key, ignoring case
    pub fn from_key(key: &str) -> Option<Self> {
        let wanted = key.trim().to_uppercase();
        Self::ALL.into_iter().find(|action| action.name() == wanted)
    }

    /// The action table
    pub fn effect(&self) -> ActionEffect {
        match self {
            ItemAction::Unranked | ItemAction::Queues => ActionEffect::OpenMenu(Menu::Queue),
            ItemAction::Ranked => ActionEffect::OpenMenu(Menu::RankedQueue),
            ItemAction::KitEditor => ActionEffect::OpenMenu(Menu::KitEditor),
            ItemAction::Settings => ActionEffect::OpenMenu(Menu::Settings),
            ItemAction::Stats => ActionEffect::OpenMenu(Menu::Stats),
            ItemAction::Leaderboards => ActionEffect::OpenMenu(Menu::Leaderboards),
            ItemAction::Divisions => ActionEffect::OpenMenu(Menu::Divisions),
            ItemAction::SpectateMenu => ActionEffect::OpenMenu(Menu::Spectate),
            ItemAction::PartyCreate => ActionEffect::PlayerCommand("party create"),
            ItemAction::PartyInfo => ActionEffect::PlayerCommand("party info"),
            ItemAction::PartyDisband => ActionEffect::PlayerCommand("party disband"),
            ItemAction::LeaveQueue => ActionEffect::PlayerCommand("queue leave"),
            ItemAction::StopSpectating => ActionEffect::PlayerCommand("spectate leave"),
            ItemAction::Rematch => ActionEffect::PlayerCommand("rematch"),
            ItemAction::ToggleVisibility => ActionEffect::ToggleVisibility,
        }
    }

    /// Run the action for `player`
    pub fn execute(&self, host: &mut dyn Host, player: Uuid) {
        debug!("[Hotbar] Running action {} for {}", self, player);
        match self.effect() {
            ActionEffect::OpenMenu(menu) => host.open_menu(player, menu),
            ActionEffect::PlayerCommand(command) => {
                host.perform_command(player, command);
            }
            ActionEffect::ToggleVisibility => host.toggle_visibility(player),
        }
    }
}

impl fmt::Display for ItemAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

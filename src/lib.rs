//! Hotbar items for PvP lobbies
//!
//! Binds config-defined hotbar items to profile states, lays them out in a
//! player's inventory, and runs a built-in action or a list of commands when
//! a player clicks one. The game server is reached only through [`host::Host`].

pub mod commands;
pub mod config;
pub mod handlers;
pub mod host;
pub mod hotbar;
pub mod logging;
pub mod profile;
pub mod types;
pub mod utils;

pub use handlers::{InteractOutcome, ItemListener};
pub use hotbar::{HotbarItem, HotbarService, ItemAction, MaterialCatalog, Registry, RegistryLoader};
pub use host::{EventBus, Host, InteractEvent, Listener, MemoryHost};
pub use profile::{ProfileManager, Profiles};
pub use types::{ClickAction, GameMode, ItemStack, MatchPhase, ProfileState};

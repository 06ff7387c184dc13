//! Chat commands the plugin registers with the server

pub mod divisions;
pub mod hotbar;

use crate::config::{Config, ConfigLoader};
use crate::hotbar::HotbarService;
use uuid::Uuid;

use crate::host::{CommandSender, Host, Menu};
use crate::types::{GameMode, ItemStack};

/// Services a command handler may touch
pub struct CommandContext<'a> {
    pub service: &'a HotbarService,
    pub loader: &'a ConfigLoader,
    pub config: &'a Config,
}

/// Route a command line (leading slash optional) to its handler.
/// Returns false when no plugin command matches.
pub fn dispatch(ctx: &CommandContext<'_>, host: &mut dyn Host, sender: CommandSender, line: &str) -> bool {
    let line = line.trim();
    let line = line.strip_prefix('/').unwrap_or(line);
    let mut parts = line.split_whitespace();
    let Some(label) = parts.next() else {
        return false;
    };
    let args: Vec<&str> = parts.collect();

    match label.to_lowercase().as_str() {
        "hotbar" => {
            hotbar::execute(ctx, host, sender, &args);
            true
        }
        "divisions" => {
            divisions::execute(host, sender);
            true
        }
        _ => false,
    }
}

/// [`Host`] wrapper that offers every command to the plugin's own handlers
/// before the server sees it, the way a server resolves registered commands.
/// Everything else goes straight to the wrapped host.
pub struct CommandRouter<'h, 'c> {
    host: &'h mut dyn Host,
    ctx: &'c CommandContext<'c>,
}

impl<'h, 'c> CommandRouter<'h, 'c> {
    pub fn new(host: &'h mut dyn Host, ctx: &'c CommandContext<'c>) -> Self {
        Self { host, ctx }
    }
}

impl Host for CommandRouter<'_, '_> {
    fn clear_inventory(&mut self, player: Uuid) {
        self.host.clear_inventory(player);
    }

    fn set_item(&mut self, player: Uuid, slot: u8, stack: ItemStack) {
        self.host.set_item(player, slot, stack);
    }

    fn update_inventory(&mut self, player: Uuid) {
        self.host.update_inventory(player);
    }

    fn game_mode(&self, player: Uuid) -> Option<GameMode> {
        self.host.game_mode(player)
    }

    fn player_name(&self, player: Uuid) -> Option<String> {
        self.host.player_name(player)
    }

    fn find_player(&self, name: &str) -> Option<Uuid> {
        self.host.find_player(name)
    }

    fn perform_command(&mut self, player: Uuid, command: &str) -> bool {
        dispatch(self.ctx, &mut *self.host, CommandSender::Player(player), command)
            || self.host.perform_command(player, command)
    }

    fn dispatch_console_command(&mut self, command: &str) -> bool {
        dispatch(self.ctx, &mut *self.host, CommandSender::Console, command)
            || self.host.dispatch_console_command(command)
    }

    fn open_menu(&mut self, player: Uuid, menu: Menu) {
        self.host.open_menu(player, menu);
    }

    fn toggle_visibility(&mut self, player: Uuid) {
        self.host.toggle_visibility(player);
    }

    fn send_message(&mut self, target: CommandSender, message: &str) {
        self.host.send_message(target, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotbar::MaterialCatalog;
    use crate::handlers::{InteractOutcome, ItemListener};
    use crate::host::{HostCall, InteractEvent, MemoryHost};
    use crate::profile::ProfileManager;
    use crate::types::{ClickAction, ProfileState};
    use std::sync::Arc;

    #[test]
    fn test_dispatch_routes_known_labels() {
        let service = HotbarService::new(MaterialCatalog::vanilla(), ProfileState::InLobby);
        let loader = ConfigLoader::with_dir(std::env::temp_dir());
        let config = Config::default();
        let ctx = CommandContext { service: &service, loader: &loader, config: &config };

        let mut host = MemoryHost::new();
        let player = host.join("Steve");

        assert!(dispatch(&ctx, &mut host, CommandSender::Player(player), "/Divisions"));
        assert_eq!(host.calls(), &[HostCall::OpenMenu { player, menu: Menu::Divisions }]);

        assert!(!dispatch(&ctx, &mut host, CommandSender::Console, "/spawn"));
        assert!(!dispatch(&ctx, &mut host, CommandSender::Console, "   "));
    }

    #[test]
    fn test_item_command_reaches_plugin_command() {
        let service = Arc::new(HotbarService::new(MaterialCatalog::vanilla(), ProfileState::InLobby));
        service.reload(
            &toml::from_str(
                r#"
                [CUSTOM_ITEMS.DIVISIONS]
                NAME = "&5Divisions"
                MATERIAL = "ENDER_EYE"
                SLOT = 7
                COMMAND = ["/divisions", "/spawn"]
                "#,
            )
            .unwrap(),
        );
        let loader = ConfigLoader::with_dir(std::env::temp_dir());
        let config = Config::default();
        let ctx = CommandContext { service: &service, loader: &loader, config: &config };

        let profiles = Arc::new(ProfileManager::new());
        let listener = ItemListener::new(service.clone(), profiles.clone());
        let mut host = MemoryHost::new();
        let player = host.join("Steve");
        profiles.create(player);
        service.give(&mut host, player, ProfileState::InLobby);
        host.take_calls();

        let item = host.slot(player, 7).cloned();
        let mut event = InteractEvent::new(player, ClickAction::RightClickAir, item, 7);
        let outcome = listener.handle(&mut event, &mut CommandRouter::new(&mut host, &ctx));

        assert_eq!(outcome, InteractOutcome::Commands(2));
        assert_eq!(
            host.calls(),
            &[
                HostCall::OpenMenu { player, menu: Menu::Divisions },
                HostCall::PlayerCommand { player, command: "spawn".to_string() },
            ]
        );
    }

    #[test]
    fn test_router_refuses_divisions_for_console() {
        let service = HotbarService::new(MaterialCatalog::vanilla(), ProfileState::InLobby);
        let loader = ConfigLoader::with_dir(std::env::temp_dir());
        let config = Config::default();
        let ctx = CommandContext { service: &service, loader: &loader, config: &config };

        let mut host = MemoryHost::new();
        let mut router = CommandRouter::new(&mut host, &ctx);
        assert!(router.dispatch_console_command("divisions"));
        assert!(router.dispatch_console_command("eco give Steve 10"));

        assert_eq!(
            host.calls(),
            &[
                HostCall::Message {
                    target: CommandSender::Console,
                    message: "Only players can use this command.".to_string(),
                },
                HostCall::ConsoleCommand { command: "eco give Steve 10".to_string() },
            ]
        );
    }
}

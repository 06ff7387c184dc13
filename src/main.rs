use anyhow::Result;
use hotbar_items::{
    commands::{CommandContext, CommandRouter},
    config::{Config, ConfigLoader},
    handlers::ItemListener,
    host::{CommandSender, EventBus, Host, InteractEvent, MemoryHost},
    hotbar::{HotbarService, MaterialCatalog},
    logging::init_logger,
    profile::ProfileManager,
    types::{ClickAction, GameMode, MatchPhase, ProfileState},
};
use std::sync::Arc;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Offline test server: an in-memory host driven from the console
struct Console {
    host: MemoryHost,
    bus: EventBus,
    service: Arc<HotbarService>,
    profiles: Arc<ProfileManager>,
    loader: ConfigLoader,
    config: Config,
}

impl Console {
    fn player(&self, name: &str) -> Option<Uuid> {
        let found = self.host.find_player(name);
        if found.is_none() {
            warn!("Unknown player: {}", name);
        }
        found
    }

    fn run_command(&mut self, sender: CommandSender, line: &str) {
        let ctx = CommandContext {
            service: &self.service,
            loader: &self.loader,
            config: &self.config,
        };
        let mut host = CommandRouter::new(&mut self.host, &ctx);
        let command = line.trim().trim_start_matches('/');
        match sender {
            CommandSender::Player(player) => host.perform_command(player, command),
            CommandSender::Console => host.dispatch_console_command(command),
        };
    }

    fn handle(&mut self, input: &str) {
        if input.starts_with('/') {
            self.run_command(CommandSender::Console, input);
        } else {
            self.run_input(input);
        }

        for call in self.host.take_calls() {
            debug!("host: {:?}", call);
        }
    }

    fn run_input(&mut self, input: &str) {
        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            ["help"] => print_help(),
            ["join", name] => {
                let player = self.host.join(name);
                self.profiles.create(player);
                self.service.give(&mut self.host, player, ProfileState::InLobby);
            }
            ["quit", name] => {
                if let Some(player) = self.player(name) {
                    self.host.quit(player);
                    self.profiles.remove(player);
                    info!("{} left", name);
                }
            }
            ["state", name, state] => {
                let (Some(player), Some(state)) = (self.player(name), ProfileState::parse(state)) else {
                    warn!("Usage: state <player> <IN_LOBBY|IN_QUEUE|IN_GAME|...>");
                    return;
                };
                self.profiles.set_state(player, state);
                self.service.give(&mut self.host, player, state);
            }
            ["phase", name, phase] => {
                let Some(player) = self.player(name) else { return };
                let phase = if phase.eq_ignore_ascii_case("none") {
                    None
                } else {
                    match MatchPhase::parse(phase) {
                        Some(phase) => Some(phase),
                        None => {
                            warn!("Unknown match phase: {}", phase);
                            return;
                        }
                    }
                };
                self.profiles.set_match_phase(player, phase);
                info!("{} match phase: {:?}", name, phase);
            }
            ["mode", name, mode] => {
                let (Some(player), Some(mode)) = (self.player(name), GameMode::parse(mode)) else {
                    warn!("Usage: mode <player> <SURVIVAL|CREATIVE|ADVENTURE|SPECTATOR>");
                    return;
                };
                self.host.set_game_mode(player, mode);
                info!("{} game mode: {:?}", name, mode);
            }
            ["click", name, slot, rest @ ..] => {
                let Some(player) = self.player(name) else { return };
                let Ok(slot) = slot.parse::<u8>() else {
                    warn!("Slot must be a number between 0 and 8");
                    return;
                };
                let action = match rest.first().copied() {
                    Some("left") => ClickAction::LeftClickAir,
                    _ => ClickAction::RightClickAir,
                };
                let item = self.host.slot(player, slot).cloned();
                let mut event = InteractEvent::new(player, action, item, slot);
                let ctx = CommandContext {
                    service: &self.service,
                    loader: &self.loader,
                    config: &self.config,
                };
                let cancelled = self
                    .bus
                    .fire_interact(&mut event, &mut CommandRouter::new(&mut self.host, &ctx));
                info!("Click on slot {} by {} (cancelled: {})", slot, name, cancelled);
            }
            ["inv", name] => {
                let Some(player) = self.player(name) else { return };
                let inventory = self.host.inventory(player);
                match serde_json::to_string_pretty(&inventory) {
                    Ok(json) => info!("Inventory of {}:\n{}", name, json),
                    Err(e) => error!("Failed to render inventory: {}", e),
                }
            }
            ["as", name, command @ ..] if !command.is_empty() => {
                let Some(player) = self.player(name) else { return };
                self.run_command(CommandSender::Player(player), &command.join(" "));
            }
            ["reload"] => self.run_command(CommandSender::Console, "/hotbar reload"),
            _ => warn!("Unknown input, type 'help' for commands"),
        }
    }
}

fn print_help() {
    info!("Console commands:");
    info!("  join <name>                     - connect a player (gets lobby items)");
    info!("  quit <name>                     - disconnect a player");
    info!("  state <name> <STATE>            - move a profile to a state and give its items");
    info!("  phase <name> <PHASE|none>       - set the match phase (STARTING, IN_ROUND, ENDING)");
    info!("  mode <name> <GAMEMODE>          - set a player's game mode");
    info!("  click <name> <slot> [left|right] - click the item in a hotbar slot");
    info!("  inv <name>                      - print a player's inventory");
    info!("  as <name> <command>             - run a command as a player");
    info!("  reload                          - reload the hotbar file");
    info!("  /<command>                      - run a command as the console");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    info!("Starting hotbar-items v{}", VERSION);

    let loader = ConfigLoader::new();
    let config = loader.load()?;

    let catalog = MaterialCatalog::with_extra(&config.extra_materials);
    info!("Material catalog has {} item types", catalog.len());

    let service = Arc::new(HotbarService::new(catalog, config.fallback_state()));
    let skipped = service.reload(&loader.load_hotbar(&config)?);
    if !skipped.is_empty() {
        warn!("{} hotbar entries skipped, see warnings above", skipped.len());
    }

    let profiles = Arc::new(ProfileManager::new());
    let listener = ItemListener::new(service.clone(), profiles.clone())
        .with_bypass_modes(config.bypass_game_modes());

    let mut bus = EventBus::new();
    bus.subscribe(Arc::new(listener));

    let mut console = Console {
        host: MemoryHost::new(),
        bus,
        service,
        profiles,
        loader,
        config,
    };

    print_help();
    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        console.handle(input);
    }

    info!("Console closed, shutting down");
    Ok(())
}

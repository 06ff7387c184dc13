/// Hotbar interaction handler
///
/// Runs when a player clicks with an item in hand:
/// - Ignores non-clicks, empty hands, bypass game modes and the cooldown window
/// - Blocks item use in a match that is not in its round phase
/// - Resolves the held stack to a configured item
/// - Replays the item's commands or runs its built-in action
/// - Starts the `hotbar` cooldown

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::hotbar::{CommandIssuer, HotbarService, ItemAction, ItemCommand, ItemKind};
use crate::host::{Host, InteractEvent, Listener};
use crate::profile::Profiles;
use crate::types::{GameMode, ProfileState};

/// Cooldown name shared by every hotbar item
pub const COOLDOWN_KEY: &str = "hotbar";

/// Minimum time between two hotbar uses
pub const COOLDOWN: Duration = Duration::from_millis(200);

/// Placeholder replaced by the acting player's name in commands
const PLAYER_PLACEHOLDER: &str = "%player%";

/// What the handler did with an interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractOutcome {
    NotAClick,
    EmptyHand,
    NoProfile,
    Bypassed,
    OnCooldown,
    PhaseBlocked,
    NoMatch,
    /// Custom item ran; number of commands actually issued
    Commands(usize),
    Action(ItemAction),
}

pub struct ItemListener {
    service: Arc<HotbarService>,
    profiles: Arc<dyn Profiles>,
    bypass_modes: HashSet<GameMode>,
}

impl ItemListener {
    pub fn new(service: Arc<HotbarService>, profiles: Arc<dyn Profiles>) -> Self {
        Self {
            service,
            profiles,
            bypass_modes: HashSet::from([GameMode::Creative]),
        }
    }

    /// Replace the game modes in which hotbar items are left alone
    pub fn with_bypass_modes<I: IntoIterator<Item = GameMode>>(mut self, modes: I) -> Self {
        self.bypass_modes = modes.into_iter().collect();
        self
    }

    /// Run the guarded dispatch sequence for one interaction
    pub fn handle(&self, event: &mut InteractEvent, host: &mut dyn Host) -> InteractOutcome {
        let player = event.player;

        if !event.action.is_click() {
            return InteractOutcome::NotAClick;
        }
        let Some(stack) = event.item.clone().filter(|stack| !stack.is_empty()) else {
            return InteractOutcome::EmptyHand;
        };

        let Some(state) = self.profiles.state(player) else {
            return InteractOutcome::NoProfile;
        };
        if host
            .game_mode(player)
            .is_some_and(|mode| self.bypass_modes.contains(&mode))
        {
            return InteractOutcome::Bypassed;
        }
        if !self.profiles.has_cooldown_ended(player, COOLDOWN_KEY) {
            return InteractOutcome::OnCooldown;
        }

        event.cancelled = true;

        if state == ProfileState::InGame
            && self
                .profiles
                .match_phase(player)
                .is_some_and(|phase| !phase.allows_item_use())
        {
            return InteractOutcome::PhaseBlocked;
        }

        let Some(item) = self.service.resolve_stack(state, &stack) else {
            return InteractOutcome::NoMatch;
        };

        let outcome = match &item.kind {
            ItemKind::Commands(commands) => {
                InteractOutcome::Commands(run_commands(host, player, commands))
            }
            ItemKind::Action(action) => {
                action.execute(host, player);
                InteractOutcome::Action(*action)
            }
        };

        self.profiles.add_cooldown(player, COOLDOWN_KEY, COOLDOWN);
        outcome
    }
}

impl Listener for ItemListener {
    fn on_interact(&self, event: &mut InteractEvent, host: &mut dyn Host) {
        let outcome = self.handle(event, host);
        debug!("[Hotbar] Interact by {}: {:?}", event.player, outcome);
    }
}

/// Issue each command in order. Blank lines and `none` are skipped, one
/// leading slash is dropped. Returns how many commands were issued.
fn run_commands(host: &mut dyn Host, player: Uuid, commands: &[ItemCommand]) -> usize {
    let name = host.player_name(player).unwrap_or_default();
    let mut issued = 0;

    for command in commands {
        let line = command.line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("none") {
            continue;
        }
        let line = line.strip_prefix('/').unwrap_or(line);
        let line = line.replace(PLAYER_PLACEHOLDER, &name);

        match command.issuer {
            CommandIssuer::Player => host.perform_command(player, &line),
            CommandIssuer::Console => host.dispatch_console_command(&line),
        };
        issued += 1;
    }

    issued
}

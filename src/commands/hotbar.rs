/// `/hotbar` admin command
///
/// - `/hotbar give <player> <state>` lay out a state's items for a player
/// - `/hotbar reload` re-read the hotbar file and swap the registry
/// - `/hotbar list <state>` show what a state is configured with

use tracing::{error, info};

use super::CommandContext;
use crate::host::{CommandSender, Host};
use crate::types::ProfileState;
use crate::utils::to_title_case;

const USAGE: &str = "&cUsage: /hotbar <give <player> <state>|reload|list <state>>";

pub fn execute(ctx: &CommandContext<'_>, host: &mut dyn Host, sender: CommandSender, args: &[&str]) {
    match args {
        ["give", player, state] => give(ctx, host, sender, player, state),
        ["reload"] => reload(ctx, host, sender),
        ["list", state] => list(ctx, host, sender, state),
        _ => reply(host, sender, USAGE),
    }
}

fn give(ctx: &CommandContext<'_>, host: &mut dyn Host, sender: CommandSender, name: &str, state: &str) {
    let Some(player) = host.find_player(name) else {
        reply(host, sender, &format!("&cPlayer '{}' is not online.", name));
        return;
    };
    let Some(state) = ProfileState::parse(state) else {
        reply(host, sender, &format!("&cUnknown state '{}'.", state));
        return;
    };

    ctx.service.give(host, player, state);
    reply(host, sender, &format!("&aGave {} items to {}.", to_title_case(state.name()), name));
}

fn reload(ctx: &CommandContext<'_>, host: &mut dyn Host, sender: CommandSender) {
    match ctx.loader.load_hotbar(ctx.config) {
        Ok(table) => {
            let skipped = ctx.service.reload(&table);
            let items = ctx.service.snapshot().len();
            info!("[Hotbar] Reloaded: {} item(s), {} skipped", items, skipped.len());
            let message = if skipped.is_empty() {
                format!("&aHotbar reloaded ({} items).", items)
            } else {
                format!(
                    "&eHotbar reloaded ({} items, {} skipped - see console).",
                    items,
                    skipped.len()
                )
            };
            reply(host, sender, &message);
        }
        Err(e) => {
            error!("[Hotbar] Reload failed, keeping previous items: {:#}", e);
            reply(host, sender, "&cHotbar reload failed, previous items kept. See console.");
        }
    }
}

fn list(ctx: &CommandContext<'_>, host: &mut dyn Host, sender: CommandSender, state: &str) {
    let Some(state) = ProfileState::parse(state) else {
        reply(host, sender, &format!("&cUnknown state '{}'.", state));
        return;
    };

    let items = ctx.service.items(state);
    if items.is_empty() {
        reply(host, sender, &format!("&7No items configured for {}.", to_title_case(state.name())));
        return;
    }

    reply(host, sender, &format!("&e{} items:", to_title_case(state.name())));
    for item in items {
        let behaviour = match item.action() {
            Some(action) => action.name().to_string(),
            None => format!("{} command(s)", item.commands().len()),
        };
        reply(
            host,
            sender,
            &format!("&7[{}] &f{} &8({}, {})", item.slot, item.key, item.material, behaviour),
        );
    }
}

fn reply(host: &mut dyn Host, sender: CommandSender, message: &str) {
    host.send_message(sender, &crate::utils::translate_colors(message));
}

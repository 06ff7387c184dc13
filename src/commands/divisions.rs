use crate::host::{CommandSender, Host, Menu};

/// `/divisions`: open the divisions menu. Players only.
pub fn execute(host: &mut dyn Host, sender: CommandSender) {
    match sender {
        CommandSender::Player(player) => host.open_menu(player, Menu::Divisions),
        CommandSender::Console => host.send_message(sender, "Only players can use this command."),
    }
}

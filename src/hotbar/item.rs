use crate::hotbar::action::ItemAction;
use crate::types::{ItemStack, Material};

/// Who a configured command runs as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandIssuer {
    Player,
    Console,
}

/// One configured command line, trimmed, blank lines already removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCommand {
    pub issuer: CommandIssuer,
    pub line: String,
}

impl ItemCommand {
    pub fn player(line: impl Into<String>) -> Self {
        Self {
            issuer: CommandIssuer::Player,
            line: line.into(),
        }
    }

    pub fn console(line: impl Into<String>) -> Self {
        Self {
            issuer: CommandIssuer::Console,
            line: line.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Built-in item bound to an action by its key
    Action(ItemAction),
    /// Custom item replaying commands in order
    Commands(Vec<ItemCommand>),
}

/// One hotbar slot as configured. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotbarItem {
    pub key: String,
    /// Already colour-translated
    pub display_name: String,
    pub material: Material,
    pub lore: Vec<String>,
    pub slot: u8,
    pub custom_model_data: u32,
    pub kind: ItemKind,
}

impl HotbarItem {
    pub fn is_custom(&self) -> bool {
        matches!(self.kind, ItemKind::Commands(_))
    }

    pub fn action(&self) -> Option<ItemAction> {
        match &self.kind {
            ItemKind::Action(action) => Some(*action),
            ItemKind::Commands(_) => None,
        }
    }

    pub fn commands(&self) -> &[ItemCommand] {
        match &self.kind {
            ItemKind::Action(_) => &[],
            ItemKind::Commands(commands) => commands,
        }
    }

    /// Build the stack placed in the player's inventory
    pub fn render(&self) -> ItemStack {
        let stack = ItemStack::new(self.material.clone())
            .with_name(self.display_name.clone())
            .with_custom_model_data(self.custom_model_data);

        // empty lore is left unset so the tooltip has no blank gap
        if self.lore.is_empty() {
            stack
        } else {
            stack.with_lore(self.lore.clone())
        }
    }

    /// Whether `stack` is the rendered form of this item: same material,
    /// same display name, and same model data where 0 and unset are equal.
    pub fn matches_stack(&self, stack: &ItemStack) -> bool {
        let Some(name) = stack.display_name.as_deref() else {
            return false;
        };

        stack.material == self.material
            && name == self.display_name
            && stack.custom_model_data.unwrap_or(0) == self.custom_model_data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(custom_model_data: u32) -> HotbarItem {
        HotbarItem {
            key: "UNRANKED".to_string(),
            display_name: "§aUnranked".to_string(),
            material: Material::new("IRON_SWORD"),
            lore: Vec::new(),
            slot: 0,
            custom_model_data,
            kind: ItemKind::Action(ItemAction::Unranked),
        }
    }

    #[test]
    fn test_render_without_lore() {
        let stack = sample(0).render();
        assert_eq!(stack.display_name.as_deref(), Some("§aUnranked"));
        assert!(stack.lore.is_empty());
        assert_eq!(stack.custom_model_data, None);
    }

    #[test]
    fn test_matches_rendered_stack() {
        let item = sample(12);
        assert!(item.matches_stack(&item.render()));

        let other_model = sample(13).render();
        assert!(!item.matches_stack(&other_model));
    }

    #[test]
    fn test_zero_model_data_matches_unset() {
        let item = sample(0);
        let mut stack = item.render();
        stack.custom_model_data = None;
        assert!(item.matches_stack(&stack));

        stack.custom_model_data = Some(3);
        assert!(!item.matches_stack(&stack));
    }

    #[test]
    fn test_unnamed_stack_never_matches() {
        let item = sample(0);
        let mut stack = item.render();
        stack.display_name = None;
        assert!(!item.matches_stack(&stack));
    }

    #[test]
    fn test_commands_accessor() {
        let mut item = sample(0);
        assert!(item.commands().is_empty());
        assert!(!item.is_custom());

        item.kind = ItemKind::Commands(vec![ItemCommand::player("queues")]);
        assert!(item.is_custom());
        assert_eq!(item.action(), None);
        assert_eq!(item.commands()[0].line, "queues");
    }
}

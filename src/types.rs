use serde::Serialize;
use std::fmt;

/// High-level mode of a player's profile, used to pick the hotbar item set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileState {
    InLobby,
    InQueue,
    InGame,
    InKitEditor,
    InParty,
    InSpectator,
    InCustom,
}

impl ProfileState {
    pub const ALL: [ProfileState; 7] = [
        ProfileState::InLobby,
        ProfileState::InQueue,
        ProfileState::InGame,
        ProfileState::InKitEditor,
        ProfileState::InParty,
        ProfileState::InSpectator,
        ProfileState::InCustom,
    ];

    /// Config-facing name, e.g. `IN_LOBBY`
    pub fn name(&self) -> &'static str {
        match self {
            ProfileState::InLobby => "IN_LOBBY",
            ProfileState::InQueue => "IN_QUEUE",
            ProfileState::InGame => "IN_GAME",
            ProfileState::InKitEditor => "IN_KIT_EDITOR",
            ProfileState::InParty => "IN_PARTY",
            ProfileState::InSpectator => "IN_SPECTATOR",
            ProfileState::InCustom => "IN_CUSTOM",
        }
    }

    /// Parse a config name, ignoring case and surrounding whitespace
    pub fn parse(name: &str) -> Option<Self> {
        let wanted = name.trim().to_uppercase();
        Self::ALL.into_iter().find(|state| state.name() == wanted)
    }
}

impl fmt::Display for ProfileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Phase of a running match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Starting,
    InRound,
    Ending,
}

impl MatchPhase {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "STARTING" => Some(MatchPhase::Starting),
            "IN_ROUND" => Some(MatchPhase::InRound),
            "ENDING" => Some(MatchPhase::Ending),
            _ => None,
        }
    }

    /// Whether hotbar items may be used while a match is in this phase
    pub fn allows_item_use(&self) -> bool {
        matches!(self, MatchPhase::InRound)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "SURVIVAL" => Some(GameMode::Survival),
            "CREATIVE" => Some(GameMode::Creative),
            "ADVENTURE" => Some(GameMode::Adventure),
            "SPECTATOR" => Some(GameMode::Spectator),
            _ => None,
        }
    }
}

/// Kind of interaction reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    LeftClickAir,
    LeftClickBlock,
    RightClickAir,
    RightClickBlock,
    Physical,
}

impl ClickAction {
    pub fn is_click(&self) -> bool {
        !matches!(self, ClickAction::Physical)
    }
}

/// Normalized item-type identifier, e.g. `IRON_SWORD`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Material(String);

impl Material {
    pub(crate) fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn air() -> Self {
        Self("AIR".to_string())
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn is_air(&self) -> bool {
        matches!(self.0.as_str(), "AIR" | "CAVE_AIR" | "VOID_AIR")
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rendered stack as the host sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStack {
    pub material: Material,
    pub amount: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_model_data: Option<u32>,
}

impl ItemStack {
    pub fn new(material: Material) -> Self {
        Self {
            material,
            amount: 1,
            display_name: None,
            lore: Vec::new(),
            custom_model_data: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_lore(mut self, lore: Vec<String>) -> Self {
        self.lore = lore;
        self
    }

    /// Zero clears the tag, matching how the host treats an unset value
    pub fn with_custom_model_data(mut self, data: u32) -> Self {
        self.custom_model_data = (data > 0).then_some(data);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.amount == 0 || self.material.is_air()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_state_parse() {
        assert_eq!(ProfileState::parse("in_lobby"), Some(ProfileState::InLobby));
        assert_eq!(ProfileState::parse(" IN_KIT_EDITOR "), Some(ProfileState::InKitEditor));
        assert_eq!(ProfileState::parse("LOBBY"), None);
    }

    #[test]
    fn test_match_phase_item_use() {
        assert!(MatchPhase::InRound.allows_item_use());
        assert!(!MatchPhase::Starting.allows_item_use());
        assert!(!MatchPhase::Ending.allows_item_use());
    }

    #[test]
    fn test_item_stack_empty() {
        assert!(ItemStack::new(Material::air()).is_empty());
        let mut stack = ItemStack::new(Material::new("COMPASS"));
        assert!(!stack.is_empty());
        stack.amount = 0;
        assert!(stack.is_empty());
    }

    #[test]
    fn test_zero_model_data_is_unset() {
        let stack = ItemStack::new(Material::new("BOOK")).with_custom_model_data(0);
        assert_eq!(stack.custom_model_data, None);
        let stack = ItemStack::new(Material::new("BOOK")).with_custom_model_data(7);
        assert_eq!(stack.custom_model_data, Some(7));
    }
}

use serde::{Deserialize, Serialize};

use crate::types::{GameMode, ProfileState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hotbar item file, relative to the config directory
    #[serde(default = "default_hotbar_file")]
    pub hotbar_file: String,

    /// State for custom items without a valid `STATE`
    #[serde(default = "default_fallback_state")]
    pub fallback_state: String,

    /// Game modes in which hotbar items do nothing
    #[serde(default = "default_bypass_game_modes")]
    pub bypass_game_modes: Vec<String>,

    /// Item ids accepted on top of the vanilla list (resource-pack items)
    #[serde(default)]
    pub extra_materials: Vec<String>,
}

// Default values
fn default_hotbar_file() -> String {
    "hotbar.toml".to_string()
}

fn default_fallback_state() -> String {
    ProfileState::InLobby.name().to_string()
}

fn default_bypass_game_modes() -> Vec<String> {
    vec!["CREATIVE".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotbar_file: default_hotbar_file(),
            fallback_state: default_fallback_state(),
            bypass_game_modes: default_bypass_game_modes(),
            extra_materials: Vec::new(),
        }
    }
}

impl Config {
    /// Parsed fallback state, `IN_LOBBY` when the configured name is unknown
    pub fn fallback_state(&self) -> ProfileState {
        ProfileState::parse(&self.fallback_state).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown fallback_state '{}', using {}",
                self.fallback_state,
                ProfileState::InLobby
            );
            ProfileState::InLobby
        })
    }

    /// Parsed bypass game modes; unknown names are logged and dropped
    pub fn bypass_game_modes(&self) -> Vec<GameMode> {
        self.bypass_game_modes
            .iter()
            .filter_map(|name| {
                let mode = GameMode::parse(name);
                if mode.is_none() {
                    tracing::warn!("Ignoring unknown game mode '{}' in bypass_game_modes", name);
                }
                mode
            })
            .collect()
    }
}

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::types::{MatchPhase, ProfileState};

/// Per-player session data the hotbar reads
#[derive(Debug, Clone)]
pub struct Profile {
    pub state: ProfileState,
    /// Phase of the player's current match, if they are in one
    pub match_phase: Option<MatchPhase>,
    cooldowns: HashMap<String, Instant>,
}

impl Profile {
    pub fn new() -> Self {
        Self {
            state: ProfileState::InLobby,
            match_phase: None,
            cooldowns: HashMap::new(),
        }
    }

    pub fn has_cooldown_ended(&self, name: &str) -> bool {
        self.cooldowns
            .get(name)
            .map(|expires| Instant::now() >= *expires)
            .unwrap_or(true)
    }

    pub fn add_cooldown(&mut self, name: &str, duration: Duration) {
        self.cooldowns.insert(name.to_string(), Instant::now() + duration);
    }

    pub fn cooldown_expiry(&self, name: &str) -> Option<Instant> {
        self.cooldowns.get(name).copied()
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}

/// Profile lookups the hotbar depends on
pub trait Profiles: Send + Sync {
    fn state(&self, player: Uuid) -> Option<ProfileState>;

    fn match_phase(&self, player: Uuid) -> Option<MatchPhase>;

    /// True when the player has no running cooldown under `name`
    fn has_cooldown_ended(&self, player: Uuid, name: &str) -> bool;

    fn add_cooldown(&self, player: Uuid, name: &str, duration: Duration);
}

/// In-memory profile store keyed by player id
#[derive(Clone, Default)]
pub struct ProfileManager {
    profiles: Arc<RwLock<HashMap<Uuid, Profile>>>,
}

impl ProfileManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a lobby profile for `player`, replacing any previous one
    pub fn create(&self, player: Uuid) {
        self.profiles.write().insert(player, Profile::new());
    }

    pub fn remove(&self, player: Uuid) -> Option<Profile> {
        self.profiles.write().remove(&player)
    }

    pub fn get(&self, player: Uuid) -> Option<Profile> {
        self.profiles.read().get(&player).cloned()
    }

    pub fn set_state(&self, player: Uuid, new_state: ProfileState) {
        if let Some(profile) = self.profiles.write().get_mut(&player) {
            if profile.state != new_state {
                tracing::info!("Profile {} state changed: {} -> {}", player, profile.state, new_state);
                profile.state = new_state;
            }
        }
    }

    pub fn set_match_phase(&self, player: Uuid, phase: Option<MatchPhase>) {
        if let Some(profile) = self.profiles.write().get_mut(&player) {
            profile.match_phase = phase;
        }
    }

    pub fn cooldown_expiry(&self, player: Uuid, name: &str) -> Option<Instant> {
        self.profiles.read().get(&player)?.cooldown_expiry(name)
    }

    pub fn len(&self) -> usize {
        self.profiles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.read().is_empty()
    }
}

impl Profiles for ProfileManager {
    fn state(&self, player: Uuid) -> Option<ProfileState> {
        self.profiles.read().get(&player).map(|p| p.state)
    }

    fn match_phase(&self, player: Uuid) -> Option<MatchPhase> {
        self.profiles.read().get(&player)?.match_phase
    }

    fn has_cooldown_ended(&self, player: Uuid, name: &str) -> bool {
        self.profiles
            .read()
            .get(&player)
            .map(|p| p.has_cooldown_ended(name))
            .unwrap_or(true)
    }

    fn add_cooldown(&self, player: Uuid, name: &str, duration: Duration) {
        if let Some(profile) = self.profiles.write().get_mut(&player) {
            profile.add_cooldown(name, duration);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_is_in_lobby() {
        let manager = ProfileManager::new();
        let player = Uuid::new_v4();
        manager.create(player);
        assert_eq!(manager.state(player), Some(ProfileState::InLobby));
        assert_eq!(manager.match_phase(player), None);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_cooldown_lifecycle() {
        let manager = ProfileManager::new();
        let player = Uuid::new_v4();
        manager.create(player);

        assert!(manager.has_cooldown_ended(player, "hotbar"));
        manager.add_cooldown(player, "hotbar", Duration::from_secs(60));
        assert!(!manager.has_cooldown_ended(player, "hotbar"));
        assert!(manager.has_cooldown_ended(player, "other"));

        manager.add_cooldown(player, "hotbar", Duration::ZERO);
        assert!(manager.has_cooldown_ended(player, "hotbar"));
    }

    #[test]
    fn test_unknown_player() {
        let manager = ProfileManager::new();
        let player = Uuid::new_v4();
        assert_eq!(manager.state(player), None);
        manager.set_state(player, ProfileState::InGame);
        assert!(manager.get(player).is_none());
    }

    #[test]
    fn test_state_and_phase_updates() {
        let manager = ProfileManager::new();
        let player = Uuid::new_v4();
        manager.create(player);
        manager.set_state(player, ProfileState::InGame);
        manager.set_match_phase(player, Some(MatchPhase::Starting));

        let profile = manager.get(player).unwrap();
        assert_eq!(profile.state, ProfileState::InGame);
        assert_eq!(profile.match_phase, Some(MatchPhase::Starting));
    }
}

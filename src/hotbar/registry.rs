use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::hotbar::item::HotbarItem;
use crate::types::{ItemStack, ProfileState};

/// Items configured for one profile state, keyed by item key.
/// No two items share a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateItems {
    items: BTreeMap<String, HotbarItem>,
}

impl StateItems {
    /// Insert `item`, evicting any item with the same key or the same slot.
    /// Returns the evicted items.
    pub(crate) fn insert(&mut self, item: HotbarItem) -> Vec<HotbarItem> {
        let mut evicted = Vec::new();

        if let Some(previous) = self.items.remove(&item.key) {
            evicted.push(previous);
        }

        let clashing: Vec<String> = self
            .items
            .values()
            .filter(|existing| existing.slot == item.slot)
            .map(|existing| existing.key.clone())
            .collect();
        for key in clashing {
            if let Some(previous) = self.items.remove(&key) {
                debug!(
                    "[Hotbar] '{}' replaces '{}' in slot {}",
                    item.key, previous.key, item.slot
                );
                evicted.push(previous);
            }
        }

        self.items.insert(item.key.clone(), item);
        evicted
    }

    pub fn get(&self, key: &str) -> Option<&HotbarItem> {
        self.items.get(key)
    }

    pub fn by_slot(&self, slot: u8) -> Option<&HotbarItem> {
        self.items.values().find(|item| item.slot == slot)
    }

    pub fn by_stack(&self, stack: &ItemStack) -> Option<&HotbarItem> {
        self.items.values().find(|item| item.matches_stack(stack))
    }

    pub fn iter(&self) -> impl Iterator<Item = &HotbarItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Every configured hotbar item, grouped by profile state.
///
/// Built in one go by the loader and swapped as a whole on reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    states: HashMap<ProfileState, StateItems>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, state: ProfileState, item: HotbarItem) -> Vec<HotbarItem> {
        self.states.entry(state).or_default().insert(item)
    }

    /// Items for `state`; empty when nothing is configured
    pub fn state(&self, state: ProfileState) -> &StateItems {
        static EMPTY: Lazy<StateItems> = Lazy::new(StateItems::default);
        self.states.get(&state).unwrap_or(&EMPTY)
    }

    pub fn get(&self, state: ProfileState, key: &str) -> Option<&HotbarItem> {
        self.state(state).get(key)
    }

    /// Total number of items across all states
    pub fn len(&self) -> usize {
        self.states.values().map(StateItems::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

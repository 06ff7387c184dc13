use std::sync::Arc;

use tracing::trace;
use uuid::Uuid;

use super::Host;
use crate::types::{ClickAction, ItemStack};

/// A player clicked with an item in hand
#[derive(Debug, Clone)]
pub struct InteractEvent {
    pub player: Uuid,
    pub action: ClickAction,
    /// Stack in the main hand, `None` for an empty hand
    pub item: Option<ItemStack>,
    /// Selected hotbar slot (0-8)
    pub held_slot: u8,
    pub cancelled: bool,
}

impl InteractEvent {
    pub fn new(player: Uuid, action: ClickAction, item: Option<ItemStack>, held_slot: u8) -> Self {
        Self {
            player,
            action,
            item,
            held_slot,
            cancelled: false,
        }
    }
}

/// Receives events fired on the [`EventBus`]
pub trait Listener: Send + Sync {
    fn on_interact(&self, event: &mut InteractEvent, host: &mut dyn Host);
}

/// Listener registry the server fires events into
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<Arc<dyn Listener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: Arc<dyn Listener>) {
        self.listeners.push(listener);
    }

    /// Deliver an interaction to every listener in subscription order.
    /// Returns whether the event ended up cancelled.
    pub fn fire_interact(&self, event: &mut InteractEvent, host: &mut dyn Host) -> bool {
        trace!("Firing interact {:?} for {}", event.action, event.player);
        for listener in &self.listeners {
            listener.on_interact(event, host);
        }
        event.cancelled
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use parking_lot::Mutex;

    struct Recorder {
        seen: Mutex<Vec<Uuid>>,
        cancel: bool,
    }

    impl Listener for Recorder {
        fn on_interact(&self, event: &mut InteractEvent, _host: &mut dyn Host) {
            self.seen.lock().push(event.player);
            if self.cancel {
                event.cancelled = true;
            }
        }
    }

    #[test]
    fn test_fire_interact_reaches_all_listeners() {
        let mut host = MemoryHost::new();
        let player = host.join("Alex");
        let first = Arc::new(Recorder { seen: Mutex::new(Vec::new()), cancel: false });
        let second = Arc::new(Recorder { seen: Mutex::new(Vec::new()), cancel: true });

        let mut bus = EventBus::new();
        bus.subscribe(first.clone());
        bus.subscribe(second.clone());
        assert_eq!(bus.listener_count(), 2);

        let mut event = InteractEvent::new(player, ClickAction::RightClickAir, None, 0);
        assert!(bus.fire_interact(&mut event, &mut host));
        assert_eq!(first.seen.lock().as_slice(), &[player]);
        assert_eq!(second.seen.lock().as_slice(), &[player]);
    }
}

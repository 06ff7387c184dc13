pub mod item_listener;

pub use item_listener::{InteractOutcome, ItemListener, COOLDOWN, COOLDOWN_KEY};

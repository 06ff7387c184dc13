//! Config-driven hotbar items: loading, rendering and lookup

pub mod action;
pub mod item;
pub mod loader;
pub mod material;
pub mod registry;
pub mod service;

pub use action::{ActionEffect, ItemAction};
pub use item::{CommandIssuer, HotbarItem, ItemCommand, ItemKind};
pub use loader::{EntryError, LoadReport, RegistryLoader, Section, SkippedEntry, LORE_NONE_TOKEN};
pub use material::MaterialCatalog;
pub use registry::{Registry, StateItems};
pub use service::HotbarService;

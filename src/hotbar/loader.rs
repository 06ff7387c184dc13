/// Hotbar registry loader
///
/// Turns the two sections of `hotbar.toml` into a [`Registry`]:
///
/// ```toml
/// [ITEMS.IN_LOBBY.UNRANKED]        # built-in, key names the action
/// NAME = "&aUnranked"
/// MATERIAL = "IRON_SWORD"
/// SLOT = 0
///
/// [CUSTOM_ITEMS.SPAWN]             # custom, must carry commands
/// MATERIAL = "COMPASS"
/// SLOT = 8
/// COMMAND = ["/spawn", "say hi"]
/// STATE = "IN_LOBBY"
/// ```
///
/// Problems are scoped to a single entry: the entry is logged and left out,
/// everything else still loads.

use std::fmt;
use thiserror::Error;
use toml::{Table, Value};
use tracing::{debug, info, warn};

use crate::hotbar::action::ItemAction;
use crate::hotbar::item::{HotbarItem, ItemCommand, ItemKind};
use crate::hotbar::material::MaterialCatalog;
use crate::hotbar::registry::Registry;
use crate::types::ProfileState;
use crate::utils::translate_colors;

/// Lore line that stands for "intentionally empty"
pub const LORE_NONE_TOKEN: &str = "THISLINENONE";

const DEFAULT_MATERIAL: &str = "STONE";

/// Why one config entry was left out of the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("invalid material '{0}'")]
    InvalidMaterial(String),
    #[error("'{0}' is not a built-in action and has no COMMAND")]
    UnknownAction(String),
    #[error("SLOT {0} is outside the hotbar (0-8)")]
    InvalidSlot(i64),
    #[error("CUSTOM_MODEL_DATA {0} is negative")]
    InvalidModelData(i64),
    #[error("{field} must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    #[error("entry is not a table")]
    NotATable,
    #[error("unknown profile state '{0}'")]
    UnknownState(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Items,
    CustomItems,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Items => f.write_str("ITEMS"),
            Section::CustomItems => f.write_str("CUSTOM_ITEMS"),
        }
    }
}

/// A config entry that did not make it into the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub section: Section,
    /// Full config path, e.g. `ITEMS.IN_LOBBY.UNRANKED`
    pub path: String,
    pub error: EntryError,
}

/// Registry plus every entry that was skipped with a warning
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub registry: Registry,
    pub skipped: Vec<SkippedEntry>,
}

/// Fields shared by built-in and custom entries
struct ParsedFields {
    display_name: String,
    material: crate::types::Material,
    slot: u8,
    custom_model_data: u32,
    lore: Vec<String>,
    commands: Vec<ItemCommand>,
}

pub struct RegistryLoader<'a> {
    catalog: &'a MaterialCatalog,
    fallback_state: ProfileState,
}

impl<'a> RegistryLoader<'a> {
    pub fn new(catalog: &'a MaterialCatalog) -> Self {
        Self {
            catalog,
            fallback_state: ProfileState::InLobby,
        }
    }

    /// State used by custom items whose `STATE` is missing or invalid
    pub fn with_fallback_state(mut self, state: ProfileState) -> Self {
        self.fallback_state = state;
        self
    }

    pub fn load(&self, root: &Table) -> Registry {
        self.load_report(root).registry
    }

    pub fn load_report(&self, root: &Table) -> LoadReport {
        let mut report = LoadReport::default();

        if let Some(items) = root.get("ITEMS") {
            self.load_builtin_items(items, &mut report);
        }
        if let Some(custom) = root.get("CUSTOM_ITEMS") {
            self.load_custom_items(custom, &mut report);
        }

        info!(
            "[Hotbar] Loaded {} item(s), skipped {}",
            report.registry.len(),
            report.skipped.len()
        );
        report
    }

    fn load_builtin_items(&self, section: &Value, report: &mut LoadReport) {
        let Some(states) = section.as_table() else {
            skip(report, Section::Items, "ITEMS".to_string(), EntryError::NotATable);
            return;
        };

        for (state_key, state_value) in states {
            let state_path = format!("ITEMS.{}", state_key);
            let Some(state) = ProfileState::parse(state_key) else {
                skip(report, Section::Items, state_path, EntryError::UnknownState(state_key.clone()));
                continue;
            };
            let Some(entries) = state_value.as_table() else {
                skip(report, Section::Items, state_path, EntryError::NotATable);
                continue;
            };

            for (item_name, entry) in entries {
                let path = format!("{}.{}", state_path, item_name);
                match self.parse_builtin(item_name, entry) {
                    Ok(Some(item)) => insert(report, state, item),
                    Ok(None) => debug!("[Hotbar] {} is disabled", path),
                    Err(error) => skip(report, Section::Items, path, error),
                }
            }
        }
    }

    fn parse_builtin(&self, item_name: &str, entry: &Value) -> Result<Option<HotbarItem>, EntryError> {
        let table = entry.as_table().ok_or(EntryError::NotATable)?;
        if !get_bool(table, "ENABLED", true)? {
            return Ok(None);
        }

        let fields = self.parse_fields(item_name, table)?;
        let kind = if !fields.commands.is_empty() {
            ItemKind::Commands(fields.commands)
        } else {
            let action = ItemAction::from_key(item_name)
                .ok_or_else(|| EntryError::UnknownAction(item_name.to_string()))?;
            ItemKind::Action(action)
        };

        Ok(Some(HotbarItem {
            key: item_name.to_string(),
            display_name: fields.display_name,
            material: fields.material,
            lore: fields.lore,
            slot: fields.slot,
            custom_model_data: fields.custom_model_data,
            kind,
        }))
    }

    fn load_custom_items(&self, section: &Value, report: &mut LoadReport) {
        let Some(entries) = section.as_table() else {
            skip(report, Section::CustomItems, "CUSTOM_ITEMS".to_string(), EntryError::NotATable);
            return;
        };

        for (key, entry) in entries {
            let path = format!("CUSTOM_ITEMS.{}", key);
            match self.parse_custom(key, entry, &path) {
                Ok(Some((state, item))) => insert(report, state, item),
                Ok(None) => {}
                Err(error) => skip(report, Section::CustomItems, path, error),
            }
        }
    }

    fn parse_custom(
        &self,
        key: &str,
        entry: &Value,
        path: &str,
    ) -> Result<Option<(ProfileState, HotbarItem)>, EntryError> {
        let table = entry.as_table().ok_or(EntryError::NotATable)?;
        if !get_bool(table, "ENABLED", true)? {
            debug!("[Hotbar] {} is disabled", path);
            return Ok(None);
        }

        let fields = self.parse_fields(key, table)?;
        let state = self.parse_state(table, path);

        if fields.commands.is_empty() {
            debug!("[Hotbar] {} has no COMMAND, ignoring", path);
            return Ok(None);
        }

        Ok(Some((
            state,
            HotbarItem {
                key: key.to_string(),
                display_name: fields.display_name,
                material: fields.material,
                lore: fields.lore,
                slot: fields.slot,
                custom_model_data: fields.custom_model_data,
                kind: ItemKind::Commands(fields.commands),
            },
        )))
    }

    /// STATE of a custom item. A missing STATE means the fallback state; an
    /// unreadable one falls back too, with a warning.
    fn parse_state(&self, table: &Table, path: &str) -> ProfileState {
        let Some(value) = table.get("STATE") else {
            return self.fallback_state;
        };

        match scalar_to_string(value).and_then(|raw| ProfileState::parse(&raw)) {
            Some(state) => state,
            None => {
                warn!(
                    "[Hotbar] Unknown STATE {} for {}, using {}",
                    value, path, self.fallback_state
                );
                self.fallback_state
            }
        }
    }

    fn parse_fields(&self, key: &str, table: &Table) -> Result<ParsedFields, EntryError> {
        let display_name = translate_colors(&get_string(table, "NAME")?.unwrap_or_else(|| key.to_string()));

        let material_name = get_string(table, "MATERIAL")?.unwrap_or_else(|| DEFAULT_MATERIAL.to_string());
        let material = self
            .catalog
            .resolve(&material_name)
            .ok_or(EntryError::InvalidMaterial(material_name))?;

        let slot = get_int(table, "SLOT", 0)?;
        let slot = u8::try_from(slot)
            .ok()
            .filter(|s| *s <= 8)
            .ok_or(EntryError::InvalidSlot(slot))?;

        let custom_model_data = get_int(table, "CUSTOM_MODEL_DATA", 0)?;
        let custom_model_data = u32::try_from(custom_model_data)
            .map_err(|_| EntryError::InvalidModelData(custom_model_data))?;

        let lore = parse_lore(get_lines(table, "LORE")?);

        let mut commands: Vec<ItemCommand> = parse_commands(get_lines(table, "COMMAND")?)
            .into_iter()
            .map(ItemCommand::player)
            .collect();
        commands.extend(
            parse_commands(get_lines(table, "CONSOLE_COMMAND")?)
                .into_iter()
                .map(ItemCommand::console),
        );

        Ok(ParsedFields {
            display_name,
            material,
            slot,
            custom_model_data,
            lore,
            commands,
        })
    }
}

fn insert(report: &mut LoadReport, state: ProfileState, item: HotbarItem) {
    debug!("[Hotbar] Registered {} in {} at slot {}", item.key, state, item.slot);
    report.registry.insert(state, item);
}

fn skip(report: &mut LoadReport, section: Section, path: String, error: EntryError) {
    warn!("[Hotbar] Skipping {}: {}", path, error);
    report.skipped.push(SkippedEntry { section, path, error });
}

/// Trim lines, drop blank and sentinel lines, translate colours. Order is kept.
pub fn parse_lore(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty() && !line.eq_ignore_ascii_case(LORE_NONE_TOKEN))
        .map(|line| translate_colors(&line))
        .collect()
}

/// Trim lines and drop blank ones. `none` is kept here and skipped when run.
pub fn parse_commands(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn get_bool(table: &Table, field: &'static str, default: bool) -> Result<bool, EntryError> {
    match table.get(field) {
        None => Ok(default),
        Some(Value::Boolean(value)) => Ok(*value),
        Some(_) => Err(EntryError::InvalidField { field, expected: "a boolean" }),
    }
}

fn get_int(table: &Table, field: &'static str, default: i64) -> Result<i64, EntryError> {
    match table.get(field) {
        None => Ok(default),
        Some(Value::Integer(value)) => Ok(*value),
        Some(_) => Err(EntryError::InvalidField { field, expected: "an integer" }),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}

fn get_string(table: &Table, field: &'static str) -> Result<Option<String>, EntryError> {
    match table.get(field) {
        None => Ok(None),
        Some(value) => scalar_to_string(value)
            .map(Some)
            .ok_or(EntryError::InvalidField { field, expected: "a string" }),
    }
}

/// A field given either as one string or a list of strings
fn get_lines(table: &Table, field: &'static str) -> Result<Vec<String>, EntryError> {
    let invalid = EntryError::InvalidField {
        field,
        expected: "a string or a list of strings",
    };

    match table.get(field) {
        None => Ok(Vec::new()),
        Some(Value::Array(values)) => values
            .iter()
            .map(|value| scalar_to_string(value).ok_or_else(|| invalid.clone()))
            .collect(),
        Some(value) => scalar_to_string(value).map(|s| vec![s]).ok_or(invalid),
    }
}

use std::fmt::Write as _;

use nier_core::core_api::{
    ChipEntry, InventoryEntry, ItemCatalog, Session, WeaponEntry, format_play_time,
};
use serde_json::{Map as JsonMap, Value as JsonValue};

const LABEL_WIDTH: usize = 12;
const NAME_COL_WIDTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    pub verbose: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub platform: bool,
    pub name: bool,
    pub play_time: bool,
    pub chapter: bool,
    pub level: bool,
    pub xp: bool,
    pub money: bool,
    pub inventory: bool,
    pub corpse_inventory: bool,
    pub weapons: bool,
    pub chips: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.platform
            || self.name
            || self.play_time
            || self.chapter
            || self.level
            || self.xp
            || self.money
            || self.inventory
            || self.corpse_inventory
            || self.weapons
            || self.chips
    }

    fn all() -> Self {
        Self {
            platform: true,
            name: true,
            play_time: true,
            chapter: true,
            level: true,
            xp: true,
            money: true,
            inventory: true,
            corpse_inventory: true,
            weapons: true,
            chips: true,
        }
    }
}

pub fn render_json_full(session: &Session, catalog: &ItemCatalog) -> JsonValue {
    JsonValue::Object(selected_json(&FieldSelection::all(), session, catalog))
}

pub fn render_json_selected(
    session: &Session,
    fields: &FieldSelection,
    catalog: &ItemCatalog,
) -> JsonValue {
    JsonValue::Object(selected_json(fields, session, catalog))
}

/// `key=value` lines for the selected scalar fields; collections are
/// rendered as compact JSON.
pub fn render_selected_pairs(
    session: &Session,
    fields: &FieldSelection,
    catalog: &ItemCatalog,
) -> String {
    let mut out = String::new();
    for (key, value) in selected_json(fields, session, catalog) {
        let value = match value {
            JsonValue::String(s) => s,
            other => other.to_string(),
        };
        writeln!(&mut out, "{key}={value}").expect("writing to String cannot fail");
    }
    out
}

pub fn render_text(session: &Session, catalog: &ItemCatalog, options: TextRenderOptions) -> String {
    let snapshot = session.snapshot();
    let mut out = String::new();

    write_row(&mut out, "Player Name", &snapshot.player_name);
    write_row(&mut out, "Play Time", &format_play_time(snapshot.play_time));
    write_row(&mut out, "Money", &snapshot.money.to_string());
    write_row(&mut out, "XP", &snapshot.experience.to_string());
    write_row(&mut out, "Level", &snapshot.level.to_string());

    if !options.verbose {
        return out;
    }

    write_row(&mut out, "Platform", snapshot.platform.as_str());
    write_row(&mut out, "Chapter", &snapshot.chapter.to_string());

    write_section(&mut out, "Inventory", &item_rows(&session.inventory(catalog)));
    write_section(
        &mut out,
        "Corpse Inventory",
        &item_rows(&session.corpse_inventory(catalog)),
    );
    write_section(&mut out, "Weapons", &weapon_rows(&session.weapons(catalog)));
    write_section(&mut out, "Chips", &chip_rows(&session.chips(catalog)));

    out
}

fn selected_json(
    fields: &FieldSelection,
    session: &Session,
    catalog: &ItemCatalog,
) -> JsonMap<String, JsonValue> {
    let snapshot = session.snapshot();
    let mut out = JsonMap::new();

    if fields.platform {
        out.insert(
            "platform".to_string(),
            JsonValue::String(snapshot.platform.to_string()),
        );
    }
    if fields.name {
        out.insert(
            "name".to_string(),
            JsonValue::String(snapshot.player_name.clone()),
        );
    }
    if fields.play_time {
        out.insert(
            "play_time".to_string(),
            JsonValue::String(format_play_time(snapshot.play_time)),
        );
    }
    if fields.chapter {
        out.insert("chapter".to_string(), JsonValue::from(snapshot.chapter));
    }
    if fields.level {
        out.insert("level".to_string(), JsonValue::from(snapshot.level));
    }
    if fields.xp {
        out.insert("xp".to_string(), JsonValue::from(snapshot.experience));
    }
    if fields.money {
        out.insert("money".to_string(), JsonValue::from(snapshot.money));
    }
    if fields.inventory {
        out.insert(
            "inventory".to_string(),
            items_to_json(&session.inventory(catalog)),
        );
    }
    if fields.corpse_inventory {
        out.insert(
            "corpse_inventory".to_string(),
            items_to_json(&session.corpse_inventory(catalog)),
        );
    }
    if fields.weapons {
        out.insert(
            "weapons".to_string(),
            weapons_to_json(&session.weapons(catalog)),
        );
    }
    if fields.chips {
        out.insert("chips".to_string(), chips_to_json(&session.chips(catalog)));
    }

    out
}

fn items_to_json(items: &[InventoryEntry]) -> JsonValue {
    JsonValue::Array(
        items
            .iter()
            .map(|item| {
                let mut obj = JsonMap::new();
                obj.insert("index".to_string(), JsonValue::from(item.index));
                obj.insert("id".to_string(), JsonValue::from(item.id));
                obj.insert("name".to_string(), JsonValue::String(item.name.clone()));
                obj.insert(
                    "status".to_string(),
                    JsonValue::String(item.status.to_string()),
                );
                obj.insert("quantity".to_string(), JsonValue::from(item.quantity));
                JsonValue::Object(obj)
            })
            .collect(),
    )
}

fn weapons_to_json(weapons: &[WeaponEntry]) -> JsonValue {
    JsonValue::Array(
        weapons
            .iter()
            .map(|weapon| {
                let mut obj = JsonMap::new();
                obj.insert("index".to_string(), JsonValue::from(weapon.index));
                obj.insert("id".to_string(), JsonValue::from(weapon.id));
                obj.insert("name".to_string(), JsonValue::String(weapon.name.clone()));
                obj.insert("level".to_string(), JsonValue::from(weapon.level));
                obj.insert("is_new_item".to_string(), JsonValue::from(weapon.is_new_item));
                obj.insert(
                    "is_new_story".to_string(),
                    JsonValue::from(weapon.is_new_story),
                );
                obj.insert(
                    "enemies_defeated".to_string(),
                    JsonValue::from(weapon.enemies_defeated),
                );
                JsonValue::Object(obj)
            })
            .collect(),
    )
}

fn chips_to_json(chips: &[ChipEntry]) -> JsonValue {
    JsonValue::Array(
        chips
            .iter()
            .map(|chip| {
                let mut obj = JsonMap::new();
                obj.insert("index".to_string(), JsonValue::from(chip.index));
                obj.insert("base_id".to_string(), JsonValue::from(chip.base_id));
                obj.insert("name".to_string(), JsonValue::String(chip.name.clone()));
                obj.insert("base_code".to_string(), JsonValue::from(chip.base_code));
                obj.insert("type".to_string(), JsonValue::from(chip.chip_type));
                obj.insert("level".to_string(), JsonValue::from(chip.level));
                obj.insert("weight".to_string(), JsonValue::from(chip.weight));
                obj.insert(
                    "slots".to_string(),
                    JsonValue::Array(chip.slots.iter().map(|&s| JsonValue::from(s)).collect()),
                );
                JsonValue::Object(obj)
            })
            .collect(),
    )
}

fn item_rows(items: &[InventoryEntry]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            format!(
                "[{:>3}] {:<w$} x{}",
                item.index,
                fit_column(&item.name, NAME_COL_WIDTH),
                item.quantity,
                w = NAME_COL_WIDTH
            )
        })
        .collect()
}

fn weapon_rows(weapons: &[WeaponEntry]) -> Vec<String> {
    weapons
        .iter()
        .map(|weapon| {
            format!(
                "[{:>3}] {:<w$} Lv {}  kills {}",
                weapon.index,
                fit_column(&weapon.name, NAME_COL_WIDTH),
                weapon.level,
                weapon.enemies_defeated,
                w = NAME_COL_WIDTH
            )
        })
        .collect()
}

fn chip_rows(chips: &[ChipEntry]) -> Vec<String> {
    chips
        .iter()
        .map(|chip| {
            format!(
                "[{:>3}] {:<w$} Lv {}  weight {}",
                chip.index,
                fit_column(&chip.name, NAME_COL_WIDTH),
                chip.level,
                chip.weight,
                w = NAME_COL_WIDTH
            )
        })
        .collect()
}

fn write_row(out: &mut String, label: &str, value: &str) {
    writeln!(out, "{label:<LABEL_WIDTH$}: {value}").expect("writing to String cannot fail");
}

fn write_section(out: &mut String, title: &str, rows: &[String]) {
    writeln!(out).expect("writing to String cannot fail");
    writeln!(out, " ::: {title} ({}) :::", rows.len()).expect("writing to String cannot fail");
    if rows.is_empty() {
        writeln!(out, "  none").expect("writing to String cannot fail");
        return;
    }
    for row in rows {
        writeln!(out, "  {}", row.trim_end()).expect("writing to String cannot fail");
    }
}

fn fit_column(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }

    let mut out = String::with_capacity(width);
    for ch in value.chars().take(width - 3) {
        out.push(ch);
    }
    out.push_str("...");
    out
}

use nier_core::core_api::{Engine, ItemCatalog, Session};
use nier_core::layout::{
    CHIPS_OFFSET, CORPSE_INVENTORY_OFFSET, EXPERIENCE_OFFSET, INVENTORY_OFFSET, MONEY_OFFSET,
    PC_SAVE_SIZE, PLAY_TIME_OFFSET, PLAYER_NAME_OFFSET, WEAPONS_OFFSET,
};
use nier_core::record::{Chip, Item, Record, Weapon};
use nier_render::{
    FieldSelection, TextRenderOptions, render_json_full, render_json_selected,
    render_selected_pairs, render_text,
};
use serde_json::Value;

fn fill_region<R: Record>(image: &mut [u8], offset: usize, slots: Vec<R>) {
    let mut bytes = Vec::new();
    for slot in &slots {
        slot.encode_into(&mut bytes);
    }
    image[offset..offset + bytes.len()].copy_from_slice(&bytes);
}

fn session() -> Session {
    let mut image = vec![0u8; PC_SAVE_SIZE];
    image[PLAY_TIME_OFFSET..PLAY_TIME_OFFSET + 4].copy_from_slice(&3725i32.to_le_bytes());
    image[MONEY_OFFSET..MONEY_OFFSET + 4].copy_from_slice(&5000i32.to_le_bytes());
    image[EXPERIENCE_OFFSET..EXPERIENCE_OFFSET + 4].copy_from_slice(&48i32.to_le_bytes());
    for (i, unit) in "9S".encode_utf16().enumerate() {
        let at = PLAYER_NAME_OFFSET + i * 2;
        image[at..at + 2].copy_from_slice(&unit.to_le_bytes());
    }

    let mut items: Vec<Item> = (0..256).map(Item::empty).collect();
    items[0] = Item::new(0, 3);
    fill_region(&mut image, INVENTORY_OFFSET, items);
    fill_region(&mut image, CORPSE_INVENTORY_OFFSET, (0..256).map(Item::empty).collect());
    let mut weapons: Vec<Weapon> = (0..39).map(Weapon::empty).collect();
    weapons[0] = Weapon::new(1003);
    fill_region(&mut image, WEAPONS_OFFSET, weapons);
    fill_region(&mut image, CHIPS_OFFSET, (0..256).map(Chip::empty).collect());

    Engine::new()
        .open_bytes(image, None)
        .expect("synthetic save should parse")
}

fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect()
}

#[test]
fn full_json_uses_canonical_top_level_order() {
    let value = render_json_full(&session(), &ItemCatalog::builtin());
    assert_eq!(
        keys(&value),
        vec![
            "platform",
            "name",
            "play_time",
            "chapter",
            "level",
            "xp",
            "money",
            "inventory",
            "corpse_inventory",
            "weapons",
            "chips",
        ]
    );
    assert_eq!(value["platform"], "pc");
    assert_eq!(value["name"], "9S");
    assert_eq!(value["play_time"], "01:02:05");
    assert_eq!(value["level"], 2);
    assert_eq!(value["inventory"][0]["name"], "item_rec_S");
    assert_eq!(value["inventory"][0]["status"], "active");
    assert_eq!(value["weapons"][0]["name"], "weapon_japanese_sword");
    assert_eq!(value["chips"], Value::Array(Vec::new()));
}

#[test]
fn selected_json_uses_canonical_subset_order() {
    let fields = FieldSelection {
        money: true,
        name: true,
        weapons: true,
        ..FieldSelection::default()
    };
    let value = render_json_selected(&session(), &fields, &ItemCatalog::builtin());
    assert_eq!(keys(&value), vec!["name", "money", "weapons"]);
}

#[test]
fn translations_flow_into_names() {
    let catalog = ItemCatalog::from_json_str("en", r#"{ "0:item_rec_S": "Small Recovery" }"#)
        .expect("catalog");
    let value = render_json_full(&session(), &catalog);
    assert_eq!(value["inventory"][0]["name"], "Small Recovery");
}

#[test]
fn selected_pairs_are_key_value_lines() {
    let fields = FieldSelection {
        name: true,
        play_time: true,
        money: true,
        ..FieldSelection::default()
    };
    assert!(fields.is_any_selected());
    let rendered = render_selected_pairs(&session(), &fields, &ItemCatalog::builtin());
    assert_eq!(rendered, "name=9S\nplay_time=01:02:05\nmoney=5000\n");
}

#[test]
fn text_summary_and_verbose_sections() {
    let session = session();
    let catalog = ItemCatalog::builtin();

    let summary = render_text(&session, &catalog, TextRenderOptions::default());
    assert!(summary.contains("Player Name : 9S"));
    assert!(summary.contains("Play Time   : 01:02:05"));
    assert!(summary.contains("Money       : 5000"));
    assert!(summary.contains("XP          : 48"));
    assert!(!summary.contains("::: Inventory"));

    let verbose = render_text(&session, &catalog, TextRenderOptions { verbose: true });
    assert!(verbose.starts_with(&summary));
    assert!(verbose.contains(" ::: Inventory (1) :::"));
    assert!(verbose.contains("item_rec_S"));
    assert!(verbose.contains(" ::: Chips (0) :::\n  none"));
}

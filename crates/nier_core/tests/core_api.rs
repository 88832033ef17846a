mod common;

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use nier_core::core_api::{CoreErrorCode, Engine, ItemCatalog, ItemKind, UNKNOWN_NAME};
use nier_core::layout::{CONSOLE_SAVE_SIZE, PC_SAVE_SIZE};
use nier_core::platform::Platform;
use nier_core::record::{Item, Record};
use nier_core::status::ItemStatus;

fn open_pc() -> nier_core::core_api::Session {
    Engine::new()
        .open_bytes(common::pc_image(), None)
        .expect("open synthetic PC save")
}

fn temp_dir(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    let dir =
        std::env::temp_dir().join(format!("nier_core_{label}_{}_{nanos}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn engine_detects_platform_by_length() {
    let engine = Engine::new();
    let pc = engine.open_bytes(common::pc_image(), None).expect("open pc");
    assert_eq!(pc.platform(), Platform::Pc);

    let console = engine
        .open_bytes(common::console_image(), None)
        .expect("open console");
    assert_eq!(console.platform(), Platform::Console);
    assert_eq!(console.snapshot().player_name, common::PLAYER_NAME);
}

#[test]
fn engine_hint_must_match_length() {
    let engine = Engine::new();
    let err = engine
        .open_bytes(common::pc_image(), Some(Platform::Console))
        .unwrap_err();
    assert_eq!(err.code, CoreErrorCode::Format);

    let ok = engine.open_bytes(common::console_image(), Some(Platform::Console));
    assert!(ok.is_ok());
}

#[test]
fn snapshot_reports_header_and_counts() {
    let snapshot = open_pc().snapshot();
    assert_eq!(snapshot.platform, Platform::Pc);
    assert_eq!(snapshot.player_name, "2B");
    assert_eq!(snapshot.play_time, common::PLAY_TIME);
    assert_eq!(snapshot.chapter, common::CHAPTER);
    assert_eq!(snapshot.money, common::MONEY);
    assert_eq!(snapshot.experience, common::EXPERIENCE);
    assert_eq!(snapshot.level, 4);
    assert_eq!(snapshot.inventory_active, 3);
    assert_eq!(snapshot.corpse_inventory_active, 1);
    assert_eq!(snapshot.weapons_active, 1);
    assert_eq!(snapshot.chips_active, 1);
}

#[test]
fn setters_validate_before_mutating() {
    let mut session = open_pc();

    assert_eq!(session.set_money(-1).unwrap_err().code, CoreErrorCode::InvalidInput);
    assert_eq!(session.set_experience(-5).unwrap_err().code, CoreErrorCode::InvalidInput);
    assert_eq!(session.set_play_time(-1).unwrap_err().code, CoreErrorCode::InvalidInput);
    assert_eq!(session.set_player_name("").unwrap_err().code, CoreErrorCode::InvalidInput);
    assert_eq!(
        session.set_player_name(&"n".repeat(36)).unwrap_err().code,
        CoreErrorCode::InvalidInput
    );
    assert_eq!(session.set_level(0).unwrap_err().code, CoreErrorCode::InvalidInput);
    assert_eq!(session.set_level(100).unwrap_err().code, CoreErrorCode::InvalidInput);

    let snapshot = session.snapshot();
    assert_eq!(snapshot.money, common::MONEY);
    assert_eq!(snapshot.experience, common::EXPERIENCE);
    assert_eq!(snapshot.player_name, common::PLAYER_NAME);
}

#[test]
fn setters_round_trip_through_bytes() {
    let mut session = open_pc();
    session.set_player_name("A2").expect("name");
    session.set_play_time(7200).expect("time");
    session.set_chapter(9).expect("chapter");
    session.set_money(1_000_000).expect("money");
    session.set_level(10).expect("level");

    let bytes = session.to_bytes().expect("write");
    assert_eq!(bytes.len(), PC_SAVE_SIZE);

    let reopened = Engine::new().open_bytes(&bytes, None).expect("reopen");
    let snapshot = reopened.snapshot();
    assert_eq!(snapshot.player_name, "A2");
    assert_eq!(snapshot.play_time, 7200);
    assert_eq!(snapshot.chapter, 9);
    assert_eq!(snapshot.money, 1_000_000);
    assert_eq!(snapshot.experience, 3184);
    assert_eq!(snapshot.level, 10);
}

#[test]
fn to_bytes_for_exports_other_platform() {
    let session = open_pc();
    let console = session.to_bytes_for(Platform::Console).expect("export");
    assert_eq!(console.len(), CONSOLE_SAVE_SIZE);
    let reopened = Engine::new().open_bytes(&console, None).expect("reopen");
    assert_eq!(reopened.platform(), Platform::Console);
    assert_eq!(reopened.snapshot().money, common::MONEY);
}

#[test]
fn item_operations() {
    let mut session = open_pc();
    let index = session.add_item(330, 4).expect("add item");
    assert_eq!(index, 2);
    assert_eq!(session.save().inventory.get(2).map(|i| i.quantity), Some(4));

    session.set_item_quantity(2, 99).expect("set quantity");
    assert_eq!(session.save().inventory.get(2).map(|i| i.quantity), Some(99));
    assert_eq!(
        session.set_item_quantity(3, 1).unwrap_err().code,
        CoreErrorCode::InvalidInput
    );
    let err = session.set_item_quantity(256, 1).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::Range);
    assert!(err.message.contains("expected 0..256"), "{}", err.message);
    assert_eq!(session.add_item(330, 0).unwrap_err().code, CoreErrorCode::InvalidInput);

    session.remove_item(2).expect("remove");
    assert!(session.save().inventory.get(2).is_none());
    assert_eq!(session.remove_item(999).unwrap_err().code, CoreErrorCode::Range);

    session.remove_corpse_item(3).expect("remove corpse item");
    assert_eq!(session.snapshot().corpse_inventory_active, 0);
}

#[test]
fn add_into_full_inventory_reports_full() {
    let mut session = open_pc();
    for slot in session.save_mut().inventory.raw_mut() {
        if !slot.is_active() {
            *slot = Item {
                index: slot.index,
                ..Item::new(0, 1)
            };
        }
    }
    let before = session.save().inventory.clone();
    let err = session.add_item(1, 1).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::InventoryFull);
    assert_eq!(session.save().inventory, before);
}

#[test]
fn weapon_and_chip_operations() {
    let mut session = open_pc();
    let weapon = session.add_weapon(1013).expect("add weapon");
    assert_eq!(weapon, 1);
    session.set_weapon_level(1, 4).expect("level");
    assert_eq!(session.save().weapons.get(1).map(|w| w.level), Some(4));
    session.remove_weapon(0).expect("remove weapon");
    assert_eq!(session.snapshot().weapons_active, 1);

    let chip = session.add_chip(3002).expect("add chip");
    assert_eq!(chip, 1);
    assert_eq!(session.save().chips.get(1).map(|c| (c.level, c.weight)), Some((0, 0)));
    session.remove_chip(0).expect("remove chip");
    assert_eq!(session.snapshot().chips_active, 1);
}

#[test]
fn listings_resolve_names_through_catalog() {
    let session = open_pc();
    let catalog = ItemCatalog::builtin();

    let inventory = session.inventory(&catalog);
    assert_eq!(inventory.len(), 3);
    assert_eq!(inventory[0].name, "item_rec_S");
    assert_eq!(inventory[0].status, ItemStatus::Active);
    assert_eq!(inventory[2].index, 7);
    assert_eq!(inventory[2].name, "weapon_japanese_sword");

    let weapons = session.weapons(&catalog);
    assert_eq!(weapons.len(), 1);
    assert!(weapons[0].is_new_item);
    assert_eq!(weapons[0].enemies_defeated, 17);

    let chips = session.chips(&catalog);
    assert_eq!(chips[0].name, "skill_psv_atkUp_0");
    assert_eq!(chips[0].slots, [-1, -1, -1]);

    let corpse = session.corpse_inventory(&catalog);
    assert_eq!(corpse[0].name, "item_rec_M");
}

#[test]
fn catalog_loads_translation_files() {
    let dir = temp_dir("catalog");
    fs::write(dir.join("fr.json"), r#"{ "0:item_rec_S": "Petite potion" }"#).expect("write fr");
    fs::write(dir.join("bad.json"), "{ not json").expect("write bad");

    let fr = ItemCatalog::load_from_dir(&dir, "fr").expect("load fr");
    assert_eq!(fr.language(), "fr");
    assert_eq!(fr.name(0), "Petite potion");
    assert_eq!(fr.name(1), "item_rec_M");

    let missing = ItemCatalog::load_from_dir(&dir, "de").expect("missing file is not an error");
    assert!(missing.is_empty());
    assert_eq!(missing.name(-1), UNKNOWN_NAME);

    let err = ItemCatalog::load_from_dir(&dir, "bad").unwrap_err();
    assert_eq!(err.code, CoreErrorCode::Translation);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn catalog_choices_and_skeleton() {
    let catalog = ItemCatalog::builtin();
    let items = catalog.choices(ItemKind::Item);
    assert!(items.iter().any(|(id, _)| *id == 0));
    assert!(items.iter().all(|(id, _)| *id != 1003));

    let skeleton = ItemCatalog::skeleton();
    assert_eq!(
        skeleton.get("1003:weapon_japanese_sword").map(String::as_str),
        Some("weapon_japanese_sword")
    );
    assert_eq!(catalog.code(3001), Some("skill_psv_atkUp_0"));
}

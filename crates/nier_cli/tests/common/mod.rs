#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use nier_core::layout::{
    CHIPS_OFFSET, CORPSE_INVENTORY_OFFSET, EXPERIENCE_OFFSET, INVENTORY_OFFSET, MONEY_OFFSET,
    PC_SAVE_SIZE, PLAY_TIME_OFFSET, PLAYER_NAME_OFFSET, WEAPONS_OFFSET,
};
use nier_core::record::{Chip, Item, Record, Weapon};

pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nier-se"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run nier-se CLI")
}

pub fn temp_path(prefix: &str, ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{}_{}.{ext}", std::process::id(), nanos))
}

fn put_i32(image: &mut [u8], offset: usize, value: i32) {
    image[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn fill_region<R: Record>(image: &mut [u8], offset: usize, slots: &[R]) {
    let mut bytes = Vec::new();
    for slot in slots {
        slot.encode_into(&mut bytes);
    }
    image[offset..offset + bytes.len()].copy_from_slice(&bytes);
}

/// PC save for "2B": 1h 2m 3s played, 777 money, 139 XP (level 3), one
/// recovery item in slot 0 and one weapon.
pub fn pc_save_bytes() -> Vec<u8> {
    let mut image = vec![0u8; PC_SAVE_SIZE];
    put_i32(&mut image, PLAY_TIME_OFFSET, 3723);
    put_i32(&mut image, MONEY_OFFSET, 777);
    put_i32(&mut image, EXPERIENCE_OFFSET, 139);
    for (i, unit) in "2B".encode_utf16().enumerate() {
        let at = PLAYER_NAME_OFFSET + i * 2;
        image[at..at + 2].copy_from_slice(&unit.to_le_bytes());
    }

    let mut items: Vec<Item> = (0..256).map(Item::empty).collect();
    items[0] = Item::new(0, 3);
    fill_region(&mut image, INVENTORY_OFFSET, &items);
    let corpse: Vec<Item> = (0..256).map(Item::empty).collect();
    fill_region(&mut image, CORPSE_INVENTORY_OFFSET, &corpse);
    let mut weapons: Vec<Weapon> = (0..39).map(Weapon::empty).collect();
    weapons[0] = Weapon::new(1003);
    fill_region(&mut image, WEAPONS_OFFSET, &weapons);
    let chips: Vec<Chip> = (0..256).map(Chip::empty).collect();
    fill_region(&mut image, CHIPS_OFFSET, &chips);
    image
}

pub fn write_pc_save(prefix: &str) -> PathBuf {
    let path = temp_path(prefix, "dat");
    std::fs::write(&path, pc_save_bytes()).expect("write synthetic save");
    path
}

#![allow(dead_code)]

use nier_core::layout::{
    CHAPTER_OFFSET, CHIPS_OFFSET, CORPSE_INVENTORY_OFFSET, EXPERIENCE_OFFSET, HEADER_ID_OFFSET,
    INVENTORY_OFFSET, MONEY_OFFSET, PC_SAVE_SIZE, PLAY_TIME_OFFSET, PLAYER_NAME_OFFSET,
    WEAPONS_OFFSET,
};
use nier_core::platform;
use nier_core::record::{Chip, Item, Record, Weapon};

pub const PLAYER_NAME: &str = "2B";
pub const PLAY_TIME: i32 = 3 * 3600 + 25 * 60 + 7;
pub const CHAPTER: i32 = 4;
pub const MONEY: i32 = 12_345;
pub const EXPERIENCE: i32 = 500;
pub const HEADER_ID: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

pub fn write_i32(image: &mut [u8], offset: usize, value: i32) {
    image[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

pub fn read_i32(image: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes(image[offset..offset + 4].try_into().unwrap())
}

fn write_region<R: Record>(
    image: &mut [u8],
    offset: usize,
    count: usize,
    slot: impl Fn(usize) -> R,
) {
    let mut bytes = Vec::with_capacity(count * R::WIDTH);
    for index in 0..count {
        slot(index).encode_into(&mut bytes);
    }
    image[offset..offset + bytes.len()].copy_from_slice(&bytes);
}

/// A well-formed PC image: every slot region holds valid records, a few of
/// them occupied, and every byte outside the modeled fields is a recognisable
/// filler pattern.
pub fn pc_image() -> Vec<u8> {
    let mut image: Vec<u8> = (0..PC_SAVE_SIZE).map(|i| (i % 251) as u8).collect();
    // Keep the duplicated block and tail padding consistent with a console origin.
    let dup = nier_core::layout::DUPLICATION_OFFSET;
    let block: Vec<u8> = image[dup + 16..dup + 32].to_vec();
    image[dup..dup + 16].copy_from_slice(&block);
    image[nier_core::layout::CONSOLE_SAVE_SIZE + 28..].fill(0);

    image[HEADER_ID_OFFSET..HEADER_ID_OFFSET + 12].copy_from_slice(&HEADER_ID);
    write_i32(&mut image, PLAY_TIME_OFFSET, PLAY_TIME);
    write_i32(&mut image, CHAPTER_OFFSET, CHAPTER);

    let name = &mut image[PLAYER_NAME_OFFSET..PLAYER_NAME_OFFSET + 70];
    name.fill(0);
    for (i, unit) in PLAYER_NAME.encode_utf16().enumerate() {
        name[i * 2..i * 2 + 2].copy_from_slice(&unit.to_le_bytes());
    }

    write_i32(&mut image, MONEY_OFFSET, MONEY);
    write_i32(&mut image, EXPERIENCE_OFFSET, EXPERIENCE);

    write_region(&mut image, INVENTORY_OFFSET, 256, |index| match index {
        0 => Item::new(0, 5),
        1 => Item::new(2, 1),
        7 => Item::new(1003, 1),
        _ => Item::empty(index),
    });
    write_region(&mut image, CORPSE_INVENTORY_OFFSET, 256, |index| match index {
        3 => Item::new(1, 2),
        _ => Item::empty(index),
    });
    write_region(&mut image, WEAPONS_OFFSET, 39, |index| match index {
        0 => Weapon {
            level: 2,
            is_new_item: true,
            enemies_defeated: 17,
            ..Weapon::new(1003)
        },
        _ => Weapon::empty(index),
    });
    write_region(&mut image, CHIPS_OFFSET, 256, |index| match index {
        0 => Chip {
            base_code: 3,
            chip_type: 1,
            level: 2,
            weight: 9,
            ..Chip::new(3001)
        },
        _ => Chip::empty(index),
    });

    image
}

pub fn console_image() -> Vec<u8> {
    platform::pc_to_console(&pc_image()).expect("synthetic PC image converts to console")
}

/// [`console_image`] normalized back to PC; the first 12 bytes are zero.
pub fn console_image_as_pc() -> Vec<u8> {
    platform::console_to_pc(&console_image()).expect("synthetic console image converts to PC")
}

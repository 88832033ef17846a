use nier_core::core_api::CoreErrorCode;
use nier_core::layout::{CHIP_RECORD_SIZE, CHIP_TRAILER, ITEM_RECORD_SIZE, WEAPON_RECORD_SIZE};
use nier_core::record::{Chip, EMPTY_ID, Item, Record, Weapon};
use nier_core::status::ItemStatus;

fn i32s(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[test]
fn item_decodes_fields_in_order() {
    let bytes = i32s(&[2, 0x0007_0000, 99]);
    let item = Item::decode(&bytes, 4).expect("decode item");
    assert_eq!(item.index, 4);
    assert_eq!(item.id, 2);
    assert_eq!(item.status, ItemStatus::Active);
    assert_eq!(item.quantity, 99);
    assert!(item.is_active());
    assert_eq!(item.encode(), bytes);
}

#[test]
fn item_unknown_status_becomes_inactive_on_write() {
    let bytes = i32s(&[2, 0x1234, 1]);
    let item = Item::decode(&bytes, 0).expect("decode item");
    assert_eq!(item.status, ItemStatus::Inactive);
    assert_eq!(item.encode(), i32s(&[2, -1, 1]));
}

#[test]
fn empty_item_is_sentinel_filled() {
    let item = Item::empty(9);
    assert_eq!(item.index, 9);
    assert!(!item.is_active());
    assert_eq!(item.encode(), i32s(&[EMPTY_ID, -1, 0]));
}

#[test]
fn short_input_is_a_decode_error() {
    let err = Item::decode(&[0u8; ITEM_RECORD_SIZE - 1], 0).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::Decode);
    let err = Weapon::decode(&[0u8; WEAPON_RECORD_SIZE - 1], 0).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::Decode);
    let err = Chip::decode(&[0u8; CHIP_RECORD_SIZE - 1], 0).unwrap_err();
    assert_eq!(err.code, CoreErrorCode::Decode);
}

#[test]
fn weapon_flags_are_booleans() {
    let bytes = i32s(&[1003, 3, 1, 0, 250]);
    let weapon = Weapon::decode(&bytes, 2).expect("decode weapon");
    assert_eq!(weapon.id, 1003);
    assert_eq!(weapon.level, 3);
    assert!(weapon.is_new_item);
    assert!(!weapon.is_new_story);
    assert_eq!(weapon.enemies_defeated, 250);
    assert_eq!(weapon.encode(), bytes);

    let odd = Weapon::decode(&i32s(&[1003, 3, 7, 0, 0]), 0).expect("decode weapon");
    assert!(odd.is_new_item);
    assert_eq!(&odd.encode()[8..12], &1i32.to_le_bytes());
}

#[test]
fn empty_weapon_layout() {
    let weapon = Weapon::empty(1);
    assert!(!weapon.is_active());
    assert_eq!(weapon.encode(), i32s(&[-1, 0, 0, 0, 0]));
}

#[test]
fn chip_encodes_fixed_trailer() {
    let mut bytes = i32s(&[3, 3001, 1, 2, 9, -1, -1, -1]);
    bytes.extend_from_slice(&CHIP_TRAILER);
    let chip = Chip::decode(&bytes, 0).expect("decode chip");
    assert_eq!(chip.base_id, 3001);
    assert_eq!(chip.weight, 9);
    assert_eq!(chip.encode().len(), CHIP_RECORD_SIZE);
    assert_eq!(chip.encode(), bytes);
}

#[test]
fn chip_trailer_is_not_read() {
    let mut bytes = i32s(&[3, 3001, 1, 2, 9, 0, 0, 0]);
    bytes.extend_from_slice(&[0xAB; 16]);
    let chip = Chip::decode(&bytes, 0).expect("decode chip");
    assert_eq!(&chip.encode()[32..], &CHIP_TRAILER);
}

#[test]
fn new_records_are_active() {
    assert!(Item::new(0, 1).is_active());
    assert!(Weapon::new(1003).is_active());
    let chip = Chip::new(3001);
    assert!(chip.is_active());
    assert_eq!((chip.level, chip.weight), (0, 0));
    assert_eq!(chip.slot_a, EMPTY_ID);
}

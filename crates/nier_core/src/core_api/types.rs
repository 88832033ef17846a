use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::status::ItemStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub platform: Platform,
    pub player_name: String,
    pub play_time: i32,
    pub chapter: i32,
    pub money: i32,
    pub experience: i32,
    pub level: i32,
    pub inventory_active: usize,
    pub corpse_inventory_active: usize,
    pub weapons_active: usize,
    pub chips_active: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryEntry {
    pub index: usize,
    pub id: i32,
    pub name: String,
    pub status: ItemStatus,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeaponEntry {
    pub index: usize,
    pub id: i32,
    pub name: String,
    pub level: i32,
    pub is_new_item: bool,
    pub is_new_story: bool,
    pub enemies_defeated: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChipEntry {
    pub index: usize,
    pub base_id: i32,
    pub name: String,
    pub base_code: i32,
    pub chip_type: i32,
    pub level: i32,
    pub weight: i32,
    pub slots: [i32; 3],
}

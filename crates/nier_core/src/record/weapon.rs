use serde::{Deserialize, Serialize};

use super::{EMPTY_ID, Record, map_read_err, push_i32, record_reader};
use crate::core_api::CoreError;
use crate::layout::WEAPON_RECORD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    #[serde(skip)]
    pub index: usize,
    pub id: i32,
    pub level: i32,
    pub is_new_item: bool,
    pub is_new_story: bool,
    pub enemies_defeated: i32,
}

impl Weapon {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            ..Self::empty(0)
        }
    }
}

impl Record for Weapon {
    const WIDTH: usize = WEAPON_RECORD_SIZE;
    const KIND: &'static str = "weapon";

    fn decode(bytes: &[u8], index: usize) -> Result<Self, CoreError> {
        let mut r = record_reader::<Self>(bytes)?;
        let [id, level, new_item, new_story, enemies_defeated] =
            r.read_i32_array::<5>().map_err(map_read_err::<Self>(index))?;

        Ok(Self {
            index,
            id,
            level,
            is_new_item: new_item != 0,
            is_new_story: new_story != 0,
            enemies_defeated,
        })
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        push_i32(out, self.id);
        push_i32(out, self.level);
        push_i32(out, i32::from(self.is_new_item));
        push_i32(out, i32::from(self.is_new_story));
        push_i32(out, self.enemies_defeated);
    }

    fn is_active(&self) -> bool {
        self.id != EMPTY_ID
    }

    fn empty(index: usize) -> Self {
        Self {
            index,
            id: EMPTY_ID,
            level: 0,
            is_new_item: false,
            is_new_story: false,
            enemies_defeated: 0,
        }
    }

    fn index(&self) -> usize {
        self.index
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

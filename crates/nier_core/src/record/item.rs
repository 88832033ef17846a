use serde::{Deserialize, Serialize};

use super::{EMPTY_ID, Record, map_read_err, push_i32, record_reader};
use crate::core_api::CoreError;
use crate::layout::ITEM_RECORD_SIZE;
use crate::status::ItemStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(skip)]
    pub index: usize,
    pub id: i32,
    pub status: ItemStatus,
    pub quantity: i32,
}

impl Item {
    pub fn new(id: i32, quantity: i32) -> Self {
        Self {
            index: 0,
            id,
            status: ItemStatus::Active,
            quantity,
        }
    }
}

impl Record for Item {
    const WIDTH: usize = ITEM_RECORD_SIZE;
    const KIND: &'static str = "item";

    fn decode(bytes: &[u8], index: usize) -> Result<Self, CoreError> {
        let mut r = record_reader::<Self>(bytes)?;
        let [id, status_raw, quantity] = r
            .read_i32_array::<3>()
            .map_err(map_read_err::<Self>(index))?;

        if !ItemStatus::is_known_raw(status_raw) {
            log::warn!(
                "unknown status {status_raw:#x} for item id {id} in slot {index}; treating as inactive"
            );
        }

        Ok(Self {
            index,
            id,
            status: ItemStatus::from_raw(status_raw),
            quantity,
        })
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        push_i32(out, self.id);
        push_i32(out, self.status.raw());
        push_i32(out, self.quantity);
    }

    fn is_active(&self) -> bool {
        self.id != EMPTY_ID
    }

    fn empty(index: usize) -> Self {
        Self {
            index,
            id: EMPTY_ID,
            status: ItemStatus::Inactive,
            quantity: 0,
        }
    }

    fn index(&self) -> usize {
        self.index
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

use serde::{Deserialize, Serialize};

use super::{EMPTY_ID, Record, map_read_err, push_i32, record_reader};
use crate::core_api::CoreError;
use crate::layout::{CHIP_RECORD_SIZE, CHIP_TRAILER};

/// A plug-in chip. The record's 16-byte trailer is a fixed constant and is
/// not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    #[serde(skip)]
    pub index: usize,
    pub base_code: i32,
    pub base_id: i32,
    pub chip_type: i32,
    pub level: i32,
    pub weight: i32,
    pub slot_a: i32,
    pub slot_b: i32,
    pub slot_c: i32,
}

impl Chip {
    pub fn new(base_id: i32) -> Self {
        Self {
            base_id,
            level: 0,
            weight: 0,
            ..Self::empty(0)
        }
    }
}

impl Record for Chip {
    const WIDTH: usize = CHIP_RECORD_SIZE;
    const KIND: &'static str = "chip";

    fn decode(bytes: &[u8], index: usize) -> Result<Self, CoreError> {
        let mut r = record_reader::<Self>(bytes)?;
        let [
            base_code,
            base_id,
            chip_type,
            level,
            weight,
            slot_a,
            slot_b,
            slot_c,
        ] = r.read_i32_array::<8>().map_err(map_read_err::<Self>(index))?;

        Ok(Self {
            index,
            base_code,
            base_id,
            chip_type,
            level,
            weight,
            slot_a,
            slot_b,
            slot_c,
        })
    }

    fn encode_into(&self, out: &mut Vec<u8>) {
        for value in [
            self.base_code,
            self.base_id,
            self.chip_type,
            self.level,
            self.weight,
            self.slot_a,
            self.slot_b,
            self.slot_c,
        ] {
            push_i32(out, value);
        }
        out.extend_from_slice(&CHIP_TRAILER);
    }

    fn is_active(&self) -> bool {
        self.base_id != EMPTY_ID
    }

    fn empty(index: usize) -> Self {
        Self {
            index,
            base_code: EMPTY_ID,
            base_id: EMPTY_ID,
            chip_type: EMPTY_ID,
            level: EMPTY_ID,
            weight: EMPTY_ID,
            slot_a: EMPTY_ID,
            slot_b: EMPTY_ID,
            slot_c: EMPTY_ID,
        }
    }

    fn index(&self) -> usize {
        self.index
    }

    fn set_index(&mut self, index: usize) {
        self.index = index;
    }
}

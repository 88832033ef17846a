//! Byte layout of a PC-format save image.
//!
//! Every offset here is absolute within the PC image. Console images only
//! become addressable through [`crate::platform::console_to_pc`].

use crate::core_api::CoreError;

pub const PC_SAVE_SIZE: usize = 0x399CC;
pub const CONSOLE_SAVE_SIZE: usize = 0x39990;
pub const CONSOLE_HEADER_SIZE: usize = 12;

pub const DUPLICATION_OFFSET: usize = 0x39830;
pub const DUPLICATION_LENGTH: usize = 16;

pub const I32_WIDTH: usize = 4;

pub const HEADER_ID_OFFSET: usize = 0x00004;
pub const HEADER_ID_LEN: usize = 12;
pub const PLAY_TIME_OFFSET: usize = 0x00024;
pub const CHAPTER_OFFSET: usize = 0x0002C;
pub const PLAYER_NAME_OFFSET: usize = 0x00034;
pub const PLAYER_NAME_LEN: usize = 70;
/// Name length limit in UTF-16 code units.
pub const PLAYER_NAME_MAX_UNITS: usize = PLAYER_NAME_LEN / 2;
pub const PLAYER_NAME_TERMINATOR_LEN: usize = 2;

pub const MONEY_OFFSET: usize = 0x3056C;
pub const EXPERIENCE_OFFSET: usize = 0x3871C;

pub const INVENTORY_OFFSET: usize = 0x30570;
pub const CORPSE_INVENTORY_OFFSET: usize = 0x31170;
pub const WEAPONS_OFFSET: usize = 0x31D70;
pub const CHIPS_OFFSET: usize = 0x324BC;

pub const INVENTORY_ITEM_COUNT: usize = 256;
pub const CORPSE_INVENTORY_ITEM_COUNT: usize = 256;
pub const INVENTORY_WEAPON_COUNT: usize = 39;
pub const INVENTORY_CHIP_COUNT: usize = 256;

pub const ITEM_RECORD_SIZE: usize = 3 * I32_WIDTH;
pub const WEAPON_RECORD_SIZE: usize = 5 * I32_WIDTH;
pub const CHIP_TRAILER: [u8; 16] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
];
pub const CHIP_FIELDS_SIZE: usize = 8 * I32_WIDTH;
pub const CHIP_RECORD_SIZE: usize = CHIP_FIELDS_SIZE + CHIP_TRAILER.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: usize,
    pub end: usize,
}

impl ByteRange {
    pub const fn at(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &ByteRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    HeaderId,
    PlayTime,
    Chapter,
    PlayerName,
    Money,
    Inventory,
    CorpseInventory,
    Weapons,
    Chips,
    Experience,
    DuplicationBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub id: FieldId,
    pub range: ByteRange,
}

const fn field(id: FieldId, start: usize, len: usize) -> FieldLayout {
    FieldLayout {
        id,
        range: ByteRange::at(start, len),
    }
}

/// Modeled regions of the PC image, ordered by offset.
pub const PC_FIELDS: [FieldLayout; 11] = [
    field(FieldId::HeaderId, HEADER_ID_OFFSET, HEADER_ID_LEN),
    field(FieldId::PlayTime, PLAY_TIME_OFFSET, I32_WIDTH),
    field(FieldId::Chapter, CHAPTER_OFFSET, I32_WIDTH),
    field(FieldId::PlayerName, PLAYER_NAME_OFFSET, PLAYER_NAME_LEN),
    field(FieldId::Money, MONEY_OFFSET, I32_WIDTH),
    field(
        FieldId::Inventory,
        INVENTORY_OFFSET,
        INVENTORY_ITEM_COUNT * ITEM_RECORD_SIZE,
    ),
    field(
        FieldId::CorpseInventory,
        CORPSE_INVENTORY_OFFSET,
        CORPSE_INVENTORY_ITEM_COUNT * ITEM_RECORD_SIZE,
    ),
    field(
        FieldId::Weapons,
        WEAPONS_OFFSET,
        INVENTORY_WEAPON_COUNT * WEAPON_RECORD_SIZE,
    ),
    field(
        FieldId::Chips,
        CHIPS_OFFSET,
        INVENTORY_CHIP_COUNT * CHIP_RECORD_SIZE,
    ),
    field(FieldId::Experience, EXPERIENCE_OFFSET, I32_WIDTH),
    field(
        FieldId::DuplicationBlock,
        DUPLICATION_OFFSET,
        DUPLICATION_LENGTH,
    ),
];

#[derive(Debug, Clone)]
pub struct FileLayout {
    pub file_len: usize,
    pub fields: Vec<FieldLayout>,
}

impl FileLayout {
    pub fn pc() -> Self {
        Self {
            file_len: PC_SAVE_SIZE,
            fields: PC_FIELDS.to_vec(),
        }
    }

    pub fn field(&self, id: FieldId) -> Option<ByteRange> {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(|field| field.range)
    }

    /// Checks that fields are non-empty, ordered, disjoint and inside the image.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.fields.is_empty() {
            return Err(CoreError::format(
                "file layout must contain at least one field",
            ));
        }

        let mut previous_end = 0usize;
        for (idx, field) in self.fields.iter().enumerate() {
            if field.range.is_empty() || field.range.end < field.range.start {
                return Err(CoreError::format(format!(
                    "invalid field range {:?}: {:#x}..{:#x}",
                    field.id, field.range.start, field.range.end
                )));
            }
            if idx > 0 && field.range.start < previous_end {
                return Err(CoreError::format(format!(
                    "layout overlap around field {:?}: starts at {:#x}, previous field ends at {:#x}",
                    field.id, field.range.start, previous_end
                )));
            }
            if field.range.end > self.file_len {
                return Err(CoreError::format(format!(
                    "field {:?} ends at {:#x}, past file length {:#x}",
                    field.id, field.range.end, self.file_len
                )));
            }
            previous_end = field.range.end;
        }

        Ok(())
    }
}

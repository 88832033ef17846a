use std::io::Cursor;

use crate::core_api::{CoreError, CoreErrorCode};
use crate::experience;
use crate::inventory::{ChipInventory, CorpseInventory, ItemInventory, WeaponInventory};
use crate::layout::{
    CHAPTER_OFFSET, CHIPS_OFFSET, CORPSE_INVENTORY_OFFSET, EXPERIENCE_OFFSET, HEADER_ID_LEN,
    HEADER_ID_OFFSET, I32_WIDTH, INVENTORY_OFFSET, MONEY_OFFSET, PC_SAVE_SIZE, PLAY_TIME_OFFSET,
    PLAYER_NAME_LEN, PLAYER_NAME_OFFSET, PLAYER_NAME_TERMINATOR_LEN, WEAPONS_OFFSET,
};
use crate::platform::{self, Platform};
use crate::reader::LittleEndianReader;

/// A loaded save slot.
///
/// The PC-layout image captured at load time is kept as a template; `write`
/// patches the modeled fields into a copy of it so every other byte
/// round-trips untouched.
#[derive(Debug, Clone, Default)]
pub struct SaveFile {
    pub header_id: [u8; HEADER_ID_LEN],
    pub play_time: i32,
    pub chapter: i32,
    pub player_name: String,
    pub money: i32,
    pub xp: i32,
    pub inventory: ItemInventory,
    pub corpse_inventory: CorpseInventory,
    pub weapons: WeaponInventory,
    pub chips: ChipInventory,
    platform: Platform,
    template: Option<Vec<u8>>,
}

impl SaveFile {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        let mut save = Self::default();
        save.load(bytes)?;
        Ok(save)
    }

    /// Replace all state with the contents of `bytes`. On error `self` is
    /// left as it was.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), CoreError> {
        log::debug!("loading save, raw size={:#x}", bytes.len());

        let platform = Platform::detect(bytes.len()).ok_or_else(|| {
            CoreError::format(format!("unsupported save size: {:#x}", bytes.len()))
        })?;
        let image = match platform {
            Platform::Console => platform::console_to_pc(bytes)?,
            Platform::Pc => bytes.to_vec(),
        };

        *self = parse_image(image, platform)?;
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.template.is_some()
    }

    /// Physical format used by `write`; initially the format that was loaded.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    /// The normalized PC image captured by the last `load`.
    pub fn template(&self) -> Option<&[u8]> {
        self.template.as_deref()
    }

    pub fn level(&self) -> Result<i32, CoreError> {
        experience::level_for_xp(self.xp)
    }

    pub fn write(&self) -> Result<Vec<u8>, CoreError> {
        self.write_as(self.platform)
    }

    pub fn write_as(&self, platform: Platform) -> Result<Vec<u8>, CoreError> {
        let template = self.template.as_ref().ok_or_else(|| {
            CoreError::new(CoreErrorCode::NotLoaded, "no save loaded to write from")
        })?;
        let name_bytes = encode_player_name(&self.player_name)?;

        let mut out = template.clone();
        out[HEADER_ID_OFFSET..HEADER_ID_OFFSET + HEADER_ID_LEN].copy_from_slice(&self.header_id);
        patch_i32(&mut out, PLAY_TIME_OFFSET, self.play_time);
        patch_i32(&mut out, CHAPTER_OFFSET, self.chapter);

        let name_field = &mut out[PLAYER_NAME_OFFSET..PLAYER_NAME_OFFSET + PLAYER_NAME_LEN];
        name_field.fill(0);
        name_field[..name_bytes.len()].copy_from_slice(&name_bytes);
        // A full-width name gets its NUL terminator just past the field.
        if name_bytes.len() == PLAYER_NAME_LEN {
            let end = PLAYER_NAME_OFFSET + PLAYER_NAME_LEN;
            out[end..end + PLAYER_NAME_TERMINATOR_LEN].fill(0);
        }

        patch_i32(&mut out, MONEY_OFFSET, self.money);
        patch_i32(&mut out, EXPERIENCE_OFFSET, self.xp);

        self.inventory.serialize_into(
            &mut out[INVENTORY_OFFSET..INVENTORY_OFFSET + ItemInventory::BYTE_LEN],
        )?;
        self.corpse_inventory.serialize_into(
            &mut out[CORPSE_INVENTORY_OFFSET..CORPSE_INVENTORY_OFFSET + CorpseInventory::BYTE_LEN],
        )?;
        self.weapons
            .serialize_into(&mut out[WEAPONS_OFFSET..WEAPONS_OFFSET + WeaponInventory::BYTE_LEN])?;
        self.chips
            .serialize_into(&mut out[CHIPS_OFFSET..CHIPS_OFFSET + ChipInventory::BYTE_LEN])?;

        match platform {
            Platform::Pc => Ok(out),
            Platform::Console => platform::pc_to_console(&out),
        }
    }
}

fn parse_image(image: Vec<u8>, platform: Platform) -> Result<SaveFile, CoreError> {
    if image.len() != PC_SAVE_SIZE {
        return Err(CoreError::format(format!(
            "normalized image must be {PC_SAVE_SIZE:#x} bytes, got {:#x}",
            image.len()
        )));
    }

    let mut r = LittleEndianReader::new(Cursor::new(image.as_slice()));
    let read_err = |field: &'static str| {
        move |e: std::io::Error| CoreError::decode(format!("failed to read {field}: {e}"))
    };

    r.seek_to(HEADER_ID_OFFSET as u64).map_err(read_err("header id"))?;
    let header_id = r.read_array::<HEADER_ID_LEN>().map_err(read_err("header id"))?;

    r.seek_to(PLAY_TIME_OFFSET as u64).map_err(read_err("play time"))?;
    let play_time = r.read_i32().map_err(read_err("play time"))?;

    r.seek_to(CHAPTER_OFFSET as u64).map_err(read_err("chapter"))?;
    let chapter = r.read_i32().map_err(read_err("chapter"))?;

    r.seek_to(PLAYER_NAME_OFFSET as u64).map_err(read_err("player name"))?;
    let player_name = r
        .read_utf16_string(PLAYER_NAME_LEN)
        .map_err(read_err("player name"))?;
    log::info!(
        "parsed header_id={header_id:02x?}, player='{player_name}', play_time={play_time}"
    );

    r.seek_to(MONEY_OFFSET as u64).map_err(read_err("money"))?;
    let money = r.read_i32().map_err(read_err("money"))?;

    r.seek_to(EXPERIENCE_OFFSET as u64).map_err(read_err("experience"))?;
    let xp = r.read_i32().map_err(read_err("experience"))?;

    let inventory = ItemInventory::decode_region(&image, INVENTORY_OFFSET)?;
    log::debug!(
        "loaded {} inventory slots ({} active)",
        ItemInventory::SLOT_COUNT,
        inventory.active_count()
    );
    let corpse_inventory = CorpseInventory::decode_region(&image, CORPSE_INVENTORY_OFFSET)?;
    log::debug!(
        "loaded {} corpse inventory slots ({} active)",
        CorpseInventory::SLOT_COUNT,
        corpse_inventory.active_count()
    );
    let weapons = WeaponInventory::decode_region(&image, WEAPONS_OFFSET)?;
    log::debug!(
        "loaded {} weapon slots ({} active)",
        WeaponInventory::SLOT_COUNT,
        weapons.active_count()
    );
    let chips = ChipInventory::decode_region(&image, CHIPS_OFFSET)?;
    log::debug!(
        "loaded {} chip slots ({} active)",
        ChipInventory::SLOT_COUNT,
        chips.active_count()
    );

    Ok(SaveFile {
        header_id,
        play_time,
        chapter,
        player_name,
        money,
        xp,
        inventory,
        corpse_inventory,
        weapons,
        chips,
        platform,
        template: Some(image),
    })
}

/// UTF-16LE bytes of `name`; must fit the fixed name field.
pub fn encode_player_name(name: &str) -> Result<Vec<u8>, CoreError> {
    let bytes: Vec<u8> = name.encode_utf16().flat_map(u16::to_le_bytes).collect();
    if bytes.len() > PLAYER_NAME_LEN {
        return Err(CoreError::invalid_input(format!(
            "player name needs {} bytes, field holds {PLAYER_NAME_LEN}",
            bytes.len()
        )));
    }
    Ok(bytes)
}

fn patch_i32(image: &mut [u8], offset: usize, value: i32) {
    image[offset..offset + I32_WIDTH].copy_from_slice(&value.to_le_bytes());
}

use crate::experience;
use crate::inventory::SlotCollection;
use crate::layout::PLAYER_NAME_MAX_UNITS;
use crate::platform::Platform;
use crate::record::{Chip, Item, Record, Weapon};
use crate::save::SaveFile;

use super::error::{CoreError, CoreErrorCode};
use super::item_catalog::ItemCatalog;
use super::types::{ChipEntry, InventoryEntry, Snapshot, WeaponEntry};

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

/// An opened save plus the validated editing surface over it.
#[derive(Debug, Clone)]
pub struct Session {
    save: SaveFile,
}

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Open a physical save image. With a hint, the image must have exactly
    /// that platform's length; without one the platform is detected.
    pub fn open_bytes<B: AsRef<[u8]>>(
        &self,
        bytes: B,
        hint: Option<Platform>,
    ) -> Result<Session, CoreError> {
        let bytes = bytes.as_ref();

        if let Some(platform) = hint {
            if bytes.len() != platform.save_len() {
                return Err(CoreError::format(format!(
                    "expected a {platform} save of {:#x} bytes, got {:#x}",
                    platform.save_len(),
                    bytes.len()
                )));
            }
        }

        let save = SaveFile::from_bytes(bytes).map_err(|e| {
            CoreError::new(e.code, format!("failed to open save: {}", e.message))
        })?;
        Ok(Session { save })
    }
}

impl Session {
    pub fn platform(&self) -> Platform {
        self.save.platform()
    }

    pub fn save(&self) -> &SaveFile {
        &self.save
    }

    pub fn save_mut(&mut self) -> &mut SaveFile {
        &mut self.save
    }

    pub fn snapshot(&self) -> Snapshot {
        let save = &self.save;
        Snapshot {
            platform: save.platform(),
            player_name: save.player_name.clone(),
            play_time: save.play_time,
            chapter: save.chapter,
            money: save.money,
            experience: save.xp,
            level: save.level().unwrap_or(experience::MIN_LEVEL),
            inventory_active: save.inventory.active_count(),
            corpse_inventory_active: save.corpse_inventory.active_count(),
            weapons_active: save.weapons.active_count(),
            chips_active: save.chips.active_count(),
        }
    }

    pub fn level(&self) -> Result<i32, CoreError> {
        self.save.level()
    }

    pub fn set_player_name(&mut self, name: &str) -> Result<(), CoreError> {
        if name.is_empty() {
            return Err(CoreError::invalid_input("player name cannot be empty"));
        }
        let units = name.encode_utf16().count();
        if units > PLAYER_NAME_MAX_UNITS {
            return Err(CoreError::invalid_input(format!(
                "player name is {units} characters, maximum is {PLAYER_NAME_MAX_UNITS}"
            )));
        }
        self.save.player_name = name.to_string();
        Ok(())
    }

    pub fn set_play_time(&mut self, seconds: i32) -> Result<(), CoreError> {
        if seconds < 0 {
            return Err(CoreError::invalid_input(format!(
                "play time cannot be negative, got {seconds}"
            )));
        }
        self.save.play_time = seconds;
        Ok(())
    }

    pub fn set_chapter(&mut self, chapter: i32) -> Result<(), CoreError> {
        self.save.chapter = chapter;
        Ok(())
    }

    pub fn set_money(&mut self, money: i32) -> Result<(), CoreError> {
        if money < 0 {
            return Err(CoreError::invalid_input(format!(
                "money cannot be negative, got {money}"
            )));
        }
        self.save.money = money;
        Ok(())
    }

    pub fn set_experience(&mut self, experience: i32) -> Result<(), CoreError> {
        if experience < 0 {
            return Err(CoreError::invalid_input(format!(
                "experience cannot be negative, got {experience}"
            )));
        }
        self.save.xp = experience;
        Ok(())
    }

    /// Set experience to the threshold of `level`.
    pub fn set_level(&mut self, level: i32) -> Result<(), CoreError> {
        let xp = experience::xp_for_level(level).map_err(|_| {
            CoreError::invalid_input(format!(
                "invalid level {level}, expected {}-{}",
                experience::MIN_LEVEL,
                experience::MAX_LEVEL
            ))
        })?;
        self.save.xp = xp;
        Ok(())
    }

    pub fn add_item(&mut self, id: i32, quantity: i32) -> Result<usize, CoreError> {
        if quantity <= 0 {
            return Err(CoreError::invalid_input(format!(
                "item quantity must be positive, got {quantity}"
            )));
        }
        add_to(&mut self.save.inventory, Item::new(id, quantity))
    }

    pub fn set_item_quantity(&mut self, index: usize, quantity: i32) -> Result<(), CoreError> {
        if quantity <= 0 {
            return Err(CoreError::invalid_input(format!(
                "item quantity must be positive, got {quantity}"
            )));
        }
        let mut item = *active_slot(&self.save.inventory, index)?;
        item.quantity = quantity;
        self.save.inventory.set(index, item)
    }

    pub fn remove_item(&mut self, index: usize) -> Result<(), CoreError> {
        self.save.inventory.clear(index)
    }

    pub fn remove_corpse_item(&mut self, index: usize) -> Result<(), CoreError> {
        self.save.corpse_inventory.clear(index)
    }

    pub fn add_weapon(&mut self, id: i32) -> Result<usize, CoreError> {
        add_to(&mut self.save.weapons, Weapon::new(id))
    }

    pub fn set_weapon_level(&mut self, index: usize, level: i32) -> Result<(), CoreError> {
        if level < 0 {
            return Err(CoreError::invalid_input(format!(
                "weapon level cannot be negative, got {level}"
            )));
        }
        let mut weapon = *active_slot(&self.save.weapons, index)?;
        weapon.level = level;
        self.save.weapons.set(index, weapon)
    }

    pub fn remove_weapon(&mut self, index: usize) -> Result<(), CoreError> {
        self.save.weapons.clear(index)
    }

    pub fn add_chip(&mut self, base_id: i32) -> Result<usize, CoreError> {
        add_to(&mut self.save.chips, Chip::new(base_id))
    }

    pub fn remove_chip(&mut self, index: usize) -> Result<(), CoreError> {
        self.save.chips.clear(index)
    }

    pub fn inventory(&self, catalog: &ItemCatalog) -> Vec<InventoryEntry> {
        item_entries(&self.save.inventory, catalog)
    }

    pub fn corpse_inventory(&self, catalog: &ItemCatalog) -> Vec<InventoryEntry> {
        item_entries(&self.save.corpse_inventory, catalog)
    }

    pub fn weapons(&self, catalog: &ItemCatalog) -> Vec<WeaponEntry> {
        self.save
            .weapons
            .active()
            .map(|weapon| WeaponEntry {
                index: weapon.index,
                id: weapon.id,
                name: catalog.name(weapon.id),
                level: weapon.level,
                is_new_item: weapon.is_new_item,
                is_new_story: weapon.is_new_story,
                enemies_defeated: weapon.enemies_defeated,
            })
            .collect()
    }

    pub fn chips(&self, catalog: &ItemCatalog) -> Vec<ChipEntry> {
        self.save
            .chips
            .active()
            .map(|chip| ChipEntry {
                index: chip.index,
                base_id: chip.base_id,
                name: catalog.name(chip.base_id),
                base_code: chip.base_code,
                chip_type: chip.chip_type,
                level: chip.level,
                weight: chip.weight,
                slots: [chip.slot_a, chip.slot_b, chip.slot_c],
            })
            .collect()
    }

    /// Serialize in the platform the save was loaded from.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CoreError> {
        self.save.write()
    }

    pub fn to_bytes_for(&self, platform: Platform) -> Result<Vec<u8>, CoreError> {
        self.save.write_as(platform)
    }
}

/// Render seconds as `HH:MM:SS`; hours are not wrapped.
pub fn format_play_time(seconds: i32) -> String {
    let seconds = seconds.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

pub fn parse_play_time(text: &str) -> Result<i32, CoreError> {
    let invalid =
        || CoreError::invalid_input(format!("invalid play time '{text}', expected HH:MM:SS"));

    let parts: Vec<&str> = text.trim().split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(invalid());
    };
    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    let seconds: i32 = seconds.parse().map_err(|_| invalid())?;

    if hours < 0 || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return Err(invalid());
    }
    hours
        .checked_mul(3600)
        .and_then(|total| total.checked_add(minutes * 60 + seconds))
        .ok_or_else(invalid)
}

fn add_to<R: Record, const N: usize>(
    collection: &mut SlotCollection<R, N>,
    record: R,
) -> Result<usize, CoreError> {
    collection.add_at_first_free(record).ok_or_else(|| {
        CoreError::new(
            CoreErrorCode::InventoryFull,
            format!("no empty {} slot left ({N} in use)", R::KIND),
        )
    })
}

fn active_slot<R: Record, const N: usize>(
    collection: &SlotCollection<R, N>,
    index: usize,
) -> Result<&R, CoreError> {
    if index >= N {
        return Err(CoreError::range(format!(
            "{} slot {index} out of range, expected 0..{N}",
            R::KIND
        )));
    }
    collection.get(index).ok_or_else(|| {
        CoreError::invalid_input(format!("{} slot {index} is empty", R::KIND))
    })
}

fn item_entries<const N: usize>(
    collection: &SlotCollection<Item, N>,
    catalog: &ItemCatalog,
) -> Vec<InventoryEntry> {
    collection
        .active()
        .map(|item| InventoryEntry {
            index: item.index,
            id: item.id,
            name: catalog.name(item.id),
            status: item.status,
            quantity: item.quantity,
        })
        .collect()
}

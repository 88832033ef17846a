use crate::core_api::CoreError;
use crate::layout::{
    CORPSE_INVENTORY_ITEM_COUNT, INVENTORY_CHIP_COUNT, INVENTORY_ITEM_COUNT,
    INVENTORY_WEAPON_COUNT,
};
use crate::record::{Chip, Item, Record, Weapon};

pub type ItemInventory = SlotCollection<Item, INVENTORY_ITEM_COUNT>;
pub type CorpseInventory = SlotCollection<Item, CORPSE_INVENTORY_ITEM_COUNT>;
pub type WeaponInventory = SlotCollection<Weapon, INVENTORY_WEAPON_COUNT>;
pub type ChipInventory = SlotCollection<Chip, INVENTORY_CHIP_COUNT>;

/// Exactly `N` records of one kind in fixed slot order.
///
/// Slots are never added or removed, only overwritten in place; whether a
/// slot is occupied is always derived from the record's id sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCollection<R, const N: usize> {
    slots: Vec<R>,
}

impl<R: Record, const N: usize> SlotCollection<R, N> {
    pub const SLOT_COUNT: usize = N;
    pub const BYTE_LEN: usize = N * R::WIDTH;

    pub fn new(slots: Vec<R>) -> Result<Self, CoreError> {
        if slots.len() != N {
            return Err(CoreError::range(format!(
                "expected {N} {} slots, got {}",
                R::KIND,
                slots.len()
            )));
        }
        Ok(Self { slots })
    }

    /// Decode `N` back-to-back records starting at `offset`.
    pub fn decode_region(image: &[u8], offset: usize) -> Result<Self, CoreError> {
        let end = offset + Self::BYTE_LEN;
        let region = image.get(offset..end).ok_or_else(|| {
            CoreError::decode(format!(
                "{} region {offset:#x}..{end:#x} exceeds image length {:#x}",
                R::KIND,
                image.len()
            ))
        })?;

        let slots = region
            .chunks_exact(R::WIDTH)
            .enumerate()
            .map(|(index, span)| R::decode(span, index))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(slots)
    }

    pub fn raw(&self) -> &[R] {
        &self.slots
    }

    /// Slice access for in-place edits; the slot count cannot change.
    pub fn raw_mut(&mut self) -> &mut [R] {
        &mut self.slots
    }

    /// The record at `index` if that slot is occupied.
    pub fn get(&self, index: usize) -> Option<&R> {
        self.slots.get(index).filter(|slot| slot.is_active())
    }

    pub fn set(&mut self, index: usize, mut record: R) -> Result<(), CoreError> {
        let slot = self.slot_mut(index)?;
        record.set_index(index);
        *slot = record;
        Ok(())
    }

    pub fn clear(&mut self, index: usize) -> Result<(), CoreError> {
        let slot = self.slot_mut(index)?;
        *slot = R::empty(index);
        Ok(())
    }

    pub fn active(&self) -> impl Iterator<Item = &R> + '_ {
        self.slots.iter().filter(|slot| slot.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn free_count(&self) -> usize {
        N - self.active_count()
    }

    /// First-fit insert; `false` leaves every slot untouched.
    pub fn add(&mut self, record: R) -> bool {
        self.add_at_first_free(record).is_some()
    }

    pub fn add_at_first_free(&mut self, mut record: R) -> Option<usize> {
        let index = self.slots.iter().position(|slot| !slot.is_active())?;
        record.set_index(index);
        self.slots[index] = record;
        Some(index)
    }

    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::BYTE_LEN);
        for slot in &self.slots {
            slot.encode_into(&mut out);
        }
        out
    }

    pub fn serialize_into(&self, buf: &mut [u8]) -> Result<(), CoreError> {
        if buf.len() != Self::BYTE_LEN {
            return Err(CoreError::range(format!(
                "{} region must be {} bytes, got {}",
                R::KIND,
                Self::BYTE_LEN,
                buf.len()
            )));
        }
        buf.copy_from_slice(&self.serialize());
        Ok(())
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut R, CoreError> {
        self.slots.get_mut(index).ok_or_else(|| {
            CoreError::range(format!(
                "{} slot {index} out of range, expected 0..{N}",
                R::KIND
            ))
        })
    }
}

impl<R: Record, const N: usize> Default for SlotCollection<R, N> {
    fn default() -> Self {
        Self {
            slots: (0..N).map(R::empty).collect(),
        }
    }
}

impl<'a, R: Record, const N: usize> IntoIterator for &'a SlotCollection<R, N> {
    type Item = &'a R;
    type IntoIter = std::iter::Filter<std::slice::Iter<'a, R>, fn(&&'a R) -> bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots
            .iter()
            .filter(is_active_slot::<R> as fn(&&'a R) -> bool)
    }
}

fn is_active_slot<R: Record>(slot: &&R) -> bool {
    slot.is_active()
}

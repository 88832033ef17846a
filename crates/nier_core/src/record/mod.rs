//! Fixed-width slot records and their little-endian codecs.

mod chip;
mod item;
mod weapon;

use std::io::{self, Cursor};

pub use chip::Chip;
pub use item::Item;
pub use weapon::Weapon;

use crate::core_api::CoreError;
use crate::reader::LittleEndianReader;

/// Sentinel stored in a record's primary id field when the slot is empty.
pub const EMPTY_ID: i32 = -1;

pub trait Record: Clone + Sized {
    /// Encoded width in bytes; `encode` always emits exactly this many.
    const WIDTH: usize;
    const KIND: &'static str;

    /// Decode from the first `WIDTH` bytes of `bytes`.
    fn decode(bytes: &[u8], index: usize) -> Result<Self, CoreError>;

    fn encode_into(&self, out: &mut Vec<u8>);

    fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::WIDTH);
        self.encode_into(&mut out);
        out
    }

    fn is_active(&self) -> bool;

    /// A sentinel-filled slot at `index`.
    fn empty(index: usize) -> Self;

    fn index(&self) -> usize;

    fn set_index(&mut self, index: usize);
}

/// Shared entry point for the per-kind decoders: rejects short spans before
/// any field is read.
fn record_reader<R: Record>(bytes: &[u8]) -> Result<LittleEndianReader<Cursor<&[u8]>>, CoreError> {
    if bytes.len() < R::WIDTH {
        return Err(CoreError::decode(format!(
            "expected {} bytes for {} record, got {}",
            R::WIDTH,
            R::KIND,
            bytes.len()
        )));
    }
    Ok(LittleEndianReader::new(Cursor::new(&bytes[..R::WIDTH])))
}

fn map_read_err<R: Record>(index: usize) -> impl FnOnce(io::Error) -> CoreError {
    move |e| CoreError::decode(format!("{} record {index}: {e}", R::KIND))
}

fn push_i32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_le_bytes());
}

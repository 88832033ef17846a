mod engine;
mod error;
mod item_catalog;
mod types;
pub mod well_known_items;

pub use engine::{Engine, Session, format_play_time, parse_play_time};
pub use error::{CoreError, CoreErrorCode};
pub use item_catalog::{DEFAULT_LANGUAGE, ItemCatalog, ItemKind, UNKNOWN_NAME};
pub use types::{ChipEntry, InventoryEntry, Snapshot, WeaponEntry};

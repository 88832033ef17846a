//! Reading and writing NieR:Automata save slots.
//!
//! Saves come in two physical layouts, PC and console. Everything is parsed
//! from, and patched back into, the PC layout; console images are converted
//! on the way in and out by [`platform`].

pub mod core_api;
pub mod experience;
pub mod inventory;
pub mod layout;
pub mod platform;
mod reader;
pub mod record;
pub mod save;
pub mod status;

pub use inventory::SlotCollection;
pub use platform::Platform;
pub use save::SaveFile;

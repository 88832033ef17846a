//! Conversion between the console and PC physical save layouts.
//!
//! The PC image is the console image with 12 zero bytes prepended, the
//! 16-byte block at [`DUPLICATION_OFFSET`] stored twice, and zero padding up
//! to [`PC_SAVE_SIZE`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core_api::CoreError;
use crate::layout::{
    CONSOLE_HEADER_SIZE, CONSOLE_SAVE_SIZE, DUPLICATION_LENGTH, DUPLICATION_OFFSET, PC_SAVE_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    Pc,
    Console,
}

impl Platform {
    pub fn save_len(self) -> usize {
        match self {
            Self::Pc => PC_SAVE_SIZE,
            Self::Console => CONSOLE_SAVE_SIZE,
        }
    }

    /// Identify a physical format by exact image length.
    pub fn detect(len: usize) -> Option<Self> {
        match len {
            PC_SAVE_SIZE => Some(Self::Pc),
            CONSOLE_SAVE_SIZE => Some(Self::Console),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Console => "console",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "pc" | "steam" => Ok(Self::Pc),
            "console" | "ps4" => Ok(Self::Console),
            _ => Err(format!(
                "invalid platform '{value}', expected one of: pc, console"
            )),
        }
    }
}

pub fn console_to_pc(console: &[u8]) -> Result<Vec<u8>, CoreError> {
    if console.len() != CONSOLE_SAVE_SIZE {
        let hint = if console.len() == PC_SAVE_SIZE {
            "; input is already PC-sized, dispatch on the detected platform instead"
        } else {
            ""
        };
        return Err(CoreError::format(format!(
            "console save must be {CONSOLE_SAVE_SIZE:#x} bytes, got {:#x}{hint}",
            console.len()
        )));
    }
    log::debug!("console_to_pc: input size={:#x}", console.len());

    let mut data = Vec::with_capacity(PC_SAVE_SIZE);
    data.resize(CONSOLE_HEADER_SIZE, 0);
    data.extend_from_slice(console);

    let dup_end = DUPLICATION_OFFSET + DUPLICATION_LENGTH;
    if data.len() < dup_end {
        return Err(CoreError::format(format!(
            "insufficient data for duplication at {DUPLICATION_OFFSET:#x}: need {dup_end:#x}, got {:#x}",
            data.len()
        )));
    }
    let tail = data.split_off(DUPLICATION_OFFSET);
    data.extend_from_slice(&tail[..DUPLICATION_LENGTH]);
    data.extend_from_slice(&tail);
    log::debug!(
        "duplicated {DUPLICATION_LENGTH}-byte block at {DUPLICATION_OFFSET:#x}; size={:#x}",
        data.len()
    );

    // Pads with zeros, or trims if the spliced image overshoots.
    data.resize(PC_SAVE_SIZE, 0);

    log::info!("console_to_pc: completed (output size={:#x})", data.len());
    Ok(data)
}

pub fn pc_to_console(pc: &[u8]) -> Result<Vec<u8>, CoreError> {
    if pc.len() != PC_SAVE_SIZE {
        return Err(CoreError::format(format!(
            "PC save must be {PC_SAVE_SIZE:#x} bytes, got {:#x}",
            pc.len()
        )));
    }
    log::debug!("pc_to_console: input size={:#x}", pc.len());

    let mut data = pc[CONSOLE_HEADER_SIZE..].to_vec();

    let dup_start = DUPLICATION_OFFSET - CONSOLE_HEADER_SIZE;
    let dup_end = dup_start + DUPLICATION_LENGTH;
    if data.len() < dup_end {
        return Err(CoreError::format(format!(
            "insufficient data to undo duplication: need {dup_end:#x}, got {:#x}",
            data.len()
        )));
    }
    data.drain(dup_start..dup_end);

    if data.len() < CONSOLE_SAVE_SIZE {
        return Err(CoreError::format(format!(
            "data too short after reversion: {:#x} bytes, expected {CONSOLE_SAVE_SIZE:#x}",
            data.len()
        )));
    }
    data.truncate(CONSOLE_SAVE_SIZE);

    log::info!("pc_to_console: completed (output size={:#x})", data.len());
    Ok(data)
}

/// Convert an image of either format into `target`, detecting the source
/// format by exact length.
pub fn convert(bytes: &[u8], target: Platform) -> Result<Vec<u8>, CoreError> {
    let source = Platform::detect(bytes.len()).ok_or_else(|| {
        CoreError::format(format!("unsupported save size: {:#x}", bytes.len()))
    })?;

    match (source, target) {
        (Platform::Console, Platform::Pc) => console_to_pc(bytes),
        (Platform::Pc, Platform::Console) => pc_to_console(bytes),
        _ => Ok(bytes.to_vec()),
    }
}

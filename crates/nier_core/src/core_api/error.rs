use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorCode {
    Io,
    /// Image length or span bounds do not match a known physical layout.
    Format,
    /// A fixed-width read came up short, or a text field is not valid UTF-16.
    Decode,
    Range,
    InvalidInput,
    InventoryFull,
    NotLoaded,
    Translation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreError {
    pub code: CoreErrorCode,
    pub message: String,
}

impl CoreError {
    pub fn new(code: CoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::Format, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::Decode, message)
    }

    pub fn range(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::Range, message)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(CoreErrorCode::InvalidInput, message)
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for CoreError {}

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreErrorCode};
use super::well_known_items::{all_codes, code_for_id};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const UNKNOWN_NAME: &str = "UNKNOWN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Item,
    Weapon,
    Chip,
}

impl ItemKind {
    fn code_prefixes(self) -> &'static [&'static str] {
        match self {
            Self::Item => &["item_", "fish_"],
            Self::Weapon => &["weapon_"],
            Self::Chip => &["skill_psv_", "capacity_"],
        }
    }
}

/// Display-name lookup for numeric ids.
///
/// A catalog is an explicit value passed to whatever renders names; there
/// is no process-wide current language. Translation files map either
/// `"<id>:<code>"` or `"<id>"` to a display string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    language: String,
    translations: BTreeMap<String, String>,
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ItemCatalog {
    /// Code strings only, no translations.
    pub fn builtin() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            translations: BTreeMap::new(),
        }
    }

    /// Load `<dir>/<language>.json`. A missing file yields an empty
    /// translation table.
    pub fn load_from_dir(dir: &Path, language: &str) -> Result<Self, CoreError> {
        let path = dir.join(format!("{language}.json"));
        if !path.exists() {
            log::warn!(
                "translation file not found for '{language}': {}",
                path.display()
            );
            return Ok(Self {
                language: language.to_string(),
                translations: BTreeMap::new(),
            });
        }

        log::debug!("loading translations from {}", path.display());
        let text = fs::read_to_string(&path).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("failed to read {}: {e}", path.display()),
            )
        })?;
        let catalog = Self::from_json_str(language, &text)?;
        log::info!(
            "loaded {} translations for '{language}'",
            catalog.translations.len()
        );
        Ok(catalog)
    }

    pub fn from_json_str(language: &str, json: &str) -> Result<Self, CoreError> {
        let translations: BTreeMap<String, String> = serde_json::from_str(json).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Translation,
                format!("error loading translations for '{language}': {e}"),
            )
        })?;
        Ok(Self {
            language: language.to_string(),
            translations,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn code(&self, id: i32) -> Option<&'static str> {
        code_for_id(id)
    }

    /// Translated name, else the code string, else [`UNKNOWN_NAME`].
    pub fn name(&self, id: i32) -> String {
        let code = code_for_id(id).unwrap_or(UNKNOWN_NAME);
        self.translations
            .get(&format!("{id}:{code}"))
            .or_else(|| self.translations.get(&id.to_string()))
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    /// Known ids whose code marks them as `kind`, ascending.
    pub fn choices(&self, kind: ItemKind) -> Vec<(i32, String)> {
        let prefixes = kind.code_prefixes();
        all_codes()
            .filter(|(_, code)| prefixes.iter().any(|prefix| code.starts_with(prefix)))
            .map(|(id, _)| (id, self.name(id)))
            .collect()
    }

    /// Translation template covering every built-in id, keyed `"<id>:<code>"`
    /// with the code as the placeholder value.
    pub fn skeleton() -> BTreeMap<String, String> {
        all_codes()
            .map(|(id, code)| (format!("{id}:{code}"), code.to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

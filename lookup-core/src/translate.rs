//! Localized text lookup.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{CatalogError, Result};

#[derive(Debug, Default, Deserialize)]
struct TranslationFile {
    #[serde(default)]
    strings: HashMap<String, String>,
}

/// Maps translation keys to localized text.
///
/// Unknown keys translate to themselves, so untranslated category names and
/// messages still render readable text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translator {
    strings: Arc<HashMap<String, String>>,
}

impl Translator {
    pub fn new(strings: HashMap<String, String>) -> Self {
        Self {
            strings: Arc::new(strings),
        }
    }

    /// Parse a `[strings]` table.
    pub fn from_toml_str(path: &Path, content: &str) -> Result<Self> {
        let file = toml::from_str::<TranslationFile>(content).map_err(|source| CatalogError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(file.strings))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let translator = Self::from_toml_str(path, &content)?;
        log::debug!("Loaded {} translations from {}", translator.len(), path.display());
        Ok(translator)
    }

    pub fn translate(&self, key: &str) -> String {
        self.strings.get(key).cloned().unwrap_or_else(|| key.to_string())
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

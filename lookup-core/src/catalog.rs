//! Loading category lists from TOML or JSON files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{CatalogError, Result};

/// An ordered list of categories as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// On-disk catalog encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from the file extension. Anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn parse(path: &Path, content: &str, format: CatalogFormat) -> Result<Self> {
        match format {
            CatalogFormat::Toml => toml::from_str(content).map_err(|source| CatalogError::Toml {
                path: path.to_path_buf(),
                source,
            }),
            CatalogFormat::Json => serde_json::from_str(content).map_err(|source| CatalogError::Json {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(path, &content, CatalogFormat::from_path(path))?;
        log::info!(
            "Loaded {} categories ({} items) from {}",
            catalog.categories.len(),
            catalog.item_count(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(Category::item_count).sum()
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.category_id == category_id)
    }
}

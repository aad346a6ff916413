//! Media items fed into a montage.
//!
//! Items arrive as a JSON array of `{ "id": ..., "url": ... }` objects. The
//! id is the rendering key for a cell, so it must be non-empty and unique
//! within one list.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("item {index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate item id: {0}")]
    DuplicateId(String),
}

/// A single photo in the montage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Stable unique key, used as `data-key` on the rendered cell.
    pub id: String,
    /// Source path on the CDN (e.g. `/u/alice/crag.jpg`).
    pub url: String,
}

impl MediaItem {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// Check that every id is non-empty and unique.
pub fn validate_items(items: &[MediaItem]) -> Result<(), InputError> {
    let mut seen = HashSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if item.id.is_empty() {
            return Err(InputError::EmptyId { index });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(InputError::DuplicateId(item.id.clone()));
        }
    }
    Ok(())
}

/// Parse and validate an item list from a JSON string.
pub fn parse_items(json: &str) -> Result<Vec<MediaItem>, InputError> {
    let items: Vec<MediaItem> = serde_json::from_str(json)?;
    validate_items(&items)?;
    Ok(items)
}

/// Read, parse and validate an item list from a JSON file.
pub fn load_items(path: &Path) -> Result<Vec<MediaItem>, InputError> {
    let content = fs::read_to_string(path)?;
    parse_items(&content)
}

//! Durable preference store for the selected language.
//!
//! The store holds a single string value: the language code last chosen by
//! the user. It is read once at bootstrap and written on every language
//! change. Absence is a valid state and triggers locale detection instead.

use crate::error::I18nError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A durable single-value store for the language preference.
///
/// Implementations must treat a missing or unreadable value as `None`
/// rather than an error: bootstrap has a detection path for that case.
pub trait PreferenceStore: Send {
    /// Read the persisted language code, if any.
    fn load(&self) -> Option<String>;

    /// Persist the language code, replacing any previous value.
    fn save(&mut self, code: &str) -> Result<(), I18nError>;
}

/// File-backed preference store: one file holding the raw language code.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let code = contents.trim();
                if code.is_empty() {
                    None
                } else {
                    Some(code.to_string())
                }
            }
            Err(e) => {
                debug!("No stored language preference at {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn save(&mut self, code: &str) -> Result<(), I18nError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(I18nError::StoreWrite)?;
        }
        fs::write(&self.path, code).map_err(I18nError::StoreWrite)
    }
}

/// In-memory preference store for tests and hosts without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Option<String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a persisted code.
    pub fn with_value(code: &str) -> Self {
        Self {
            value: Some(code.to_string()),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, code: &str) -> Result<(), I18nError> {
        self.value = Some(code.to_string());
        Ok(())
    }
}

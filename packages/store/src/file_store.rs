//! # Filesystem-backed preference store
//!
//! [`FileStore`] is a [`PreferenceStore`] implementation that persists
//! preferences as a flat TOML table. It is used on desktop to retain the
//! locale, theme and access token across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── preferences.toml   # locale = "en"\ntheme = "dark"\naccessToken = "..."
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/notes-app/` |
//! | Linux | `~/.local/share/notes-app/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\notes-app\` |
//!
//! The file is re-read on every `get` so that two windows sharing a data
//! directory observe each other's writes.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::prefs::PreferenceStore;

const FILE_NAME: &str = "preferences.toml";

/// Filesystem-backed PreferenceStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Path of the backing TOML file.
    pub fn path(&self) -> PathBuf {
        self.base.join(FILE_NAME)
    }

    fn load(&self) -> BTreeMap<String, String> {
        let path = self.path();
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                return BTreeMap::new();
            }
        };
        match toml::from_str(&content) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("Ignoring malformed {}: {}", path.display(), e);
                BTreeMap::new()
            }
        }
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), String> {
        let content = toml::to_string(values).map_err(|e| e.to_string())?;
        std::fs::create_dir_all(&self.base).map_err(|e| e.to_string())?;
        std::fs::write(self.path(), content).map_err(|e| e.to_string())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.load();
        values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.save(&values) {
            tracing::warn!("Failed to persist preference {key}: {e}");
        }
    }
}

//! Shared service constructors for all platforms.
//!
//! Picks the [`store::PreferenceStore`] backend per target:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Desktop** (native): `preferences.toml` via [`store::FileStore`]
//! - **WASM without `web`**: in-memory, nothing survives a reload

use api::NotesApi;
use store::ClientConfig;

use crate::theme::DocumentTheme;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

pub type Gateway = NotesApi<PlatformStore>;

#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "notes-app";

/// Everything the shell talks to, built once at startup and shared via context.
#[derive(Clone, Debug)]
pub struct Services {
    pub store: PlatformStore,
    pub gateway: Gateway,
    pub theme: DocumentTheme,
}

impl Services {
    pub fn load() -> Self {
        Self::from_config(load_config())
    }

    pub fn from_config(config: ClientConfig) -> Self {
        let store = make_store(&config);
        let gateway = NotesApi::new(&config, store.clone());
        tracing::info!("Using notes API at {}", config.api.base_url);
        Self {
            store,
            gateway,
            theme: DocumentTheme,
        }
    }
}

/// Read `<config_dir>/notes-app/config.toml`, falling back to defaults.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> ClientConfig {
    let Some(path) = dirs::config_dir().map(|d| d.join(APP_DIR).join(ClientConfig::filename()))
    else {
        return ClientConfig::default();
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => ClientConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
            ClientConfig::default()
        }),
        Err(_) => ClientConfig::default(),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_config() -> ClientConfig {
    ClientConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn make_store(config: &ClientConfig) -> PlatformStore {
    let base = config.storage.dir.clone().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(APP_DIR)
    });
    store::FileStore::new(base)
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn make_store(_config: &ClientConfig) -> PlatformStore {
    store::LocalStorage::new()
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub fn make_store(_config: &ClientConfig) -> PlatformStore {
    store::MemoryStore::new()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use store::PreferenceStore;

    #[test]
    fn test_storage_dir_override() {
        let dir = std::env::temp_dir().join(format!("notes_app_platform_{}", std::process::id()));
        let mut config = ClientConfig::default();
        config.storage.dir = Some(dir.clone());

        let services = Services::from_config(config);
        services.gateway.put_access_token("tok");
        assert_eq!(services.store.path(), dir.join("preferences.toml"));
        assert_eq!(services.store.get("accessToken").as_deref(), Some("tok"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}

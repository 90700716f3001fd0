//! `localStorage`-backed settings store implementation.

use platform_host::SettingsStore;

#[derive(Debug, Clone, Copy, Default)]
/// Browser settings store backed by `window.localStorage`.
///
/// On non-WASM targets reads return `None` and writes succeed without persisting anything.
pub struct WebSettingsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl SettingsStore for WebSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage().ok()?.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, raw: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
            Ok(())
        }
    }
}

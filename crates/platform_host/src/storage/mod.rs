//! Settings persistence contracts and lightweight adapters.

mod settings;

pub use settings::{get_json_or, set_json, try_get_json, MemorySettingsStore, SettingsStore};

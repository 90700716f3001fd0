//! Browser settings persistence adapters.

pub mod local_settings;

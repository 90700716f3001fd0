//! Favorite-server registry and notification gateway for the server-list UI.
//!
//! The crate only talks to the host through [`platform_host`] contracts: favorites persist via an
//! injected [`platform_host::SettingsStore`], notifications go through an injected
//! [`platform_host::NotificationPlatform`]. Browser wiring comes from `platform_host_web`.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use platform_host::MemorySettingsStore;
//! use server_registry::{FavoritesRegistry, ServerIdentifier};
//!
//! let favorites = FavoritesRegistry::new(Rc::new(MemorySettingsStore::default()));
//! let server = ServerIdentifier::new("bzflag.example.org", 5154);
//!
//! favorites.toggle_favorite(Some(&server)).expect("in-memory write");
//! assert!(favorites.is_favorite(Some(&server)));
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod favorites;
pub mod format;
pub mod notify;
pub mod server;

use platform_host::HostServices;

pub use config::{ConfigError, ListingConfig, NotificationConfig, CLOSE_ACTION, JOIN_ACTION};
pub use favorites::{FavoritesRegistry, FAVORITE_SERVERS_KEY};
pub use format::{auto_plural, favorite_toggle_label, verbose_game_style, yes_no};
pub use notify::NotificationGateway;
pub use server::{
    server_play_route, server_route, ServerConfiguration, ServerIdentifier,
    ServerIdentifierError, ServerSummary,
};

/// The registry and gateway wired to one host service bundle.
pub struct CoreServices {
    /// Favorite-server registry.
    pub favorites: FavoritesRegistry,
    /// Notification gateway.
    pub notifications: NotificationGateway,
}

impl CoreServices {
    /// Builds the core over `host`'s settings store and notification platform.
    pub fn from_host(host: &HostServices, config: NotificationConfig) -> Self {
        Self {
            favorites: FavoritesRegistry::new(host.settings.clone()),
            notifications: NotificationGateway::new(host.notifications.clone(), config),
        }
    }
}

//! Notification permission and capability models.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Platform-owned notification permission state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPermission {
    /// The user has not decided yet; a prompt may be requested.
    #[default]
    Default,
    /// Notifications may be shown.
    Granted,
    /// The user blocked notifications; the platform will not prompt again.
    Denied,
}

impl NotificationPermission {
    /// Returns the platform token (`"default"`, `"granted"`, `"denied"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Granted => "granted",
            Self::Denied => "denied",
        }
    }

    /// Returns whether delivery is allowed.
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl fmt::Display for NotificationPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationPermission {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "default" => Ok(Self::Default),
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            other => Err(format!("unknown notification permission: {other}")),
        }
    }
}

/// Snapshot of the platform probes required for background notification delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationCapabilities {
    /// The notification API (`window.Notification`) is present.
    pub notification_api: bool,
    /// A service-worker container (`navigator.serviceWorker`) is present.
    pub service_worker: bool,
    /// The push manager (`window.PushManager`) is present.
    pub push_manager: bool,
}

impl NotificationCapabilities {
    /// Capabilities of a platform where every probe succeeds.
    pub const fn full() -> Self {
        Self {
            notification_api: true,
            service_worker: true,
            push_manager: true,
        }
    }

    /// Capabilities of a platform where every probe fails.
    pub const fn none() -> Self {
        Self {
            notification_api: false,
            service_worker: false,
            push_manager: false,
        }
    }

    /// Returns whether background notification delivery is possible at all.
    pub const fn is_supported(self) -> bool {
        self.notification_api && self.service_worker && self.push_manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_tokens_parse_and_render() {
        for permission in [
            NotificationPermission::Default,
            NotificationPermission::Granted,
            NotificationPermission::Denied,
        ] {
            assert_eq!(permission.as_str().parse::<NotificationPermission>(), Ok(permission));
            assert_eq!(
                serde_json::to_string(&permission).expect("serialize"),
                format!("\"{permission}\"")
            );
        }
        assert!("prompt".parse::<NotificationPermission>().is_err());
    }

    #[test]
    fn any_missing_probe_makes_delivery_unsupported() {
        assert!(NotificationCapabilities::full().is_supported());
        assert!(!NotificationCapabilities::none().is_supported());
        assert!(!NotificationCapabilities {
            push_manager: false,
            ..NotificationCapabilities::full()
        }
        .is_supported());
    }
}

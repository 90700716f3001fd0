//! Best-effort desktop notifications over an injected [`NotificationPlatform`].
//!
//! [`NotificationGateway::notify`] walks the platform permission state machine:
//!
//! - unsupported platform: log and return;
//! - `denied`: log and return without prompting (the platform refuses re-prompts);
//! - `default`: prompt once, deliver only if the user grants;
//! - `granted`: deliver.
//!
//! None of these outcomes reach the caller. At most one permission prompt is outstanding per
//! gateway; a `notify` that would prompt while another prompt is pending is dropped.

use std::{cell::Cell, rc::Rc};

use leptos::logging;
use platform_host::{
    NotificationAction, NotificationClickHandler, NotificationFuture, NotificationPermission,
    NotificationPlatform, NotificationRequest,
};

use crate::config::{NotificationConfig, CLOSE_ACTION, JOIN_ACTION};

/// Clears the in-flight prompt flag when the prompting future completes or is dropped.
struct PromptGuard<'a> {
    in_flight: &'a Cell<bool>,
}

impl<'a> PromptGuard<'a> {
    fn acquire(in_flight: &'a Cell<bool>) -> Option<Self> {
        if in_flight.replace(true) {
            return None;
        }
        Some(Self { in_flight })
    }
}

impl Drop for PromptGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}

/// Unified "notify" operation with safe no-ops when notifications are unsupported or denied.
pub struct NotificationGateway {
    platform: Rc<dyn NotificationPlatform>,
    config: NotificationConfig,
    prompt_in_flight: Cell<bool>,
}

impl NotificationGateway {
    /// Creates a gateway delivering through `platform` with `config` presentation defaults.
    pub fn new(platform: Rc<dyn NotificationPlatform>, config: NotificationConfig) -> Self {
        Self {
            platform,
            config,
            prompt_in_flight: Cell::new(false),
        }
    }

    /// Returns whether a permission prompt started by this gateway is still pending.
    pub fn is_prompt_pending(&self) -> bool {
        self.prompt_in_flight.get()
    }

    /// Builds the payload for a notification with the configured icon, badge, vibration, and
    /// the `join`/`close` actions.
    pub fn build_request(&self, title: &str, body: &str, tag: &str) -> NotificationRequest {
        NotificationRequest {
            title: title.to_string(),
            body: body.to_string(),
            tag: tag.to_string(),
            icon: self.config.icon.clone(),
            vibrate: self.config.vibrate.clone(),
            badge: self.config.badge.clone(),
            actions: vec![
                NotificationAction::new(JOIN_ACTION, "Join"),
                NotificationAction::new(CLOSE_ACTION, "Close"),
            ],
        }
    }

    /// Shows a notification if the platform supports it and the user allows it.
    ///
    /// The returned future resolves once delivery is scheduled or the attempt is abandoned; it
    /// stays pending while a permission prompt waits for the user. Dropping it cancels the
    /// attempt and frees the prompt slot. Notifications sharing `tag` are coalesced by the
    /// platform.
    pub fn notify<'a>(
        &'a self,
        title: &'a str,
        body: &'a str,
        tag: &'a str,
        on_click: Option<NotificationClickHandler>,
    ) -> NotificationFuture<'a, ()> {
        Box::pin(async move {
            if !self.platform.capabilities().is_supported() {
                logging::log!("Browser does not support notifications.");
                return;
            }

            match self.platform.permission() {
                NotificationPermission::Granted => {}
                NotificationPermission::Denied => {
                    logging::log!("User blocked notifications.");
                    return;
                }
                NotificationPermission::Default => {
                    let Some(_prompt) = PromptGuard::acquire(&self.prompt_in_flight) else {
                        logging::log!(
                            "notification permission prompt already pending; dropping `{tag}`"
                        );
                        return;
                    };
                    if !self.platform.request_permission().await.is_granted() {
                        logging::log!("User blocked notifications.");
                        return;
                    }
                }
            }

            let request = self.build_request(title, body, tag);
            if let Err(err) = self.platform.show_notification(&request, on_click) {
                logging::warn!("notification `{tag}` delivery failed: {err}");
            }
        })
    }

    /// Human-readable permission status for settings screens.
    ///
    /// `"not supported"` without a notification API, `"not enabled"` while undecided, otherwise
    /// the permission token.
    pub fn current_permission_status(&self) -> &'static str {
        if !self.platform.capabilities().notification_api {
            return "not supported";
        }
        match self.platform.permission() {
            NotificationPermission::Default => "not enabled",
            permission => permission.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{NotificationCapabilities, RecordingNotificationPlatform};
    use pretty_assertions::assert_eq;

    use super::*;

    fn gateway(platform: &Rc<RecordingNotificationPlatform>) -> NotificationGateway {
        NotificationGateway::new(platform.clone(), NotificationConfig::default())
    }

    #[test]
    fn build_request_applies_config_and_fixed_actions() {
        let platform = Rc::new(RecordingNotificationPlatform::default());
        let request = gateway(&platform).build_request("Game Started", "Server X is up", "x");

        assert_eq!(
            request,
            NotificationRequest {
                title: "Game Started".to_string(),
                body: "Server X is up".to_string(),
                tag: "x".to_string(),
                icon: "/images/icon/512.png".to_string(),
                vibrate: vec![200, 100, 200],
                badge: "https://spyna.it/icons/android-icon-192x192.png".to_string(),
                actions: vec![
                    NotificationAction::new("join", "Join"),
                    NotificationAction::new("close", "Close"),
                ],
            }
        );
    }

    #[test]
    fn granted_permission_delivers_without_prompting() {
        let platform = Rc::new(RecordingNotificationPlatform::new(
            NotificationCapabilities::full(),
            NotificationPermission::Granted,
        ));
        block_on(gateway(&platform).notify("t", "b", "tag", None));

        assert_eq!(platform.permission_requests(), 0);
        assert_eq!(platform.delivered().len(), 1);
    }

    #[test]
    fn prompt_declined_does_not_deliver_or_retry() {
        let platform = Rc::new(RecordingNotificationPlatform::default());
        platform.set_prompt_outcome(NotificationPermission::Denied);
        let gateway = gateway(&platform);

        block_on(gateway.notify("t", "b", "tag", None));
        block_on(gateway.notify("t", "b", "tag", None));

        assert_eq!(platform.permission_requests(), 1);
        assert!(platform.delivered().is_empty());
        assert!(!gateway.is_prompt_pending());
    }

    #[test]
    fn prompt_left_undecided_is_not_delivered() {
        let platform = Rc::new(RecordingNotificationPlatform::default());
        platform.set_prompt_outcome(NotificationPermission::Default);

        block_on(gateway(&platform).notify("t", "b", "tag", None));
        assert_eq!(platform.permission_requests(), 1);
        assert!(platform.delivered().is_empty());
    }

    #[test]
    fn delivery_failure_is_absorbed() {
        let platform = Rc::new(RecordingNotificationPlatform::new(
            NotificationCapabilities::full(),
            NotificationPermission::Granted,
        ));
        platform.fail_deliveries("service worker unavailable");

        block_on(gateway(&platform).notify("t", "b", "tag", None));
        assert!(platform.delivered().is_empty());
    }

    #[test]
    fn status_is_not_supported_only_without_notification_api() {
        let platform = Rc::new(RecordingNotificationPlatform::new(
            NotificationCapabilities {
                notification_api: true,
                service_worker: false,
                push_manager: false,
            },
            NotificationPermission::Granted,
        ));
        assert_eq!(gateway(&platform).current_permission_status(), "granted");
    }
}

//! Routing of service-worker click messages back to page-side handlers.
//!
//! Notifications shown through a service-worker registration report clicks inside the worker.
//! The worker forwards them to open pages as
//! `{ "type": "notificationclick", "tag": "...", "action": "..." }` messages, which are matched
//! here against the handler registered for the notification's tag.

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use platform_host::NotificationClickHandler;
use serde::Deserialize;

/// Message `type` posted by the service worker for notification clicks.
pub const NOTIFICATION_CLICK_MESSAGE: &str = "notificationclick";

/// Click message posted by the service worker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationClickMessage {
    /// Message discriminator; only [`NOTIFICATION_CLICK_MESSAGE`] is routed.
    #[serde(rename = "type")]
    pub kind: String,
    /// Tag of the clicked notification.
    pub tag: String,
    /// Clicked action identifier; empty for a click on the notification body.
    #[serde(default)]
    pub action: String,
}

/// Tag-keyed click handlers; a newer notification with the same tag replaces the older handler,
/// matching how the platform replaces the notification itself. A newer notification without a
/// handler clears the route.
#[derive(Clone, Default)]
pub struct ClickRoutes {
    handlers: Rc<RefCell<HashMap<String, NotificationClickHandler>>>,
}

impl fmt::Debug for ClickRoutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers = self.handlers.borrow();
        let mut tags: Vec<&String> = handlers.keys().collect();
        tags.sort();
        f.debug_struct("ClickRoutes").field("tags", &tags).finish()
    }
}

impl ClickRoutes {
    /// Registers `handler` for notifications tagged `tag`.
    pub fn register(&self, tag: impl Into<String>, handler: NotificationClickHandler) {
        self.handlers.borrow_mut().insert(tag.into(), handler);
    }

    /// Points `tag` at `handler` for a freshly shown notification; `None` clears any handler left
    /// by an older notification with the same tag.
    pub fn route(&self, tag: &str, handler: Option<NotificationClickHandler>) {
        match handler {
            Some(handler) => self.register(tag, handler),
            None => {
                self.handlers.borrow_mut().remove(tag);
            }
        }
    }

    /// Invokes the handler for `message`, returning whether one ran.
    pub fn dispatch(&self, message: &NotificationClickMessage) -> bool {
        if message.kind != NOTIFICATION_CLICK_MESSAGE {
            return false;
        }
        // Clone out of the map so a handler may register new routes.
        let handler = self.handlers.borrow().get(&message.tag).cloned();
        match handler {
            Some(handler) => {
                handler(&message.action);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(raw: &str) -> NotificationClickMessage {
        serde_json::from_str(raw).expect("click message")
    }

    #[test]
    fn dispatch_runs_handler_registered_for_tag() {
        let routes = ClickRoutes::default();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = seen.clone();
        routes.register(
            "server-x",
            Rc::new(move |action: &str| sink.borrow_mut().push(action.to_string())),
        );

        assert!(routes.dispatch(&message(
            r#"{"type":"notificationclick","tag":"server-x","action":"join"}"#
        )));
        assert!(routes.dispatch(&message(r#"{"type":"notificationclick","tag":"server-x"}"#)));
        assert!(!routes.dispatch(&message(
            r#"{"type":"notificationclick","tag":"server-y","action":"join"}"#
        )));
        assert!(!routes.dispatch(&message(
            r#"{"type":"push","tag":"server-x","action":"join"}"#
        )));

        assert_eq!(*seen.borrow(), vec!["join".to_string(), String::new()]);
    }

    #[test]
    fn newer_registration_replaces_handler_for_same_tag() {
        let routes = ClickRoutes::default();
        let hits = Rc::new(RefCell::new(Vec::<&'static str>::new()));
        let first = hits.clone();
        let second = hits.clone();
        routes.register("t", Rc::new(move |_: &str| first.borrow_mut().push("first")));
        routes.register("t", Rc::new(move |_: &str| second.borrow_mut().push("second")));

        routes.dispatch(&message(r#"{"type":"notificationclick","tag":"t","action":"close"}"#));
        assert_eq!(*hits.borrow(), vec!["second"]);
        assert_eq!(format!("{routes:?}"), r#"ClickRoutes { tags: ["t"] }"#);
    }

    #[test]
    fn notification_without_handler_clears_stale_route_for_tag() {
        let routes = ClickRoutes::default();
        let hits = Rc::new(RefCell::new(0_u32));
        let sink = hits.clone();
        let counting: NotificationClickHandler = Rc::new(move |_: &str| *sink.borrow_mut() += 1);
        let ignoring: NotificationClickHandler = Rc::new(|_: &str| {});
        routes.route("t", Some(counting));
        routes.route("other", Some(ignoring));

        routes.route("t", None);
        routes.route("missing", None);

        assert!(!routes.dispatch(&message(r#"{"type":"notificationclick","tag":"t"}"#)));
        assert_eq!(*hits.borrow(), 0);
        assert_eq!(format!("{routes:?}"), r#"ClickRoutes { tags: ["other"] }"#);
    }
}

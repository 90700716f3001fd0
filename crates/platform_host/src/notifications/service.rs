//! Notification platform contract, unsupported adapter, and recording adapter.

use std::{
    cell::{Cell, RefCell},
    future::Future,
    pin::Pin,
};

use super::{
    NotificationCapabilities, NotificationClickHandler, NotificationPermission,
    NotificationRequest,
};

/// Object-safe boxed future used by [`NotificationPlatform`].
pub type NotificationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host capability wrapper over the platform notification permission state machine and
/// delivery channel.
pub trait NotificationPlatform {
    /// Probes the platform for the APIs background delivery needs.
    fn capabilities(&self) -> NotificationCapabilities;

    /// Reads the current permission state.
    fn permission(&self) -> NotificationPermission;

    /// Asks the user for permission and resolves with their decision.
    ///
    /// The future may stay pending for as long as the user ignores the prompt.
    fn request_permission<'a>(&'a self) -> NotificationFuture<'a, NotificationPermission>;

    /// Schedules delivery of `request` on the background delivery channel.
    ///
    /// Returns once delivery is scheduled; display happens asynchronously and its outcome is not
    /// reported back.
    ///
    /// # Errors
    ///
    /// Returns an error when delivery cannot be scheduled.
    fn show_notification(
        &self,
        request: &NotificationRequest,
        on_click: Option<NotificationClickHandler>,
    ) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Notification platform for targets without any notification support.
pub struct UnsupportedNotificationPlatform;

impl NotificationPlatform for UnsupportedNotificationPlatform {
    fn capabilities(&self) -> NotificationCapabilities {
        NotificationCapabilities::none()
    }

    fn permission(&self) -> NotificationPermission {
        NotificationPermission::Default
    }

    fn request_permission<'a>(&'a self) -> NotificationFuture<'a, NotificationPermission> {
        Box::pin(async { NotificationPermission::Denied })
    }

    fn show_notification(
        &self,
        _request: &NotificationRequest,
        _on_click: Option<NotificationClickHandler>,
    ) -> Result<(), String> {
        Err("notifications are not supported on this host".to_string())
    }
}

/// In-memory notification platform that records every interaction.
///
/// Permission prompts resolve immediately to the configured outcome, which also becomes the new
/// permission state, mirroring how browsers persist the user's decision.
pub struct RecordingNotificationPlatform {
    capabilities: Cell<NotificationCapabilities>,
    permission: Cell<NotificationPermission>,
    prompt_outcome: Cell<NotificationPermission>,
    permission_requests: Cell<usize>,
    delivery_error: RefCell<Option<String>>,
    delivered: RefCell<Vec<NotificationRequest>>,
    click_handlers: RefCell<Vec<(String, NotificationClickHandler)>>,
}

impl Default for RecordingNotificationPlatform {
    fn default() -> Self {
        Self::new(
            NotificationCapabilities::full(),
            NotificationPermission::Default,
        )
    }
}

impl RecordingNotificationPlatform {
    /// Creates a platform with fixed probes and an initial permission.
    ///
    /// Prompts resolve to [`NotificationPermission::Granted`] unless changed with
    /// [`Self::set_prompt_outcome`].
    pub fn new(capabilities: NotificationCapabilities, permission: NotificationPermission) -> Self {
        Self {
            capabilities: Cell::new(capabilities),
            permission: Cell::new(permission),
            prompt_outcome: Cell::new(NotificationPermission::Granted),
            permission_requests: Cell::new(0),
            delivery_error: RefCell::new(None),
            delivered: RefCell::new(Vec::new()),
            click_handlers: RefCell::new(Vec::new()),
        }
    }

    /// Sets the decision the next permission prompts resolve to.
    pub fn set_prompt_outcome(&self, outcome: NotificationPermission) {
        self.prompt_outcome.set(outcome);
    }

    /// Overrides the current permission state.
    pub fn set_permission(&self, permission: NotificationPermission) {
        self.permission.set(permission);
    }

    /// Makes subsequent deliveries fail to schedule with `error`.
    pub fn fail_deliveries(&self, error: impl Into<String>) {
        *self.delivery_error.borrow_mut() = Some(error.into());
    }

    /// Number of permission prompts issued so far.
    pub fn permission_requests(&self) -> usize {
        self.permission_requests.get()
    }

    /// Requests scheduled for delivery so far, oldest first.
    pub fn delivered(&self) -> Vec<NotificationRequest> {
        self.delivered.borrow().clone()
    }

    /// Simulates a click on the most recent notification carrying `tag`.
    ///
    /// Returns `false` when no handler was registered for that tag.
    pub fn click(&self, tag: &str, action: &str) -> bool {
        let handler = self
            .click_handlers
            .borrow()
            .iter()
            .rev()
            .find(|(handler_tag, _)| handler_tag == tag)
            .map(|(_, handler)| handler.clone());
        match handler {
            Some(handler) => {
                handler(action);
                true
            }
            None => false,
        }
    }
}

impl NotificationPlatform for RecordingNotificationPlatform {
    fn capabilities(&self) -> NotificationCapabilities {
        self.capabilities.get()
    }

    fn permission(&self) -> NotificationPermission {
        self.permission.get()
    }

    fn request_permission<'a>(&'a self) -> NotificationFuture<'a, NotificationPermission> {
        Box::pin(async move {
            self.permission_requests.set(self.permission_requests.get() + 1);
            let outcome = self.prompt_outcome.get();
            self.permission.set(outcome);
            outcome
        })
    }

    fn show_notification(
        &self,
        request: &NotificationRequest,
        on_click: Option<NotificationClickHandler>,
    ) -> Result<(), String> {
        if let Some(error) = self.delivery_error.borrow().clone() {
            return Err(error);
        }
        self.delivered.borrow_mut().push(request.clone());
        if let Some(handler) = on_click {
            self.click_handlers
                .borrow_mut()
                .push((request.tag.clone(), handler));
        }
        Ok(())
    }
}

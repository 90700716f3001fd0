//! Notification platform adapter backed by the Web Notifications, Service Worker, and Push APIs.
//!
//! Delivery goes through `ServiceWorkerRegistration.showNotification` once
//! `navigator.serviceWorker.ready` resolves, so notifications carry action buttons and survive
//! the page being backgrounded.

pub mod click_routing;

use std::{cell::Cell, rc::Rc};

use platform_host::{
    NotificationCapabilities, NotificationClickHandler, NotificationFuture,
    NotificationPermission, NotificationPlatform, NotificationRequest,
};

use self::click_routing::ClickRoutes;

#[derive(Debug, Clone, Default)]
/// Browser notification platform.
///
/// On non-WASM targets every probe reports unsupported.
pub struct WebNotificationPlatform {
    click_routes: ClickRoutes,
    click_listener_installed: Rc<Cell<bool>>,
}

impl WebNotificationPlatform {
    /// Returns the tag-keyed click routes fed by service-worker messages.
    pub fn click_routes(&self) -> &ClickRoutes {
        &self.click_routes
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use js_sys::Reflect;
    use leptos::logging;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    use super::click_routing::{ClickRoutes, NotificationClickMessage};
    use platform_host::NotificationPermission;

    pub(super) fn has_property(target: &JsValue, name: &str) -> bool {
        Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
    }

    pub(super) fn map_permission(
        permission: web_sys::NotificationPermission,
    ) -> NotificationPermission {
        match permission {
            web_sys::NotificationPermission::Granted => NotificationPermission::Granted,
            web_sys::NotificationPermission::Denied => NotificationPermission::Denied,
            _ => NotificationPermission::Default,
        }
    }

    pub(super) async fn request_permission() -> NotificationPermission {
        let promise = match web_sys::Notification::request_permission() {
            Ok(promise) => promise,
            Err(err) => {
                logging::warn!("notification permission request failed: {err:?}");
                return NotificationPermission::Denied;
            }
        };
        match JsFuture::from(promise).await {
            Ok(value) => value
                .as_string()
                .and_then(|token| token.parse().ok())
                .unwrap_or_default(),
            Err(err) => {
                logging::warn!("notification permission request rejected: {err:?}");
                NotificationPermission::Default
            }
        }
    }

    pub(super) fn install_click_listener(
        container: &web_sys::ServiceWorkerContainer,
        routes: ClickRoutes,
    ) -> Result<(), String> {
        let on_message = Closure::<dyn FnMut(web_sys::MessageEvent)>::wrap(Box::new(
            move |event: web_sys::MessageEvent| {
                if let Ok(message) =
                    serde_wasm_bindgen::from_value::<NotificationClickMessage>(event.data())
                {
                    routes.dispatch(&message);
                }
            },
        ));
        container
            .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
            .map_err(|err| format!("service worker message listener failed: {err:?}"))?;
        on_message.forget();
        Ok(())
    }

    pub(super) async fn show_when_ready(ready: js_sys::Promise, title: String, options: JsValue) {
        let registration = match JsFuture::from(ready).await {
            Ok(value) => value.unchecked_into::<web_sys::ServiceWorkerRegistration>(),
            Err(err) => {
                logging::warn!("service worker never became ready: {err:?}");
                return;
            }
        };
        let options = options.unchecked_into::<web_sys::NotificationOptions>();
        match registration.show_notification_with_options(&title, &options) {
            Ok(promise) => {
                if let Err(err) = JsFuture::from(promise).await {
                    logging::warn!("notification display failed: {err:?}");
                }
            }
            Err(err) => logging::warn!("notification display failed: {err:?}"),
        }
    }
}

impl NotificationPlatform for WebNotificationPlatform {
    fn capabilities(&self) -> NotificationCapabilities {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return NotificationCapabilities::none();
            };
            let navigator = window.navigator();
            NotificationCapabilities {
                notification_api: browser::has_property(window.as_ref(), "Notification"),
                service_worker: browser::has_property(navigator.as_ref(), "serviceWorker"),
                push_manager: browser::has_property(window.as_ref(), "PushManager"),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            NotificationCapabilities::none()
        }
    }

    fn permission(&self) -> NotificationPermission {
        #[cfg(target_arch = "wasm32")]
        {
            // `Notification.permission` throws when the constructor is missing.
            if !self.capabilities().notification_api {
                return NotificationPermission::Default;
            }
            browser::map_permission(web_sys::Notification::permission())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            NotificationPermission::Default
        }
    }

    fn request_permission<'a>(&'a self) -> NotificationFuture<'a, NotificationPermission> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                browser::request_permission().await
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                NotificationPermission::Denied
            }
        })
    }

    fn show_notification(
        &self,
        request: &NotificationRequest,
        on_click: Option<NotificationClickHandler>,
    ) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            let container = window.navigator().service_worker();
            let ready = container
                .ready()
                .map_err(|err| format!("service worker ready failed: {err:?}"))?;
            let options = serde_wasm_bindgen::to_value(request)
                .map_err(|err| format!("notification options serialize failed: {err}"))?;

            if on_click.is_some() && !self.click_listener_installed.get() {
                match browser::install_click_listener(&container, self.click_routes.clone()) {
                    Ok(()) => self.click_listener_installed.set(true),
                    Err(err) => leptos::logging::warn!("{err}"),
                }
            }
            self.click_routes.route(&request.tag, on_click);

            wasm_bindgen_futures::spawn_local(browser::show_when_ready(
                ready,
                request.title.clone(),
                options,
            ));
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (request, on_click, &self.click_listener_installed);
            Err("notifications require a browser host".to_string())
        }
    }
}

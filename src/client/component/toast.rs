use dioxus::prelude::*;

use crate::client::store::{NotificationContext, NotificationKind};

/// Current notification, dismissed on click, or after a timeout in the web
/// build.
#[component]
pub fn Toast() -> Element {
    let mut notifications = use_context::<NotificationContext>();
    let current = notifications.current();

    #[cfg(feature = "web")]
    {
        use crate::client::constant::NOTIFICATION_TIMEOUT_MS;

        let id = current.as_ref().map(|n| n.id);
        use_effect(use_reactive!(|id| {
            if let Some(id) = id {
                spawn(async move {
                    gloo_timers::future::TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
                    notifications.dismiss(id);
                });
            }
        }));
    }

    let Some(notification) = current else {
        return rsx!();
    };
    let alert_class = match notification.kind {
        NotificationKind::Ok => "alert-success",
        NotificationKind::Error => "alert-error",
    };
    let id = notification.id;

    rsx!(div {
        class: "toast toast-end toast-bottom z-50",
        div {
            class: "alert {alert_class} cursor-pointer shadow-lg",
            role: "alert",
            onclick: move |_| notifications.dismiss(id),
            span { "{notification.text}" }
        }
    })
}

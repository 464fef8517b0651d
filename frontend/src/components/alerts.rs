//! Dismissible alert banners.
//!
//! Banners are plain data in a signal; the host component renders them
//! as the first child of the main content region. Each banner
//! auto-dismisses after [`ALERT_TTL_MS`] unless the user closes it
//! first. There is no queue; concurrent alerts stack in DOM order.

use leptos::*;
use std::sync::atomic::{AtomicU32, Ordering};

use gloo_timers::future::TimeoutFuture;

use crate::config::ALERT_TTL_MS;
use crate::types::{Alert, AlertKind};

static NEXT_ALERT_ID: AtomicU32 = AtomicU32::new(0);

/// Show a banner with the given message and severity.
///
/// Schedules its own expiry; removing an already-dismissed banner is a
/// no-op, so the manual close button and the timer never conflict.
pub fn show_alert(set_alerts: WriteSignal<Vec<Alert>>, message: impl Into<String>, kind: AlertKind) {
    let id = NEXT_ALERT_ID.fetch_add(1, Ordering::Relaxed);
    let message = message.into();
    log::info!("🔔 Alert ({kind:?}): {message}");

    set_alerts.update(|alerts| alerts.push(Alert { id, kind, message }));

    spawn_local(async move {
        TimeoutFuture::new(ALERT_TTL_MS).await;
        set_alerts.update(|alerts| alerts.retain(|alert| alert.id != id));
    });
}

/// Renders the current stack of banners.
#[component]
pub fn AlertHost(
    alerts: ReadSignal<Vec<Alert>>,
    set_alerts: WriteSignal<Vec<Alert>>,
) -> impl IntoView {
    view! {
        <div class="alert-host">
            <For
                each=move || alerts.get()
                key=|alert| alert.id
                children=move |alert| {
                    let id = alert.id;
                    view! {
                        <div
                            class=format!("alert {} alert-dismissible", alert.kind.css_class())
                            role="alert"
                        >
                            <span class="alert-message">{alert.message.clone()}</span>
                            <button
                                type="button"
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| {
                                    set_alerts.update(|alerts| alerts.retain(|a| a.id != id))
                                }
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}

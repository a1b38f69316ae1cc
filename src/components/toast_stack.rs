//! Toast Stack Component
//!
//! Stacked, click-to-dismiss notifications. Expiry timers are started by
//! the view when a toast is pushed.

use carros_client::ToastQueue;
use leptos::prelude::*;

use crate::context::use_app_context;

/// Opacity transition for a toast; a missing toast was already removed.
fn toast_style(queue: &ToastQueue, id: u32) -> &'static str {
    let fading = queue.iter().find(|t| t.id == id).map(|t| t.fading).unwrap_or(true);
    if fading {
        "opacity: 0; transition: opacity 0.4s;"
    } else {
        "opacity: 1; transition: opacity 0.4s;"
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app_context();
    let toasts = ctx.view.toasts;

    view! {
        <div id="toast-container" class="toast-container" aria-live="polite">
            <For
                each=move || { toasts.get().iter().cloned().collect::<Vec<_>>() }
                // Same node for the whole lifetime so the fade can transition
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.kind.as_str());
                    view! {
                        <div
                            class=class
                            style=move || toasts.with(|queue| toast_style(queue, id))
                            role="status"
                            on:click=move |_| ctx.view.dismiss(id)
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

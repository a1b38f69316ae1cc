//! Busy Spinner Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Visible while any backend call is outstanding
#[component]
pub fn BusySpinner() -> impl IntoView {
    let ctx = use_app_context();
    let busy = ctx.view.busy;

    view! {
        <div
            id="spinner"
            class=move || if busy.get() { "spinner" } else { "spinner hidden" }
            aria-hidden=move || if busy.get() { "false" } else { "true" }
        ></div>
    }
}

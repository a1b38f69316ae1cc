//! List Panel Component
//!
//! Toggle button, debounced search box and the card container.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

fn toggle_label(visible: bool) -> &'static str {
    if visible {
        "Ocultar Lista"
    } else {
        "Listar Carros"
    }
}

fn container_class(visible: bool) -> &'static str {
    if visible {
        "carros-container"
    } else {
        "carros-container collapsed"
    }
}

#[component]
pub fn ListPanel() -> impl IntoView {
    let ctx = use_app_context();
    let visible = ctx.view.list_visible;

    let toggle = move |_| {
        let session = ctx.session();
        spawn_local(async move {
            session.toggle_list().await;
        });
    };

    // Every keystroke supersedes the pending one; only the last is filtered
    let search = move |query: String| {
        let session = ctx.session();
        let quiet_ms = session.config().search_debounce_ms;
        spawn_local(async move {
            session.search_debounced(&query, TimeoutFuture::new(quiet_ms)).await;
        });
    };

    view! {
        <section class="list-panel">
            <div class="list-toolbar">
                <button id="listar-carros-btn" type="button" on:click=toggle>
                    {move || toggle_label(visible.get())}
                </button>
                <input
                    id="search"
                    type="search"
                    placeholder="Buscar por modelo ou ID..."
                    autocomplete="off"
                    on:input=move |ev| search(event_target_value(&ev))
                />
            </div>
            // Markup comes from the escaping builder in carros-client
            <div
                id="carros-container"
                class=move || container_class(visible.get())
                inner_html=move || ctx.view.panel_html.get()
            ></div>
        </section>
    }
}

//! AutoPrime Catalog App
//!
//! Creates the catalog session and lays out forms, list, spinner and toasts.

use carros_client::{CatalogSession, ClientConfig, HttpCatalogApi};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{BusySpinner, CarroForms, ListPanel, ToastStack};
use crate::context::AppContext;
use crate::view::SignalView;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    let signals = SignalView::new(&config);
    let session = CatalogSession::new(HttpCatalogApi::new(config.clone()), signals, config);

    // Provide context to all children
    let ctx = AppContext::new(session, signals);
    provide_context(ctx);

    // Probe the backend once on mount
    Effect::new(move |_| {
        let session = ctx.session();
        spawn_local(async move {
            session.check_health().await;
        });
    });

    view! {
        <main class="app-layout">
            <h1>"AutoPrime"</h1>
            <CarroForms />
            <ListPanel />
        </main>
        <BusySpinner />
        <ToastStack />
    }
}

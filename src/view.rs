//! Signal-backed View
//!
//! Implements the session's view seam by writing into Leptos signals that
//! the components render from.

use carros_client::render::intro_placeholder;
use carros_client::{CatalogView, ClientConfig, Node, ToastKind, ToastQueue};
use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct SignalView {
    pub busy: RwSignal<bool>,
    /// Serialized card container contents (already escaped)
    pub panel_html: RwSignal<String>,
    pub list_visible: RwSignal<bool>,
    pub toasts: RwSignal<ToastQueue>,
    /// Image picker of the add form
    pub file_input: NodeRef<Input>,
    toast_duration_ms: u32,
    toast_fade_ms: u32,
}

impl SignalView {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            busy: RwSignal::new(false),
            panel_html: RwSignal::new(intro_placeholder().to_html()),
            list_visible: RwSignal::new(false),
            toasts: RwSignal::new(ToastQueue::new()),
            file_input: NodeRef::new(),
            toast_duration_ms: config.toast_duration_ms,
            toast_fade_ms: config.toast_fade_ms,
        }
    }

    /// First file chosen in the image picker, if any
    pub fn selected_file(&self) -> Option<web_sys::File> {
        self.file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|queue| queue.remove(id));
    }
}

impl CatalogView for SignalView {
    fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn show_panel(&self, panel: Node) {
        self.panel_html.set(panel.to_html());
    }

    fn set_list_visible(&self, visible: bool) {
        self.list_visible.set(visible);
    }

    fn notify(&self, kind: ToastKind, message: &str) {
        let mut id = 0;
        self.toasts.update(|queue| id = queue.push(kind, message));

        // Fade, then remove once the transition had time to run
        let toasts = self.toasts;
        let (visible_ms, fade_ms) = (self.toast_duration_ms, self.toast_fade_ms);
        spawn_local(async move {
            TimeoutFuture::new(visible_ms).await;
            toasts.update(|queue| queue.fade(id));
            TimeoutFuture::new(fade_ms).await;
            toasts.update(|queue| queue.remove(id));
        });
    }

    fn clear_file_selection(&self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }
}

//! Notification Layer
//!
//! Busy-spinner counter and the toast queue. Timers live in the UI; this
//! module only tracks state.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
    /// Set once the visible period ended; removal follows after the fade delay.
    pub fading: bool,
}

/// Stacked toasts. No cap; each expires independently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id for later fade/removal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast { id, kind, message: message.into(), fading: false });
        id
    }

    pub fn fade(&mut self, id: u32) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.fading = true;
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }
}

/// Counts outstanding network calls so overlapping operations keep the
/// spinner up until the last one finishes.
#[derive(Debug, Default)]
pub struct Spinner {
    depth: Cell<u32>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when this call made the spinner visible.
    pub fn show(&self) -> bool {
        let depth = self.depth.get();
        self.depth.set(depth + 1);
        depth == 0
    }

    /// Returns true when this call hid the spinner.
    pub fn hide(&self) -> bool {
        let depth = self.depth.get();
        if depth == 0 {
            return false;
        }
        self.depth.set(depth - 1);
        depth == 1
    }

    pub fn is_visible(&self) -> bool {
        self.depth.get() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire_independently() {
        let mut queue = ToastQueue::new();
        let a = queue.push(ToastKind::Success, "Carro salvo");
        let b = queue.push(ToastKind::Error, "Erro ao salvar");
        assert_ne!(a, b);
        assert_eq!(queue.iter().count(), 2);

        queue.fade(a);
        let faded: Vec<bool> = queue.iter().map(|t| t.fading).collect();
        assert_eq!(faded, vec![true, false]);

        queue.remove(a);
        assert_eq!(queue.iter().count(), 1);
        assert_eq!(queue.iter().next().map(|t| t.kind), Some(ToastKind::Error));

        queue.remove(a);
        queue.remove(b);
        assert_eq!(queue.iter().count(), 0);
    }

    #[test]
    fn test_spinner_counts_overlapping_calls() {
        let spinner = Spinner::new();
        assert!(spinner.show());
        assert!(!spinner.show());

        assert!(!spinner.hide());
        assert!(spinner.is_visible());
        assert!(spinner.hide());
        assert!(!spinner.is_visible());

        assert!(!spinner.hide());
        assert!(!spinner.is_visible());
    }
}

//! UI Components
//!
//! Leptos components of the catalog page.

mod busy_spinner;
mod carro_forms;
mod list_panel;
mod toast_stack;

pub use busy_spinner::BusySpinner;
pub use carro_forms::CarroForms;
pub use list_panel::ListPanel;
pub use toast_stack::ToastStack;

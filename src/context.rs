//! Application Context
//!
//! The page's single catalog session, shared via the Leptos Context API.

use std::rc::Rc;

use carros_client::{CatalogSession, HttpCatalogApi};
use leptos::prelude::*;

use crate::view::SignalView;

pub type Session = CatalogSession<HttpCatalogApi, SignalView>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The session is not `Send`, so it lives in local arena storage
    session: StoredValue<Rc<Session>, LocalStorage>,
    /// Signals the session writes into
    pub view: SignalView,
}

impl AppContext {
    pub fn new(session: Session, view: SignalView) -> Self {
        Self {
            session: StoredValue::new_local(Rc::new(session)),
            view,
        }
    }

    /// Owned handle for moving into a spawned task
    pub fn session(&self) -> Rc<Session> {
        self.session.with_value(Rc::clone)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

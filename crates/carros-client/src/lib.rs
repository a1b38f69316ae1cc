//! Carros Client
//!
//! Browser-side session for the carros catalog:
//! - model: records and request/response bodies
//! - api: HTTP adapter for the `/api/*` endpoints
//! - cache, search: local copy of the last fetched list and its filter
//! - markup, render: escaped UI tree for record cards
//! - notify: spinner counter and toast queue
//! - session: the user-facing operations tying it all together

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod markup;
pub mod model;
pub mod notify;
pub mod render;
pub mod search;
pub mod session;

pub use api::{CatalogApi, HttpCatalogApi};
pub use cache::CatalogCache;
pub use config::ClientConfig;
pub use error::{ApiError, ValidationError};
pub use markup::Node;
pub use model::{Carro, CarroId};
pub use notify::{ToastKind, ToastQueue};
pub use session::{CatalogSession, CatalogView};

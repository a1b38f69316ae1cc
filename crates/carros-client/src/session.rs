//! Operation Orchestrator
//!
//! One `CatalogSession` per page. It owns the cached list, the list panel
//! visibility and the spinner counter, and sequences every user action as
//! validate → [upload →] mutate → reload → notify. Mutations never patch the
//! cache; they re-run List.

use std::cell::{Cell, RefCell};
use std::future::Future;

use leptos::logging::{error, log, warn};

use crate::api::CatalogApi;
use crate::cache::CatalogCache;
use crate::config::ClientConfig;
use crate::error::{parse_price, validate_model, ApiError, ValidationError};
use crate::markup::Node;
use crate::model::Carro;
use crate::notify::{Spinner, ToastKind};
use crate::render::{error_placeholder, render_cards};
use crate::search::{filter, Debouncer};

// ========================
// User-facing messages
// ========================

pub const LIST_OK: &str = "Lista atualizada";
pub const LIST_FAILED: &str = "Falha ao listar carros";
pub const GET_FAILED: &str = "Erro ao buscar carro";
pub const SAVE_OK: &str = "Carro salvo";
pub const SAVE_FAILED: &str = "Erro ao salvar";
pub const UPLOAD_FAILED: &str = "Falha no upload de imagem";
pub const UPDATE_OK: &str = "Carro atualizado";
pub const UPDATE_FAILED: &str = "Erro ao atualizar";
pub const DELETE_OK: &str = "Carro deletado";
pub const DELETE_FAILED: &str = "Erro ao deletar";
pub const BACKEND_DOWN: &str = "Servidor indisponível";

/// What the session needs from the page.
pub trait CatalogView {
    /// Spinner visibility; called only on transitions.
    fn set_busy(&self, busy: bool);
    /// Replace the card container contents.
    fn show_panel(&self, panel: Node);
    fn set_list_visible(&self, visible: bool);
    fn notify(&self, kind: ToastKind, message: &str);
    fn clear_file_selection(&self);
}

pub struct CatalogSession<A: CatalogApi, V: CatalogView> {
    api: A,
    view: V,
    config: ClientConfig,
    cache: RefCell<CatalogCache>,
    list_visible: Cell<bool>,
    spinner: Spinner,
    debouncer: Debouncer,
    /// Ticket of the most recently issued List/Get.
    load_seq: Cell<u64>,
}

/// Hides the spinner when dropped, whatever path the operation took.
struct BusyGuard<'a, V: CatalogView> {
    spinner: &'a Spinner,
    view: &'a V,
}

impl<V: CatalogView> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        if self.spinner.hide() {
            self.view.set_busy(false);
        }
    }
}

impl<A: CatalogApi, V: CatalogView> CatalogSession<A, V> {
    pub fn new(api: A, view: V, config: ClientConfig) -> Self {
        Self {
            api,
            view,
            config,
            cache: RefCell::new(CatalogCache::new()),
            list_visible: Cell::new(false),
            spinner: Spinner::new(),
            debouncer: Debouncer::new(),
            load_seq: Cell::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Snapshot of the cached list.
    pub fn records(&self) -> Vec<Carro> {
        self.cache.borrow().current().to_vec()
    }

    pub fn is_list_visible(&self) -> bool {
        self.list_visible.get()
    }

    pub fn is_busy(&self) -> bool {
        self.spinner.is_visible()
    }

    fn busy(&self) -> BusyGuard<'_, V> {
        if self.spinner.show() {
            self.view.set_busy(true);
        }
        BusyGuard { spinner: &self.spinner, view: &self.view }
    }

    fn next_load(&self) -> u64 {
        let ticket = self.load_seq.get() + 1;
        self.load_seq.set(ticket);
        ticket
    }

    fn is_latest_load(&self, ticket: u64) -> bool {
        self.load_seq.get() == ticket
    }

    fn reject(&self, reason: ValidationError) {
        warn!("[SESSION] Rejected input: {}", reason);
        self.view.notify(ToastKind::Error, &reason.to_string());
    }

    fn replace_and_render(&self, records: Vec<Carro>) {
        let panel = render_cards(&records, &self.config.uploads_base);
        self.cache.borrow_mut().replace(records);
        self.view.show_panel(panel);
    }

    // ========================
    // Operations
    // ========================

    /// Show/hide the list panel. Only the hidden → shown transition fetches.
    pub async fn toggle_list(&self) {
        if self.list_visible.get() {
            self.list_visible.set(false);
            self.view.set_list_visible(false);
            return;
        }
        self.list_visible.set(true);
        self.view.set_list_visible(true);
        self.list().await;
    }

    /// Reload the whole catalog. When loads overlap only the latest one issued
    /// may touch the cache.
    pub async fn list(&self) {
        let ticket = self.next_load();
        let guard = self.busy();
        let result = self.api.list().await;
        drop(guard);

        if !self.is_latest_load(ticket) {
            log!("[SESSION] Dropping stale list response #{}", ticket);
            return;
        }
        match result {
            Ok(records) => {
                log!("[SESSION] Loaded {} carros", records.len());
                self.replace_and_render(records);
                self.view.notify(ToastKind::Success, LIST_OK);
            }
            Err(e) => {
                log_failure("List", &e);
                self.view.show_panel(error_placeholder());
                self.view.notify(ToastKind::Error, LIST_FAILED);
            }
        }
    }

    /// Replace the cache with the records matching `modelo`. On failure the
    /// current panel and cache stay as they were.
    pub async fn get_by_model(&self, modelo: &str) {
        let modelo = match validate_model(modelo, ValidationError::MissingSearchModel) {
            Ok(m) => m,
            Err(reason) => return self.reject(reason),
        };

        let ticket = self.next_load();
        let guard = self.busy();
        let result = self.api.get_by_model(modelo).await;
        drop(guard);

        if !self.is_latest_load(ticket) {
            log!("[SESSION] Dropping stale get response #{}", ticket);
            return;
        }
        match result {
            Ok(found) => {
                log!("[SESSION] getCarro({}) matched {}", modelo, found.len());
                self.replace_and_render(found);
            }
            Err(e) => {
                log_failure("Get", &e);
                self.view.notify(ToastKind::Error, GET_FAILED);
            }
        }
    }

    /// Create a record. A selected image is uploaded first and the save only
    /// happens with the filename the upload returned.
    pub async fn save(&self, modelo: &str, preco: &str, image: Option<&A::Upload>) {
        let (modelo, preco) = match validate_entry(modelo, preco) {
            Ok(entry) => entry,
            Err(reason) => return self.reject(reason),
        };

        let filename = match image {
            Some(file) => {
                let guard = self.busy();
                let uploaded = self.api.upload_image(file).await;
                drop(guard);
                match uploaded {
                    Ok(uploaded) => {
                        log!("[SESSION] Uploaded {} ({:?})", uploaded.filename, uploaded.url);
                        Some(uploaded.filename)
                    }
                    Err(e) => {
                        log_failure("Upload (save aborted)", &e);
                        self.view.notify(ToastKind::Error, UPLOAD_FAILED);
                        return;
                    }
                }
            }
            None => None,
        };

        let guard = self.busy();
        let saved = self.api.save(modelo, preco, filename.as_deref()).await;
        drop(guard);

        match saved {
            Ok(carro) => {
                log!("[SESSION] Saved {:?}", carro);
                self.view.notify(ToastKind::Success, SAVE_OK);
                self.view.clear_file_selection();
                self.list().await;
            }
            Err(e) => {
                log_failure("Save", &e);
                self.view.notify(ToastKind::Error, SAVE_FAILED);
            }
        }
    }

    pub async fn update(&self, modelo: &str, preco: &str) {
        let (modelo, preco) = match validate_entry(modelo, preco) {
            Ok(entry) => entry,
            Err(reason) => return self.reject(reason),
        };

        let guard = self.busy();
        let updated = self.api.update(modelo, preco).await;
        drop(guard);

        match updated {
            Ok(carro) => {
                log!("[SESSION] Updated {:?}", carro);
                self.view.notify(ToastKind::Success, UPDATE_OK);
                self.list().await;
            }
            Err(e) => {
                log_failure("Update", &e);
                self.view.notify(ToastKind::Error, UPDATE_FAILED);
            }
        }
    }

    /// Delete after `confirm` approves the model name. A declined prompt sends
    /// nothing and changes nothing.
    pub async fn delete<F>(&self, modelo: &str, confirm: F)
    where
        F: FnOnce(&str) -> bool,
    {
        let modelo = match validate_model(modelo, ValidationError::MissingDeleteModel) {
            Ok(m) => m,
            Err(reason) => return self.reject(reason),
        };
        if !confirm(modelo) {
            log!("[SESSION] Delete of {} cancelled", modelo);
            return;
        }

        let guard = self.busy();
        let deleted = self.api.delete(modelo).await;
        drop(guard);

        match deleted {
            Ok(ack) => {
                if !ack.deleted {
                    warn!("[SESSION] deleteCarro({}) acknowledged without deleting", modelo);
                }
                self.view.notify(ToastKind::Success, DELETE_OK);
                self.list().await;
            }
            Err(e) => {
                log_failure("Delete", &e);
                self.view.notify(ToastKind::Error, DELETE_FAILED);
            }
        }
    }

    /// Render the cached list filtered by `query`. Never touches the network.
    pub fn search(&self, query: &str) {
        let filtered = filter(self.cache.borrow().current(), query);
        self.view.show_panel(render_cards(&filtered, &self.config.uploads_base));
    }

    /// Run `search` after `quiet` completes, unless a newer query arrived in
    /// the meantime. Returns whether this query was evaluated.
    pub async fn search_debounced<Q>(&self, query: &str, quiet: Q) -> bool
    where
        Q: Future<Output = ()>,
    {
        let ticket = self.debouncer.arm();
        quiet.await;
        if !self.debouncer.is_current(ticket) {
            return false;
        }
        self.search(query);
        true
    }

    /// Probe the backend once; only a failure is reported to the user.
    pub async fn check_health(&self) {
        let guard = self.busy();
        let health = self.api.health().await;
        drop(guard);

        match health {
            Ok(health) => log!("[SESSION] Backend {} with {} carros", health.status, health.carros),
            Err(e) => {
                warn!("[SESSION] Health check failed: {}", e);
                self.view.notify(ToastKind::Error, BACKEND_DOWN);
            }
        }
    }
}

/// Server rejections carry a status; transport failures do not.
fn log_failure(operation: &str, e: &ApiError) {
    match e.status() {
        Some(status) => error!("[SESSION] {} rejected with HTTP {}: {}", operation, status, e),
        None => error!("[SESSION] {} failed: {}", operation, e),
    }
}

fn validate_entry<'a>(modelo: &'a str, preco: &str) -> Result<(&'a str, f64), ValidationError> {
    let modelo = validate_model(modelo, ValidationError::MissingModel)?;
    let preco = parse_price(preco)?;
    Ok((modelo, preco))
}

//! HTTP Client Adapter
//!
//! Bindings to the backend's `/api/*` endpoints. `getCarro`, `updateCarro` and
//! `deleteCarro` are POSTs with a JSON body regardless of their meaning; the
//! backend only routes them that way.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use leptos::logging::log;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::model::{
    Carro, DeleteAck, HealthStatus, ModeloArgs, OneOrMany, SaveCarroArgs, UpdateCarroArgs,
    UploadedImage,
};

pub const LIST_PATH: &str = "/api/listarCarros";
pub const GET_PATH: &str = "/api/getCarro";
pub const SAVE_PATH: &str = "/api/saveCarro";
pub const UPDATE_PATH: &str = "/api/updateCarro";
pub const DELETE_PATH: &str = "/api/deleteCarro";
pub const UPLOAD_PATH: &str = "/api/uploadImage";
pub const HEALTH_PATH: &str = "/health";

/// Multipart field the backend reads the upload from.
const UPLOAD_FIELD: &str = "file";

/// Backend operations consumed by the session.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// Handle to a user-selected file.
    type Upload;

    async fn list(&self) -> Result<Vec<Carro>, ApiError>;
    async fn get_by_model(&self, modelo: &str) -> Result<Vec<Carro>, ApiError>;
    async fn save(&self, modelo: &str, preco: f64, image: Option<&str>) -> Result<Carro, ApiError>;
    async fn update(&self, modelo: &str, preco: f64) -> Result<Carro, ApiError>;
    async fn delete(&self, modelo: &str) -> Result<DeleteAck, ApiError>;
    async fn upload_image(&self, file: &Self::Upload) -> Result<UploadedImage, ApiError>;
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

/// `fetch`-backed implementation used in the browser.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    config: ClientConfig,
}

impl HttpCatalogApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    async fn post_json<B, T>(&self, call: JsonPost<B>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let endpoint = call.endpoint;
        let request = Request::post(&self.config.endpoint(call.path))
            .json(&call.body)
            .map_err(|e| ApiError::Request { endpoint, message: e.to_string() })?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network { endpoint, message: e.to_string() })?;
        decode(endpoint, response).await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &'static str, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.config.endpoint(path))
            .send()
            .await
            .map_err(|e| ApiError::Network { endpoint, message: e.to_string() })?;
        decode(endpoint, response).await
    }
}

/// A JSON POST: endpoint name for errors, path and body.
#[derive(Debug)]
pub(crate) struct JsonPost<B> {
    endpoint: &'static str,
    path: &'static str,
    body: B,
}

fn get_call(modelo: &str) -> JsonPost<ModeloArgs<'_>> {
    JsonPost { endpoint: "getCarro", path: GET_PATH, body: ModeloArgs { modelo } }
}

fn save_call<'a>(modelo: &'a str, preco: f64, image: Option<&'a str>) -> JsonPost<SaveCarroArgs<'a>> {
    JsonPost { endpoint: "saveCarro", path: SAVE_PATH, body: SaveCarroArgs { modelo, preco, image } }
}

fn update_call(modelo: &str, preco: f64) -> JsonPost<UpdateCarroArgs<'_>> {
    JsonPost { endpoint: "updateCarro", path: UPDATE_PATH, body: UpdateCarroArgs { modelo, preco } }
}

fn delete_call(modelo: &str) -> JsonPost<ModeloArgs<'_>> {
    JsonPost { endpoint: "deleteCarro", path: DELETE_PATH, body: ModeloArgs { modelo } }
}

/// Turn a response into `T`, surfacing every non-2xx status as a failure.
async fn decode<T: DeserializeOwned>(endpoint: &'static str, response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let fallback = response.status_text();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            endpoint,
            status,
            reason: failure_reason(&body).unwrap_or(fallback),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode { endpoint, message: e.to_string() })
}

/// The backend explains failures as `{"error": ...}` or `{"message": ...}`.
pub(crate) fn failure_reason(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    type Upload = web_sys::File;

    async fn list(&self) -> Result<Vec<Carro>, ApiError> {
        self.get("listarCarros", LIST_PATH).await
    }

    async fn get_by_model(&self, modelo: &str) -> Result<Vec<Carro>, ApiError> {
        let found: OneOrMany = self.post_json(get_call(modelo)).await?;
        Ok(found.into())
    }

    async fn save(&self, modelo: &str, preco: f64, image: Option<&str>) -> Result<Carro, ApiError> {
        self.post_json(save_call(modelo, preco, image)).await
    }

    async fn update(&self, modelo: &str, preco: f64) -> Result<Carro, ApiError> {
        self.post_json(update_call(modelo, preco)).await
    }

    async fn delete(&self, modelo: &str) -> Result<DeleteAck, ApiError> {
        self.post_json(delete_call(modelo)).await
    }

    async fn upload_image(&self, file: &web_sys::File) -> Result<UploadedImage, ApiError> {
        let endpoint = "uploadImage";
        let build_error = |e: wasm_bindgen::JsValue| ApiError::Request {
            endpoint,
            message: format!("{:?}", e),
        };

        let form = web_sys::FormData::new().map_err(build_error)?;
        form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
            .map_err(build_error)?;
        log!("[API] Uploading {} ({} bytes)", file.name(), file.size());

        let request = Request::post(&self.config.endpoint(UPLOAD_PATH))
            .body(form)
            .map_err(|e| ApiError::Request { endpoint, message: e.to_string() })?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network { endpoint, message: e.to_string() })?;
        decode(endpoint, response).await
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get("health", HEALTH_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_prefers_error_field() {
        assert_eq!(
            failure_reason(r#"{"error":"Carro não encontrado"}"#),
            Some("Carro não encontrado".to_string())
        );
        assert_eq!(
            failure_reason(r#"{"deleted":false,"message":"Carro não encontrado"}"#),
            Some("Carro não encontrado".to_string())
        );
    }

    #[test]
    fn test_failure_reason_ignores_unstructured_bodies() {
        assert_eq!(failure_reason("<html>502 Bad Gateway</html>"), None);
        assert_eq!(failure_reason(r#"{"error": 42}"#), None);
        assert_eq!(failure_reason(""), None);
    }

    fn body_of<B: Serialize>(call: &JsonPost<B>) -> serde_json::Value {
        serde_json::to_value(&call.body).unwrap()
    }

    #[test]
    fn test_model_keyed_posts() {
        let get = get_call("Civic");
        assert_eq!((get.endpoint, get.path), ("getCarro", "/api/getCarro"));
        assert_eq!(body_of(&get), serde_json::json!({"modelo": "Civic"}));

        let delete = delete_call("Civic");
        assert_eq!((delete.endpoint, delete.path), ("deleteCarro", "/api/deleteCarro"));
        assert_eq!(body_of(&delete), serde_json::json!({"modelo": "Civic"}));
    }

    #[test]
    fn test_update_post_has_no_image() {
        let update = update_call("Civic", 120000.0);
        assert_eq!((update.endpoint, update.path), ("updateCarro", "/api/updateCarro"));
        assert_eq!(body_of(&update), serde_json::json!({"modelo": "Civic", "preco": 120000.0}));
    }

    #[test]
    fn test_save_post_carries_image_reference() {
        let save = save_call("Civic", 95000.0, Some("1_civic.png"));
        assert_eq!((save.endpoint, save.path), ("saveCarro", "/api/saveCarro"));
        assert_eq!(
            body_of(&save),
            serde_json::json!({"modelo": "Civic", "preco": 95000.0, "image": "1_civic.png"})
        );
    }

    #[test]
    fn test_endpoint_paths_join_base() {
        let api = HttpCatalogApi::new(ClientConfig::default());
        assert_eq!(api.config.endpoint(UPLOAD_PATH), "/api/uploadImage");
    }
}

//! Error types for the catalog client.

use thiserror::Error;

/// Failure of a single backend call.
///
/// The technical detail is meant for the console; toasts use a generic,
/// operation-specific message instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request could not be built (body encoding, form data).
    #[error("failed to build request for {endpoint}: {message}")]
    Request {
        endpoint: &'static str,
        message: String,
    },

    /// The request never produced a response.
    #[error("network failure on {endpoint}: {message}")]
    Network {
        endpoint: &'static str,
        message: String,
    },

    /// The server answered with a non-2xx status.
    #[error("{endpoint} answered {status}: {reason}")]
    Status {
        endpoint: &'static str,
        status: u16,
        reason: String,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response from {endpoint}: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Transport status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Input rejected before any network call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Preencha o modelo")]
    MissingModel,
    #[error("Informe o modelo a buscar")]
    MissingSearchModel,
    #[error("Informe o modelo a deletar")]
    MissingDeleteModel,
    #[error("Preço deve ser maior que zero")]
    InvalidPrice,
}

/// Trimmed, non-empty model name.
pub fn validate_model(raw: &str, missing: ValidationError) -> Result<&str, ValidationError> {
    let modelo = raw.trim();
    if modelo.is_empty() {
        return Err(missing);
    }
    Ok(modelo)
}

/// Parse a price typed into a form: finite and strictly positive.
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let preco: f64 = raw.trim().parse().map_err(|_| ValidationError::InvalidPrice)?;
    if !preco.is_finite() || preco <= 0.0 {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(preco)
}

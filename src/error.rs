// ============================================================================
// ERRORES DE API - Una sola forma de error hacia la UI
// ============================================================================
// Transporte, HTTP con mensaje y HTTP sin cuerpo legible terminan todos
// en un mensaje legible por humanos (Display)
// ============================================================================

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Fallo de red / fetch rechazado
    #[error("Erreur réseau : {0}")]
    Network(String),

    /// Respuesta no 2xx; `message` ya contiene el fallback si el cuerpo no servía
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Respuesta 2xx con JSON inválido
    #[error("Réponse invalide du serveur : {0}")]
    Parse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Extrae `error` de un cuerpo JSON de error, o usa el mensaje fijo de la operación
pub fn error_message_from_body(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

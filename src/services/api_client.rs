// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Sin lógica de negocio: una función por operación del backend.
// Todas las peticiones llevan las cookies de sesión (credentials: include).
// Sin reintentos ni timeouts: los errores suben tal cual al llamador.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::error::{error_message_from_body, ApiError, ApiResult};
use crate::models::{
    AuthResponse, CartEntry, CartEntryPayload, EquipmentItem, ItemId, LoginRequest, SelectItem,
};

// Mensajes fijos cuando el cuerpo de error no es legible
pub const LOGIN_FAILED: &str = "Échec de la connexion";
pub const LOGOUT_FAILED: &str = "Échec de la déconnexion";
pub const STATUS_FAILED: &str = "Session non valide";
pub const GET_CART_FAILED: &str = "Impossible de charger le panier";
pub const ADD_TO_CART_FAILED: &str = "Impossible d'ajouter au panier";
pub const REMOVE_FROM_CART_FAILED: &str = "Impossible de supprimer l'entrée";
pub const CLEAR_CART_FAILED: &str = "Impossible de vider le panier";
pub const SCHOOLS_FAILED: &str = "Impossible de charger les écoles";
pub const GRADES_FAILED: &str = "Impossible de charger les classes";
pub const EQUIPMENT_FAILED: &str = "Impossible de charger la liste de fournitures";

/// Operaciones de autenticación
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthResponse>;
    async fn logout(&self) -> ApiResult<Option<serde_json::Value>>;
    async fn check_auth(&self) -> ApiResult<AuthResponse>;
}

/// Operaciones del carrito
#[allow(async_fn_in_trait)]
pub trait CartApi {
    async fn get_cart(&self) -> ApiResult<Vec<CartEntry>>;
    async fn add_to_cart(&self, payload: &CartEntryPayload) -> ApiResult<CartEntry>;
    async fn remove_from_cart(&self, id: &str) -> ApiResult<Option<serde_json::Value>>;
    async fn clear_cart(&self) -> ApiResult<Option<serde_json::Value>>;
}

/// Catálogo: escuelas, clases y listas de fournitures
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    async fn get_schools(&self) -> ApiResult<Vec<SelectItem>>;
    async fn get_grades(&self, school_id: &ItemId) -> ApiResult<Vec<SelectItem>>;
    async fn get_equipment(&self, school_id: &ItemId, grade_id: &ItemId) -> ApiResult<Vec<EquipmentItem>>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        Request::post(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        Request::delete(&self.url(path)).credentials(RequestCredentials::Include)
    }
}

/// Envía la petición; un status no 2xx se convierte en ApiError::Http con el mensaje del cuerpo
async fn send(request: Result<Request, gloo_net::Error>, fallback: &str) -> ApiResult<Response> {
    let request = request.map_err(|e| ApiError::Parse(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message_from_body(&body, fallback);
    log::warn!("⚠️ HTTP {}: {}", status, message);
    Err(ApiError::Http { status, message })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Para operaciones sin contenido: cuerpo vacío = éxito sin valor
async fn read_ack(response: Response) -> ApiResult<Option<serde_json::Value>> {
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_ack(&body)
}

pub fn decode_ack(body: &str) -> ApiResult<Option<serde_json::Value>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn encode_segment(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

impl AuthApi for ApiClient {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthResponse> {
        log::info!("🔐 Login para usuario: {}", credentials.username);
        let response = send(self.post("/auth/login").json(credentials), LOGIN_FAILED).await?;
        read_json(response).await
    }

    async fn logout(&self) -> ApiResult<Option<serde_json::Value>> {
        log::info!("👋 Logout");
        let response = send(self.post("/auth/logout").build(), LOGOUT_FAILED).await?;
        read_ack(response).await
    }

    async fn check_auth(&self) -> ApiResult<AuthResponse> {
        let response = send(self.get("/auth/status").build(), STATUS_FAILED).await?;
        read_json(response).await
    }
}

impl CartApi for ApiClient {
    async fn get_cart(&self) -> ApiResult<Vec<CartEntry>> {
        log::info!("🛒 Obteniendo carrito...");
        let response = send(self.get("/cart").build(), GET_CART_FAILED).await?;
        read_json(response).await
    }

    async fn add_to_cart(&self, payload: &CartEntryPayload) -> ApiResult<CartEntry> {
        log::info!(
            "➕ Añadiendo al carrito: {} / {} ({} artículos)",
            payload.school.name,
            payload.grade.name,
            payload.items.len()
        );
        let response = send(self.post("/cart").json(payload), ADD_TO_CART_FAILED).await?;
        read_json(response).await
    }

    async fn remove_from_cart(&self, id: &str) -> ApiResult<Option<serde_json::Value>> {
        log::info!("🗑️ Eliminando entrada del carrito: {}", id);
        let path = format!("/cart/{}", encode_segment(id));
        let response = send(self.delete(&path).build(), REMOVE_FROM_CART_FAILED).await?;
        read_ack(response).await
    }

    async fn clear_cart(&self) -> ApiResult<Option<serde_json::Value>> {
        log::info!("🧹 Vaciando carrito");
        let response = send(self.delete("/cart").build(), CLEAR_CART_FAILED).await?;
        read_ack(response).await
    }
}

impl CatalogApi for ApiClient {
    async fn get_schools(&self) -> ApiResult<Vec<SelectItem>> {
        let response = send(self.get("/schools").build(), SCHOOLS_FAILED).await?;
        read_json(response).await
    }

    async fn get_grades(&self, school_id: &ItemId) -> ApiResult<Vec<SelectItem>> {
        let path = format!("/schools/{}/grades", encode_segment(&school_id.to_string()));
        let response = send(self.get(&path).build(), GRADES_FAILED).await?;
        read_json(response).await
    }

    async fn get_equipment(&self, school_id: &ItemId, grade_id: &ItemId) -> ApiResult<Vec<EquipmentItem>> {
        let path = format!(
            "/schools/{}/grades/{}/equipment",
            encode_segment(&school_id.to_string()),
            encode_segment(&grade_id.to_string())
        );
        log::info!("📋 Obteniendo fournitures: {}", path);
        let response = send(self.get(&path).build(), EQUIPMENT_FAILED).await?;
        read_json(response).await
    }
}

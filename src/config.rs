use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub ui_config: UIConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:3000".to_string(),
            backend_url_production: "https://api.fournitures.example".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            ui_config: UIConfig::default(),
        }
    }
}

/// Retrasos de la interfaz, en milisegundos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIConfig {
    /// Gracia entre blur y cierre de la lista del selector
    pub select_close_delay_ms: u32,
    pub save_confirmation_ms: u32,
    pub toast_duration_ms: u32,
    /// Ventana durante la cual un botón de confirmación queda armado
    pub confirm_window_ms: u32,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            select_close_delay_ms: 200,
            save_confirmation_ms: 3000,
            toast_duration_ms: 4000,
            confirm_window_ms: 3000,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = UIConfig::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("http://localhost:3000").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("https://api.fournitures.example").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), true),
            ui_config: UIConfig {
                select_close_delay_ms: parse_or(option_env!("SELECT_CLOSE_DELAY_MS"), defaults.select_close_delay_ms),
                save_confirmation_ms: parse_or(option_env!("SAVE_CONFIRMATION_MS"), defaults.save_confirmation_ms),
                toast_duration_ms: parse_or(option_env!("TOAST_DURATION_MS"), defaults.toast_duration_ms),
                confirm_window_ms: parse_or(option_env!("CONFIRM_WINDOW_MS"), defaults.confirm_window_ms),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_url_follows_environment() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:3000");

        config.environment = "production".to_string();
        assert_eq!(config.backend_url(), "https://api.fournitures.example");
    }

    #[test]
    fn parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(Some(" 250 "), 200u32), 250);
        assert_eq!(parse_or(Some("soon"), 200u32), 200);
        assert_eq!(parse_or::<bool>(None, true), true);
    }
}

use serde::{Deserialize, Serialize};

/// Qué pasa con el cronómetro al cambiar de actividad seleccionada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// El cronómetro sigue y se acredita a la actividad seleccionada al parar
    KeepTimer,
    /// Cambiar de selección pone el cronómetro a cero y lo pausa
    ResetTimer,
}

impl SelectionPolicy {
    /// "reset" => ResetTimer, cualquier otro valor => KeepTimer
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "reset" | "reset_timer" => SelectionPolicy::ResetTimer,
            _ => SelectionPolicy::KeepTimer,
        }
    }
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy::KeepTimer
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage_key: String,
    pub tick_interval_ms: u32,
    pub enable_logging: bool,
    pub log_level: String,
    pub root_element_id: String,
    pub selection_policy: SelectionPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "activities".to_string(),
            tick_interval_ms: 1000,
            enable_logging: true,
            log_level: "info".to_string(),
            root_element_id: "app".to_string(),
            selection_policy: SelectionPolicy::KeepTimer,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            storage_key: option_env!("STORAGE_KEY")
                .unwrap_or("activities").to_string(),
            tick_interval_ms: option_env!("TICK_INTERVAL_MS")
                .unwrap_or("1000").parse().unwrap_or(1000),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
            root_element_id: option_env!("ROOT_ELEMENT_ID")
                .unwrap_or("app").to_string(),
            selection_policy: SelectionPolicy::parse(
                option_env!("SELECTION_POLICY").unwrap_or("keep"),
            ),
        }
    }

    /// Nivel de log para wasm_logger; valores desconocidos => Info
    pub fn log_level(&self) -> log::Level {
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

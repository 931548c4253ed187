// ============================================================================
// STORAGE SERVICE - Almacenamiento clave/valor síncrono
// ============================================================================
// El estado persistido nunca habla directamente con localStorage:
// recibe un `KeyValueStore` inyectado (localStorage en el navegador,
// `MemoryStore` en tests o como fallback).
// ============================================================================

use thiserror::Error;
use crate::utils::storage::get_local_storage;

/// Errores del almacenamiento persistente (nunca fatales)
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage no disponible")]
    Unavailable,
    #[error("error leyendo la clave '{0}'")]
    Read(String),
    #[error("error guardando la clave '{0}' (¿cuota excedida?)")]
    Write(String),
    #[error("error serializando datos: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Interfaz clave/valor síncrona
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Store respaldado por `window.localStorage`
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    /// ¿Hay localStorage accesible en este navegador?
    pub fn is_available() -> bool {
        get_local_storage().is_some()
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

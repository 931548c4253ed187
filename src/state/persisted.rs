// ============================================================================
// PERSISTED STATE - Valor en memoria reflejado en un store clave/valor
// ============================================================================

use std::rc::Rc;
use serde::{Serialize, de::DeserializeOwned};
use crate::services::{KeyValueStore, StorageError};

/// Celda de estado persistida bajo una clave fija.
/// Cada `set`/`update` hace exactamente una escritura síncrona.
pub struct PersistedState<T> {
    key: String,
    value: T,
    store: Rc<dyn KeyValueStore>,
}

impl<T> PersistedState<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Leer `key` del store; si falta o no se puede decodificar se usa `initial`
    pub fn new(key: &str, initial: T, store: Rc<dyn KeyValueStore>) -> Self {
        let value = match store.read(key) {
            Ok(Some(json)) => match serde_json::from_str::<T>(&json) {
                Ok(value) => {
                    log::info!("📋 [STORAGE] '{}' restaurado desde storage", key);
                    value
                }
                Err(e) => {
                    log::warn!("⚠️ [STORAGE] '{}' corrupto, usando valor inicial: {}", key, e);
                    initial
                }
            },
            Ok(None) => initial,
            Err(e) => {
                log::warn!("⚠️ [STORAGE] No se pudo leer '{}', usando valor inicial: {}", key, e);
                initial
            }
        };

        Self {
            key: key.to_string(),
            value,
            store,
        }
    }

    /// Valor actual en memoria
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Reemplazar valor y persistirlo.
    /// Si la escritura falla el valor en memoria ya está actualizado.
    pub fn set(&mut self, new_value: T) -> Result<(), StorageError> {
        self.value = new_value;
        self.persist()
    }

    /// Modificar in situ y persistir
    pub fn update<F>(&mut self, updater: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.value);
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.value)?;
        self.store.write(&self.key, &json)?;
        log::debug!("💾 [STORAGE] '{}' guardado ({} bytes)", self.key, json.len());
        Ok(())
    }
}

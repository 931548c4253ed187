use std::cell::RefCell;
use std::collections::HashMap;
use crate::services::storage_service::{KeyValueStore, StorageError};

/// Store en memoria: tests y fallback cuando localStorage está bloqueado
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crear store con una entrada ya guardada
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Valor crudo guardado bajo `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_overwrites_previous_entry() {
        let store = MemoryStore::with_entry("activities", "[]");
        store.write("activities", r#"[{"name":"A","totalTime":1,"logs":[]}]"#).unwrap();
        assert_eq!(
            store.read("activities").unwrap().as_deref(),
            Some(r#"[{"name":"A","totalTime":1,"logs":[]}]"#)
        );
    }

    #[test]
    fn missing_key_reads_none() {
        let store = MemoryStore::new();
        assert!(store.read("activities").unwrap().is_none());
    }
}

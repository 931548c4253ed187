use web_sys::{window, Storage};

/// Acceso a `window.localStorage` (None si el navegador lo bloquea)
pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

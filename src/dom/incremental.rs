// ============================================================================
// INCREMENTAL UPDATES - Actualizar solo lo que cambia
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{get_element_by_id, set_text_content};
use crate::state::app_state::AppState;
use crate::utils::{elapsed_label, TIMER_TEXT_ID};

/// Reescribir "N seconds" sin reconstruir el árbol.
/// Si el elemento no existe (panel oculto) pide re-render completo.
pub fn update_timer_text(state: &AppState) -> Result<(), JsValue> {
    let timer = get_element_by_id(TIMER_TEXT_ID)
        .ok_or_else(|| JsValue::from_str("Timer element not found, needs full render"))?;
    set_text_content(&timer, &elapsed_label(state.elapsed()));
    Ok(())
}

// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{get_element_by_id, set_inner_html, append_child};
use crate::dom::incremental::update_timer_text;
use crate::services::{IntervalTicker, KeyValueStore, LocalStorageStore, MemoryStore};
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(&CONFIG.root_element_id)
            .ok_or_else(|| JsValue::from_str(&format!("No #{} element found", CONFIG.root_element_id)))?;

        let store: Rc<dyn KeyValueStore> = if LocalStorageStore::is_available() {
            Rc::new(LocalStorageStore::new())
        } else {
            log::warn!("⚠️ [APP] localStorage no disponible, los datos no se guardarán");
            Rc::new(MemoryStore::new())
        };

        let state = AppState::new(store, Rc::new(IntervalTicker), &CONFIG);

        // Suscribirse a cambios de estado para re-renderizar automáticamente
        state.subscribe_to_changes(move |update_type| {
            // Usar gloo_timers para salir del handler antes de tocar el DOM
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::rerender_app_with_type(update_type);
            }).forget();
        });

        Ok(Self {
            state,
            root: Some(root),
        })
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");

            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
            log::debug!("✅ [APP] Render completo");
        }
        Ok(())
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::Timer => update_timer_text(&self.state),
        }
    }

    /// Desmontar: cancelar ticks y vaciar el contenedor
    pub fn unmount(&mut self) {
        self.state.teardown();
        if let Some(root) = self.root.take() {
            set_inner_html(&root, "");
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.state.teardown();
    }
}

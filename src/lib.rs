// ============================================================================
// ACTIVITY TIME TRACKER - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModels: estado + lógica UI
// - Services: almacenamiento clave/valor y fuente de ticks
// - State: state management con Rc<RefCell>
// - Models: estructuras persistidas
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
mod app;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use crate::state::app_state::UpdateType;
use std::cell::RefCell;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Time Tracker - Rust Puro + MVVM");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con tipo específico
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        match update_type {
            UpdateType::Incremental(inc_type) => {
                let needs_full_render = match *app_cell.borrow() {
                    Some(ref app) => match app.update_incremental(inc_type) {
                        Ok(()) => false,
                        Err(e) => {
                            log::debug!("🔄 [UPDATE] Incremental no aplicable ({:?}), re-render completo", e);
                            true
                        }
                    },
                    None => {
                        log::warn!("⚠️ [UPDATE] App no está inicializada");
                        false
                    }
                };

                if needs_full_render {
                    if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                        if let Err(e) = app_mut.render() {
                            log::error!("❌ Error re-renderizando: {:?}", e);
                        }
                    }
                }
            }
            UpdateType::FullRender => {
                if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                    if let Err(e) = app_mut.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                } else {
                    log::warn!("⚠️ [RERENDER] App no está inicializada");
                }
            }
        }
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

/// Desmontar la app (cancela el cronómetro y vacía el contenedor)
#[wasm_bindgen]
pub fn unmount_app() {
    let app = APP.with(|app_cell| app_cell.borrow_mut().take());
    if let Some(mut app) = app {
        app.unmount();
        log::info!("👋 [APP] App desmontada");
    }
}

// ============================================================================
// APP VIEW - Árbol completo de la aplicación
// ============================================================================
// La forma del árbol la decide `ViewState`: Idle no muestra el panel de
// seguimiento; Paused/Running lo muestran con la etiqueta correspondiente.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child};
use crate::state::app_state::AppState;
use crate::utils::APP_TITLE;
use crate::viewmodels::ViewState;
use crate::views::{render_activity_form, render_activity_list, render_tracking_panel};

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let snapshot = state.snapshot();

    let wrapper = ElementBuilder::new("div")?
        .class("app-wrapper")
        .child(ElementBuilder::new("h1")?.text(APP_TITLE).build())?
        .child(render_activity_form(state, &snapshot.new_activity_name)?)?
        .build();

    let selected = match &snapshot.view {
        ViewState::Idle => None,
        ViewState::Paused { activity, .. } | ViewState::Running { activity, .. } => {
            Some(activity.as_str())
        }
    };
    append_child(&wrapper, &render_activity_list(state, &snapshot.activities, selected)?)?;

    match &snapshot.view {
        ViewState::Idle => {}
        ViewState::Paused { activity, elapsed } => {
            let panel = render_tracking_panel(state, activity, *elapsed, false, snapshot.manual_time)?;
            append_child(&wrapper, &panel)?;
        }
        ViewState::Running { activity, elapsed } => {
            let panel = render_tracking_panel(state, activity, *elapsed, true, snapshot.manual_time)?;
            append_child(&wrapper, &panel)?;
        }
    }

    Ok(wrapper)
}

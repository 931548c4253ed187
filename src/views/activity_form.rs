// ============================================================================
// ACTIVITY FORM - Input + botón "Add Activity"
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, input_value, on_click, on_input};
use crate::state::app_state::AppState;
use crate::utils::{ADD_ACTIVITY_LABEL, NEW_ACTIVITY_INPUT_ID, NEW_ACTIVITY_PLACEHOLDER};

pub fn render_activity_form(state: &AppState, pending_name: &str) -> Result<Element, JsValue> {
    let form = ElementBuilder::new("div")?
        .class("activity-form")
        .build();

    let input = ElementBuilder::new("input")?
        .id(NEW_ACTIVITY_INPUT_ID)?
        .class("activity-input")
        .attr("type", "text")?
        .attr("placeholder", NEW_ACTIVITY_PLACEHOLDER)?
        .attr("value", pending_name)?
        .build();

    {
        let state = state.clone();
        on_input(&input, move |e: web_sys::Event| {
            if let Some(value) = input_value(e.target()) {
                state.set_new_activity_name(&value);
            }
        })?;
    }

    let add_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn")
        .text(ADD_ACTIVITY_LABEL)
        .build();

    {
        let state = state.clone();
        on_click(&add_btn, move |_| {
            state.add_activity();
        })?;
    }

    append_child(&form, &input)?;
    append_child(&form, &add_btn)?;
    Ok(form)
}

// ============================================================================
// TRACKING PANEL - Cronómetro y tiempo manual de la actividad seleccionada
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, input_value, on_click, on_input};
use crate::state::app_state::AppState;
use crate::utils::*;

/// Panel visible solo en Paused/Running
pub fn render_tracking_panel(
    state: &AppState,
    activity: &str,
    elapsed: u64,
    running: bool,
    manual_time: i64,
) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?
        .class("tracking-panel")
        .child(ElementBuilder::new("h3")?.text(&tracking_label(activity)).build())?
        .child(
            ElementBuilder::new("div")?
                .id(TIMER_TEXT_ID)?
                .class("timer-text")
                .text(&elapsed_label(elapsed))
                .build(),
        )?
        .build();

    let toggle_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn")
        .text(if running { PAUSE_TIMER_LABEL } else { START_TIMER_LABEL })
        .build();
    {
        let state = state.clone();
        on_click(&toggle_btn, move |_| state.toggle_running())?;
    }

    let stop_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn")
        .text(STOP_TIMER_LABEL)
        .build();
    {
        let state = state.clone();
        on_click(&stop_btn, move |_| state.stop_timer())?;
    }

    append_child(&panel, &toggle_btn)?;
    append_child(&panel, &stop_btn)?;
    append_child(&panel, &render_manual_time(state, manual_time)?)?;
    Ok(panel)
}

fn render_manual_time(state: &AppState, manual_time: i64) -> Result<Element, JsValue> {
    let section = ElementBuilder::new("div")?
        .class("manual-time")
        .child(ElementBuilder::new("h4")?.text(MANUAL_TIME_TITLE).build())?
        .build();

    let input = ElementBuilder::new("input")?
        .id(MANUAL_TIME_INPUT_ID)?
        .attr("type", "number")?
        .attr("min", "0")?
        .attr("step", "1")?
        .attr("placeholder", MANUAL_TIME_PLACEHOLDER)?
        .attr("value", &manual_time.to_string())?
        .build();
    {
        let state = state.clone();
        on_input(&input, move |e: web_sys::Event| {
            if let Some(value) = input_value(e.target()) {
                state.set_manual_time_input(&value);
            }
        })?;
    }

    let add_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn")
        .text(ADD_TIME_LABEL)
        .build();
    {
        let state = state.clone();
        on_click(&add_btn, move |_| state.add_manual_time())?;
    }

    append_child(&section, &input)?;
    append_child(&section, &add_btn)?;
    Ok(section)
}

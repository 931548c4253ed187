// ============================================================================
// ACTIVITY LIST - Un botón por actividad + tiempo total
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{ElementBuilder, append_child, on_click};
use crate::models::Activity;
use crate::state::app_state::AppState;
use crate::utils::{time_spent_label, ACTIVITIES_TITLE};

pub fn render_activity_list(
    state: &AppState,
    activities: &[Activity],
    selected: Option<&str>,
) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("activity-list")
        .child(ElementBuilder::new("h2")?.text(ACTIVITIES_TITLE).build())?
        .build();

    let list = ElementBuilder::new("ul")?.build();

    for activity in activities {
        let class = if selected == Some(activity.name.as_str()) {
            "btn btn--selected"
        } else {
            "btn"
        };

        let select_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class(class)
            .text(&activity.name)
            .build();

        {
            let state = state.clone();
            let name = activity.name.clone();
            on_click(&select_btn, move |_| {
                state.select_activity(&name);
            })?;
        }

        let item = ElementBuilder::new("li")?
            .child(select_btn)?
            .child(ElementBuilder::new("p")?.text(&time_spent_label(activity.total_time)).build())?
            .build();

        append_child(&list, &item)?;
    }

    append_child(&container, &list)?;
    Ok(container)
}

// ============================================================================
// PROGRESS BAR VIEW - Barra de avance de la cola
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::builder::ElementBuilder;
use crate::dom::element::{append_child, get_element_by_id, set_style_property, set_text_content};

/// Label de la barra: "{progress}%", sin clampear fuera de [0,100]
pub fn progress_label(progress: f64) -> String {
    format!("{}%", progress)
}

/// Renderizar la barra de progreso.
/// Antes del primer load el label queda en "0%" y la barra sin ancho.
pub fn render_progress_bar(progress: Option<f64>) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("bar-main-container")
        .build();

    let wrap = ElementBuilder::new("div")?.class("wrap").build();

    let label = match progress {
        Some(p) => progress_label(p),
        None => "0%".to_string(),
    };

    let bar_text = ElementBuilder::new("div")?
        .class("bar-percentage")
        .id("queue-bar-text")?
        .text(&label)
        .build();

    let bar_container = ElementBuilder::new("div")?
        .class("bar-container")
        .build();

    let bar = ElementBuilder::new("div")?
        .class("bar")
        .id("queue-bar")?
        .build();

    if let Some(p) = progress {
        set_style_property(&bar, "width", &progress_label(p))?;
    }

    append_child(&bar_container, &bar)?;
    append_child(&wrap, &bar_text)?;
    append_child(&wrap, &bar_container)?;
    append_child(&container, &wrap)?;

    Ok(container)
}

/// Actualización directa de width y label para que sigan a progress
pub fn set_bar_progress(progress: f64) -> Result<(), JsValue> {
    let bar = get_element_by_id("queue-bar")
        .ok_or_else(|| JsValue::from_str("needs full render: queue-bar"))?;
    let bar_text = get_element_by_id("queue-bar-text")
        .ok_or_else(|| JsValue::from_str("needs full render: queue-bar-text"))?;

    let label = progress_label(progress);
    set_style_property(&bar, "width", &label)?;
    set_text_content(&bar_text, &label);

    Ok(())
}

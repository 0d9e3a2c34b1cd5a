// ============================================================================
// INCREMENTAL UPDATES - Actualización directa de elementos específicos
// ============================================================================
// Manipulación directa del DOM sin re-render completo. Cada función devuelve
// Err("needs full render") si los elementos objetivo no existen; el caller
// (lib.rs) hace fallback a re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::element::{add_class, get_element_by_id, remove_class, set_inner_html, set_text_content};
use crate::models::FetchPhase;
use crate::state::WidgetState;
use crate::utils::constants::MOUNT_ID;
use crate::views::message_feed::render_message_rows;
use crate::views::notify_form::render_notify_contents;
use crate::views::progress_bar::set_bar_progress;
use crate::views::waiting_room::{position_text, REFRESH_NOTE_VISIBLE_CLASS};

/// Actualiza los campos de datos de la cola tras un refresh aplicado:
/// barra de progreso, stats, feed de mensajes, nota de error y atributos
/// reflejados en el elemento host. No toca el formulario de notificación.
pub fn update_queue_data(state: &WidgetState) -> Result<(), JsValue> {
    let status = state.status.borrow();

    if let Some(status) = status.as_ref() {
        // Barra de progreso: width y label siguen a progress sin clampear
        set_bar_progress(status.progress)?;

        set_stat("queue-position", &position_text(Some(status.position)))?;
        set_stat("queue-wait-time", &status.wait_time)?;
        set_stat("queue-last-updated", &status.last_updated)?;

        let feed = get_element_by_id("queue-messages")
            .ok_or_else(|| JsValue::from_str("needs full render: queue-messages"))?;
        set_inner_html(&feed, "");
        render_message_rows(&feed, &status.messages)?;

        reflect_status_attributes(state)?;
    }

    update_refresh_note(state.current_phase())?;

    Ok(())
}

/// Muestra u oculta la nota de refresh fallido según la fase
pub fn update_refresh_note(phase: FetchPhase) -> Result<(), JsValue> {
    let note = get_element_by_id("queue-refresh-note")
        .ok_or_else(|| JsValue::from_str("needs full render: queue-refresh-note"))?;

    if phase == FetchPhase::FetchFailed {
        add_class(&note, REFRESH_NOTE_VISIBLE_CLASS)?;
    } else {
        remove_class(&note, REFRESH_NOTE_VISIBLE_CLASS)?;
    }

    Ok(())
}

/// Re-renderiza solo el panel de notificación (tras el submit del email)
pub fn update_notify_panel(state: &WidgetState) -> Result<(), JsValue> {
    let panel = get_element_by_id("queue-notify")
        .ok_or_else(|| JsValue::from_str("needs full render: queue-notify"))?;

    set_inner_html(&panel, "");
    render_notify_contents(&panel, state)?;

    Ok(())
}

/// Refleja position/progress/wait_time/last-updated como atributos del host,
/// para observabilidad y styling externos.
pub fn reflect_status_attributes(state: &WidgetState) -> Result<(), JsValue> {
    let root = match get_element_by_id(MOUNT_ID) {
        Some(el) => el,
        None => return Ok(()),
    };

    if let Some(status) = state.status.borrow().as_ref() {
        root.set_attribute("position", &status.position.to_string())?;
        root.set_attribute("progress", &status.progress.to_string())?;
        root.set_attribute("wait_time", &status.wait_time)?;
        root.set_attribute("last_updated", &status.last_updated)?;
    }

    Ok(())
}

fn set_stat(id: &str, value: &str) -> Result<(), JsValue> {
    let el: Element = get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("needs full render: {}", id)))?;
    set_text_content(&el, value);
    Ok(())
}

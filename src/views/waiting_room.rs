// ============================================================================
// WAITING ROOM VIEW - Componente principal del widget
// ============================================================================
// Un solo contrato de render: header, barra de progreso, stats, feed de
// mensajes, formulario de notificación y footer de salida de la cola.
// Antes del primer load los campos numéricos se muestran vacíos, no en cero.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::builder::ElementBuilder;
use crate::dom::element::append_child;
use crate::models::FetchPhase;
use crate::state::WidgetState;
use crate::views::message_feed::render_message_feed;
use crate::views::notify_form::render_notify_form;
use crate::views::progress_bar::render_progress_bar;

/// Clase que hace visible la nota de refresh fallido
pub const REFRESH_NOTE_VISIBLE_CLASS: &str = "refresh-note--visible";

/// Texto de posición: vacío antes del primer load
pub fn position_text(position: Option<u32>) -> String {
    match position {
        Some(p) => p.to_string(),
        None => String::new(),
    }
}

/// Renderizar el widget completo a partir del estado actual
pub fn render_waiting_room(state: &WidgetState) -> Result<Element, JsValue> {
    let status = state.status.borrow();

    let widget = ElementBuilder::new("div")?
        .class("waiting-room")
        .build();

    let panel = ElementBuilder::new("div")?
        .class("waiting-room-panel")
        .build();

    // Header con el copy de la cola
    let header = ElementBuilder::new("div")?
        .class("queue-header")
        .build();

    let title = ElementBuilder::new("h2")?
        .text("You are in a queue")
        .build();

    let explanation = ElementBuilder::new("p")?
        .text(
            "The website is currently experiencing a high volume of traffic, \
             to keep things running smoothly a queue has been formed. Please \
             see below for an estimation of when it will be your turn.",
        )
        .build();

    append_child(&header, &title)?;
    append_child(&header, &explanation)?;
    append_child(&panel, &header)?;

    // Barra de progreso
    let bar = render_progress_bar(status.as_ref().map(|s| s.progress))?;
    append_child(&panel, &bar)?;

    // Stats: posición, espera estimada, última actualización
    let stats = ElementBuilder::new("div")?.class("stats").build();
    append_child(
        &stats,
        &render_stat_line(
            "Queue position: ",
            "queue-position",
            &position_text(status.as_ref().map(|s| s.position)),
        )?,
    )?;
    append_child(
        &stats,
        &render_stat_line(
            "Estimated wait time: ",
            "queue-wait-time",
            status.as_ref().map(|s| s.wait_time.as_str()).unwrap_or(""),
        )?,
    )?;
    append_child(
        &stats,
        &render_stat_line(
            "Last updated: ",
            "queue-last-updated",
            status.as_ref().map(|s| s.last_updated.as_str()).unwrap_or(""),
        )?,
    )?;
    append_child(&panel, &stats)?;

    // Nota de refresh fallido: siempre en el DOM, visible solo en FetchFailed
    let note = ElementBuilder::new("div")?
        .class("refresh-note")
        .id("queue-refresh-note")?
        .text("Unable to refresh your queue status. Your last known position is shown.")
        .build();
    if state.current_phase() == FetchPhase::FetchFailed {
        crate::dom::element::add_class(&note, REFRESH_NOTE_VISIBLE_CLASS)?;
    }
    append_child(&panel, &note)?;

    // Feed de mensajes, en orden de inserción
    let feed = render_message_feed(
        status.as_ref().map(|s| s.messages.as_slice()).unwrap_or(&[]),
    )?;
    append_child(&panel, &feed)?;

    // Alta de notificación por email
    let notify = render_notify_form(state)?;
    append_child(&panel, &notify)?;

    // Footer: salir de la cola
    let footer = ElementBuilder::new("div")?.class("footer").build();
    let exit_link = ElementBuilder::new("a")?
        .attr("href", "#")?
        .text("Exit the queue")
        .build();
    let exit_hint = ElementBuilder::new("span")?
        .text(" (And give up your position)")
        .build();
    append_child(&footer, &exit_link)?;
    append_child(&footer, &exit_hint)?;
    append_child(&panel, &footer)?;

    append_child(&widget, &panel)?;

    Ok(widget)
}

fn render_stat_line(label: &str, value_id: &str, value: &str) -> Result<Element, JsValue> {
    let line = ElementBuilder::new("p")?.class("stat-line").build();

    let label_span = ElementBuilder::new("span")?.text(label).build();
    let value_span = ElementBuilder::new("span")?
        .id(value_id)?
        .text(value)
        .build();

    append_child(&line, &label_span)?;
    append_child(&line, &value_span)?;

    Ok(line)
}

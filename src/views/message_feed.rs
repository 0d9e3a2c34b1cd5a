// ============================================================================
// MESSAGE FEED VIEW - Feed de mensajes del servidor
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::builder::ElementBuilder;
use crate::dom::element::append_child;
use crate::models::Message;

/// Renderizar el contenedor del feed con sus filas
pub fn render_message_feed(messages: &[Message]) -> Result<Element, JsValue> {
    let feed = ElementBuilder::new("div")?
        .class("messages")
        .id("queue-messages")?
        .build();

    render_message_rows(&feed, messages)?;

    Ok(feed)
}

/// Agregar una fila por mensaje, en el orden recibido.
/// Lista vacía => ninguna fila.
pub fn render_message_rows(feed: &Element, messages: &[Message]) -> Result<(), JsValue> {
    for message in messages {
        let row = ElementBuilder::new("div")?.class("message-row").build();

        let body = ElementBuilder::new("div")?
            .class("message-body")
            .text(&message.message)
            .build();

        let timestamp = ElementBuilder::new("div")?
            .class("message-timestamp")
            .text(&message.timestamp)
            .build();

        append_child(&row, &body)?;
        append_child(&row, &timestamp)?;
        append_child(feed, &row)?;
    }

    Ok(())
}

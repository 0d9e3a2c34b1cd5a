// ============================================================================
// APP - Montaje y ciclo de render del widget
// ============================================================================

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::element::{append_child, get_attribute, get_element_by_id, set_inner_html};
use crate::dom::incremental::{reflect_status_attributes, update_notify_panel, update_queue_data};
use crate::state::{IncrementalUpdate, WidgetState};
use crate::utils::constants::{DEFAULT_STATUS_URL, MOUNT_ID};
use crate::views::render_waiting_room;

/// Instancia montada del widget
pub struct App {
    state: WidgetState,
    root: Element,
}

impl App {
    /// Monta el widget sobre el elemento host #waiting-room.
    /// La status_url viene del atributo data-status-url, con fallback a la
    /// configuración de compilación.
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(MOUNT_ID)
            .ok_or_else(|| JsValue::from_str("No #waiting-room element found"))?;

        let status_url = get_attribute(&root, "data-status-url")
            .unwrap_or_else(|| DEFAULT_STATUS_URL.to_string());

        log::info!("🏠 Widget montado con status_url: {}", status_url);

        Ok(Self {
            state: WidgetState::new(status_url),
            root,
        })
    }

    /// Re-render completo del widget dentro del host
    pub fn render(&self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");

        let widget = render_waiting_room(&self.state)?;
        append_child(&self.root, &widget)?;

        reflect_status_attributes(&self.state)?;

        Ok(())
    }

    /// Actualización incremental de elementos específicos
    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        match update {
            IncrementalUpdate::QueueData => update_queue_data(&self.state),
            IncrementalUpdate::NotifyPanel => update_notify_panel(&self.state),
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Polling opcional: si el host declara data-poll-ms, el widget dispara
    /// su propio refresh periódico. Sin el atributo, el refresh queda a
    /// cargo de la página anfitriona via refresh_queue_data().
    pub fn start_polling(&self) {
        let poll_ms = get_attribute(&self.root, "data-poll-ms")
            .and_then(|v| v.parse::<u32>().ok());

        if let Some(ms) = poll_ms {
            log::info!("⏰ Polling de estado configurado cada {}ms", ms);
            Interval::new(ms, || crate::refresh_queue_data()).forget();
        }
    }
}

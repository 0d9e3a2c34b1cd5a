// ============================================================================
// QUEUE VIEWMODEL - Ciclo refresh/render de la cola
// ============================================================================
// Orquesta el fetch del estado: toma una generación, espera la respuesta y
// la aplica solo si la generación sigue vigente. El render ve el estado
// nuevo completo o no ve nada: nunca un update parcial a mitad de fetch.
// ============================================================================

use wasm_bindgen_futures::spawn_local;

use crate::rerender_widget_with;
use crate::services::QueueService;
use crate::state::{IncrementalUpdate, UpdateType, WidgetState};

/// ViewModel del ciclo de datos de la cola
pub struct QueueViewModel {
    state: WidgetState,
}

impl QueueViewModel {
    pub fn new(state: WidgetState) -> Self {
        Self { state }
    }

    /// Dispara un refresh. Refreshes solapados son válidos: cada uno lleva
    /// su número de generación y solo la última generación emitida aplica
    /// su resultado.
    pub fn refresh(&self) {
        let state = self.state.clone();
        let seq = state.begin_fetch();
        let url = state.status_url.borrow().clone();

        log::info!("🔄 Refresh de cola (generación {}): {}", seq, url);

        spawn_local(async move {
            let result = QueueService::fetch_status(&url).await;

            if state.try_apply(seq, result) {
                rerender_widget_with(UpdateType::Incremental(IncrementalUpdate::QueueData));
            }
        });
    }
}

// ============================================================================
// HEARTBEAT BEACON - Señal de vida de la sesión
// ============================================================================
// Un solo POST por carga de página, tras un delay corto en un timer one-shot.
// Fire-and-forget: la respuesta, el status code y los errores se ignoran.
// No hay retry ni cancelación; navegar fuera de la página puede abortarlo.
// ============================================================================

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::services::session_token::SessionTokenProvider;
use crate::utils::constants::{heartbeat_url, HEARTBEAT_DELAY_MS};

/// Body del POST /heartbeat
#[derive(Debug, Serialize, PartialEq)]
pub struct HeartbeatPayload {
    pub token: String,
}

/// Beacon de liveness: reporta al servidor que la sesión sigue activa
pub struct HeartbeatBeacon {
    token_provider: Box<dyn SessionTokenProvider>,
    endpoint: String,
}

impl HeartbeatBeacon {
    pub fn new(token_provider: Box<dyn SessionTokenProvider>) -> Self {
        Self {
            token_provider,
            endpoint: heartbeat_url(),
        }
    }

    /// Programa el beacon: un timer one-shot de 100ms y un único POST.
    /// No bloquea el render; el timer no se puede cancelar una vez armado.
    pub fn schedule(self) {
        log::info!("💓 Heartbeat programado en {}ms", HEARTBEAT_DELAY_MS);

        Timeout::new(HEARTBEAT_DELAY_MS, move || {
            // Cookie ausente => token vacío; el beacon se envía igual
            let payload = HeartbeatPayload {
                token: self.token_provider.token(),
            };
            let endpoint = self.endpoint;

            spawn_local(async move {
                log::debug!("💓 Enviando heartbeat a {}", endpoint);

                match Request::post(&endpoint).json(&payload) {
                    Ok(request) => {
                        // Respuesta y errores ignorados: best-effort
                        let _ = request.send().await;
                    }
                    Err(e) => {
                        log::debug!("💓 Heartbeat no serializable: {}", e);
                    }
                }
            });
        })
        .forget();
    }
}

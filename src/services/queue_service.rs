// ============================================================================
// QUEUE SERVICE - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace el GET del estado de la cola.
// El caller decide qué hacer con cada clase de error.
// ============================================================================

use gloo_net::http::Request;
use thiserror::Error;

use crate::models::QueueStatus;

/// Clases de fallo del fetch de estado
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    /// La request no completó o el servidor respondió con error HTTP
    #[error("network error: {0}")]
    Network(String),

    /// El body no decodifica como el shape de QueueStatus
    #[error("malformed status payload: {0}")]
    Malformed(String),
}

/// Cliente del endpoint de estado - stateless
pub struct QueueService;

impl QueueService {
    /// GET {url} y decode del body como QueueStatus.
    /// Sin timeout configurado: una request colgada cuelga esta generación
    /// de refresh; una generación posterior la supersede.
    pub async fn fetch_status(url: &str) -> Result<QueueStatus, FetchError> {
        log::debug!("📡 Fetch de estado de cola: {}", url);

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Network(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let status = response
            .json::<QueueStatus>()
            .await
            .map_err(|e| FetchError::Malformed(e.to_string()))?;

        log::debug!(
            "📡 Estado recibido: posición {}, progreso {}%, {} mensajes",
            status.position,
            status.progress,
            status.messages.len()
        );

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn las_clases_de_error_se_distinguen() {
        let network = FetchError::Network("timeout".into());
        let malformed = FetchError::Malformed("missing field `position`".into());

        assert_ne!(network, malformed);
        assert_eq!(network.to_string(), "network error: timeout");
        assert_eq!(
            malformed.to_string(),
            "malformed status payload: missing field `position`"
        );
    }
}

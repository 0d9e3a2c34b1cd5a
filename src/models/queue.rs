// ============================================================================
// QUEUE STATUS - Modelo del estado de la cola
// ============================================================================
// Shape exacto de la respuesta JSON del endpoint /status.
// Todos los campos de display vienen pre-formateados del servidor:
// el cliente NO parsea ni transforma wait_time / last_updated.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Estado de la cola tal como lo reporta el servidor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueStatus {
    /// Posición en la cola (convención del servidor, no se calcula aquí)
    pub position: u32,

    /// Porcentaje de avance en [0,100]; fuera de rango se pasa sin clampear
    pub progress: f64,

    /// Estimación de espera, pre-formateada por el servidor
    pub wait_time: String,

    /// Timestamp de última actualización, pre-formateado por el servidor
    pub last_updated: String,

    /// Mensajes del servidor; el orden de inserción es el orden de display
    pub messages: Vec<Message>,
}

/// Mensaje individual del feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub timestamp: String,
    pub message: String,
}

/// Fase del ciclo de fetch del widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// Aún no se hizo ningún fetch; los campos numéricos se muestran vacíos
    Uninitialized,
    /// Hay un fetch en vuelo y todavía no hay datos previos
    Loading,
    /// El último fetch aplicado fue exitoso
    Loaded,
    /// El último fetch aplicado falló (red o payload malformado)
    FetchFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_payload_completo() {
        let json = r#"{
            "position": 42,
            "progress": 61.5,
            "wait_time": "119 Minutes",
            "last_updated": "14:03:22",
            "messages": [
                {"timestamp": "13:58", "message": "High traffic today"},
                {"timestamp": "14:01", "message": "Queue is moving"}
            ]
        }"#;

        let status: QueueStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.position, 42);
        assert_eq!(status.progress, 61.5);
        assert_eq!(status.wait_time, "119 Minutes");
        assert_eq!(status.last_updated, "14:03:22");
        assert_eq!(status.messages.len(), 2);
    }

    #[test]
    fn mensajes_conservan_orden_de_insercion() {
        let json = r#"{
            "position": 1,
            "progress": 0,
            "wait_time": "",
            "last_updated": "",
            "messages": [
                {"timestamp": "09:00", "message": "c"},
                {"timestamp": "08:00", "message": "a"},
                {"timestamp": "08:30", "message": "b"}
            ]
        }"#;

        // El cliente no ordena por timestamp: display = orden recibido
        let status: QueueStatus = serde_json::from_str(json).unwrap();
        let texts: Vec<&str> = status.messages.iter().map(|m| m.message.as_str()).collect();
        assert_eq!(texts, vec!["c", "a", "b"]);
    }

    #[test]
    fn lista_de_mensajes_vacia_es_valida() {
        let json = r#"{"position":0,"progress":0,"wait_time":"","last_updated":"","messages":[]}"#;
        let status: QueueStatus = serde_json::from_str(json).unwrap();
        assert!(status.messages.is_empty());
    }

    #[test]
    fn progress_fuera_de_rango_no_se_clampa() {
        let json = r#"{"position":0,"progress":250.0,"wait_time":"","last_updated":"","messages":[]}"#;
        let status: QueueStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.progress, 250.0);
    }

    #[test]
    fn payload_sin_campo_obligatorio_es_rechazado() {
        // Sin "position" el decode falla: el error se clasifica como Malformed
        // en la capa de servicio, nunca llega NaN/undefined al estado
        let json = r#"{"progress":10,"wait_time":"","last_updated":"","messages":[]}"#;
        assert!(serde_json::from_str::<QueueStatus>(json).is_err());
    }
}

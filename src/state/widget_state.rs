// ============================================================================
// WIDGET STATE - Estado transitorio del widget de sala de espera
// ============================================================================
// Propiedad exclusiva de la instancia del widget, mutado solo desde el hilo
// de UI via Rc<RefCell>. Sin locks: no hay data race posible por construcción.
//
// Secuenciación de fetches: cada refresh toma un número de generación
// monotónico; una respuesta solo se aplica si su generación sigue siendo la
// última emitida. Respuestas supersedidas se descartan.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::models::{FetchPhase, QueueStatus, SignupState};
use crate::services::FetchError;

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (montaje inicial, fallback)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug)]
pub enum IncrementalUpdate {
    /// Datos de la cola: barra, stats, mensajes, nota y atributos reflejados
    QueueData,
    /// Panel de notificación (tras el submit del email)
    NotifyPanel,
}

/// Estado del widget, compartible entre closures de eventos
#[derive(Clone)]
pub struct WidgetState {
    /// URL del endpoint de estado, configurada al montar
    pub status_url: Rc<RefCell<String>>,

    /// Último QueueStatus aplicado; None antes del primer load
    pub status: Rc<RefCell<Option<QueueStatus>>>,

    /// Fase del ciclo de fetch
    pub phase: Rc<RefCell<FetchPhase>>,

    /// Email tipeado en el formulario de notificación
    pub email: Rc<RefCell<String>>,

    /// Estado del alta por email (una sola vía)
    pub signup: Rc<RefCell<SignupState>>,

    // Generación del último fetch emitido
    request_seq: Rc<Cell<u64>>,
}

impl WidgetState {
    pub fn new(status_url: String) -> Self {
        Self {
            status_url: Rc::new(RefCell::new(status_url)),
            status: Rc::new(RefCell::new(None)),
            phase: Rc::new(RefCell::new(FetchPhase::Uninitialized)),
            email: Rc::new(RefCell::new(String::new())),
            signup: Rc::new(RefCell::new(SignupState::default())),
            request_seq: Rc::new(Cell::new(0)),
        }
    }

    /// Inicia una generación de fetch: incrementa la secuencia y pasa a
    /// Loading si todavía no hay datos que mostrar.
    pub fn begin_fetch(&self) -> u64 {
        let seq = self.request_seq.get() + 1;
        self.request_seq.set(seq);

        if *self.phase.borrow() == FetchPhase::Uninitialized {
            *self.phase.borrow_mut() = FetchPhase::Loading;
        }

        seq
    }

    /// Aplica el resultado de un fetch si su generación sigue vigente.
    /// Devuelve true si el estado cambió (el caller debe re-renderizar).
    ///
    /// Éxito: sobreescribe todos los campos de display de una vez (atómico
    /// respecto del render). Fallo: conserva el último estado bueno conocido
    /// y marca la fase como FetchFailed.
    pub fn try_apply(&self, seq: u64, result: Result<QueueStatus, FetchError>) -> bool {
        if seq != self.request_seq.get() {
            log::warn!(
                "⏭️ Respuesta descartada: generación {} supersedida por {}",
                seq,
                self.request_seq.get()
            );
            return false;
        }

        match result {
            Ok(status) => {
                *self.status.borrow_mut() = Some(status);
                *self.phase.borrow_mut() = FetchPhase::Loaded;
            }
            Err(e) => {
                log::error!("❌ Refresh de cola falló: {}", e);
                *self.phase.borrow_mut() = FetchPhase::FetchFailed;
            }
        }

        true
    }

    /// Transición de alta por email; true solo la primera vez
    pub fn submit_signup(&self) -> bool {
        self.signup.borrow_mut().submit()
    }

    pub fn set_email(&self, value: String) {
        *self.email.borrow_mut() = value;
    }

    pub fn current_phase(&self) -> FetchPhase {
        *self.phase.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;

    fn status(position: u32, progress: f64) -> QueueStatus {
        QueueStatus {
            position,
            progress,
            wait_time: "10 Minutes".into(),
            last_updated: "12:00:00".into(),
            messages: vec![Message {
                timestamp: "11:59".into(),
                message: "moving".into(),
            }],
        }
    }

    #[test]
    fn fases_iniciales() {
        let state = WidgetState::new("/status".into());
        assert_eq!(state.current_phase(), FetchPhase::Uninitialized);
        assert!(state.status.borrow().is_none());

        let seq = state.begin_fetch();
        assert_eq!(seq, 1);
        assert_eq!(state.current_phase(), FetchPhase::Loading);
    }

    #[test]
    fn aplica_resultado_vigente() {
        let state = WidgetState::new("/status".into());
        let seq = state.begin_fetch();

        assert!(state.try_apply(seq, Ok(status(7, 30.0))));
        assert_eq!(state.current_phase(), FetchPhase::Loaded);
        assert_eq!(state.status.borrow().as_ref().unwrap().position, 7);
    }

    #[test]
    fn descarta_respuesta_supersedida() {
        // Dos refreshes solapados: la respuesta vieja llega última
        let state = WidgetState::new("/status".into());
        let seq1 = state.begin_fetch();
        let seq2 = state.begin_fetch();

        assert!(state.try_apply(seq2, Ok(status(5, 50.0))));
        // seq1 quedó supersedida: se descarta aunque llegue después
        assert!(!state.try_apply(seq1, Ok(status(9, 10.0))));

        assert_eq!(state.status.borrow().as_ref().unwrap().position, 5);
    }

    #[test]
    fn la_ultima_generacion_gana_aunque_llegue_primero() {
        let state = WidgetState::new("/status".into());
        let seq1 = state.begin_fetch();
        let seq2 = state.begin_fetch();

        // La respuesta de seq2 llega primero y se aplica
        assert!(state.try_apply(seq2, Ok(status(3, 80.0))));
        // La de seq1 llega tarde y no pisa nada
        assert!(!state.try_apply(seq1, Err(FetchError::Network("late".into()))));

        assert_eq!(state.current_phase(), FetchPhase::Loaded);
        assert_eq!(state.status.borrow().as_ref().unwrap().position, 3);
    }

    #[test]
    fn fallo_conserva_ultimo_estado_bueno() {
        let state = WidgetState::new("/status".into());
        let seq = state.begin_fetch();
        assert!(state.try_apply(seq, Ok(status(7, 30.0))));

        let seq = state.begin_fetch();
        assert!(state.try_apply(seq, Err(FetchError::Malformed("bad json".into()))));

        // Fase de error, pero los datos previos siguen disponibles
        assert_eq!(state.current_phase(), FetchPhase::FetchFailed);
        assert_eq!(state.status.borrow().as_ref().unwrap().position, 7);
    }

    #[test]
    fn recupera_despues_de_un_fallo() {
        let state = WidgetState::new("/status".into());
        let seq = state.begin_fetch();
        assert!(state.try_apply(seq, Err(FetchError::Network("offline".into()))));
        assert_eq!(state.current_phase(), FetchPhase::FetchFailed);

        let seq = state.begin_fetch();
        assert!(state.try_apply(seq, Ok(status(2, 95.0))));
        assert_eq!(state.current_phase(), FetchPhase::Loaded);
    }

    #[test]
    fn signup_es_de_una_sola_via() {
        let state = WidgetState::new("/status".into());
        state.set_email("user@example.com".into());

        assert!(state.submit_signup());
        assert!(state.signup.borrow().is_submitted());
        assert!(!state.submit_signup());
        assert!(state.signup.borrow().is_submitted());
    }
}

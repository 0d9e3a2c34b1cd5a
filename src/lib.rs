// ============================================================================
// QUEUBIOUS WAITING ROOM WIDGET - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica del ciclo refresh/render y del alta por email
// - Services: SOLO comunicación HTTP y acceso al token de sesión
// - State: Estado del widget con Rc<RefCell>
// - Models: Shapes compartidos con el servidor de cola
// ============================================================================

pub mod app;
pub mod dom;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::services::{CookieTokenProvider, HeartbeatBeacon};
use crate::state::UpdateType;
use crate::viewmodels::QueueViewModel;

// Variable estática global para mantener la instancia del widget
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::default());
    log::info!("🚀 Queubious Waiting Room Widget - Rust puro + WASM");

    // El beacon corre independiente del widget: una vez por carga de página,
    // también en páginas donde el widget no está montado
    HeartbeatBeacon::new(Box::new(CookieTokenProvider::new())).schedule();

    match App::new() {
        Ok(app) => {
            app.render()?;
            app.start_polling();

            APP.with(|cell| {
                *cell.borrow_mut() = Some(app);
            });
        }
        Err(e) => {
            // Página sin sala de espera: solo corre el heartbeat
            log::warn!("⚠️ Widget no montado: {:?}", e);
        }
    }

    Ok(())
}

/// Re-render completo del widget
pub fn rerender_widget() {
    rerender_widget_with(UpdateType::FullRender);
}

/// Actualiza el widget con un tipo específico de update.
/// Los updates incrementales hacen fallback a re-render completo cuando los
/// elementos objetivo no existen todavía.
pub fn rerender_widget_with(update_type: UpdateType) {
    APP.with(|cell| match update_type {
        UpdateType::Incremental(inc) => {
            let needs_full_render = {
                if let Some(ref app) = *cell.borrow() {
                    match app.update_incremental(inc) {
                        Ok(()) => false,
                        Err(e) => {
                            let error_str = format!("{:?}", e);
                            if error_str.contains("needs full render") {
                                log::info!("🔄 Cambiando a re-render completo");
                                true
                            } else {
                                log::error!("❌ Error en actualización incremental: {:?}", e);
                                false
                            }
                        }
                    }
                } else {
                    log::warn!("⚠️ Widget no está inicializado");
                    false
                }
            };

            if needs_full_render {
                if let Some(ref app) = *cell.borrow() {
                    if let Err(e) = app.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                }
            }
        }
        UpdateType::FullRender => {
            if let Some(ref app) = *cell.borrow() {
                if let Err(e) = app.render() {
                    log::error!("❌ Error re-renderizando: {:?}", e);
                }
            } else {
                log::warn!("⚠️ Widget no está inicializado");
            }
        }
    });
}

/// Refresh del estado de la cola, invocable desde la página anfitriona
/// (timer propio o interacción). Refreshes solapados se resuelven por
/// número de generación: gana la última generación emitida.
#[wasm_bindgen]
pub fn refresh_queue_data() {
    APP.with(|cell| {
        if let Some(ref app) = *cell.borrow() {
            QueueViewModel::new(app.state().clone()).refresh();
        } else {
            log::warn!("⚠️ refresh_queue_data llamado sin widget montado");
        }
    });
}

/// Re-render completo invocable desde JavaScript
#[wasm_bindgen]
pub fn rerender_widget_wasm() {
    rerender_widget();
}

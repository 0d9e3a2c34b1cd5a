// ============================================================================
// SIGNUP VIEWMODEL - Lógica del alta por email
// ============================================================================

use crate::rerender_widget_with;
use crate::state::{IncrementalUpdate, UpdateType, WidgetState};

/// ViewModel del formulario de notificación
pub struct SignupViewModel {
    state: WidgetState,
}

impl SignupViewModel {
    pub fn new(state: WidgetState) -> Self {
        Self { state }
    }

    /// Submit del formulario: registra el email para diagnóstico y voltea
    /// el flag optimista. No espera confirmación del servidor. Un segundo
    /// submit sin remount no tiene efecto adicional.
    pub fn handle_submit(&self) {
        log::info!("📧 Alta de notificación: {}", self.state.email.borrow());

        if self.state.submit_signup() {
            rerender_widget_with(UpdateType::Incremental(IncrementalUpdate::NotifyPanel));
        }
    }

    /// Actualiza el email en cada evento input, sin validación propia
    pub fn handle_change(&self, value: String) {
        self.state.set_email(value);
    }
}

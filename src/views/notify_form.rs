// ============================================================================
// NOTIFY FORM VIEW - Alta de notificación por email
// ============================================================================
// El formulario valida solo con las constraints nativas (required, type
// email). El submit voltea el estado local sin esperar confirmación del
// servidor; el panel pasa a mostrar el texto de confirmación.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::builder::ElementBuilder;
use crate::dom::element::{append_child, create_element, set_attribute, set_class_name};
use crate::dom::events::{on_input, on_submit};
use crate::state::WidgetState;
use crate::viewmodels::SignupViewModel;

/// Renderizar el panel de notificación completo
pub fn render_notify_form(state: &WidgetState) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?
        .class("notify")
        .id("queue-notify")?
        .build();

    render_notify_contents(&panel, state)?;

    Ok(panel)
}

/// Renderizar el contenido del panel según el estado de alta.
/// También lo usa la actualización incremental tras el submit.
pub fn render_notify_contents(panel: &Element, state: &WidgetState) -> Result<(), JsValue> {
    if state.signup.borrow().is_submitted() {
        let confirmation = ElementBuilder::new("p")?
            .class("notify-confirmation")
            .text(
                "You will receive an email when it's your turn, you will have \
                 10 minutes to click the link in the email.",
            )
            .build();
        append_child(panel, &confirmation)?;
        return Ok(());
    }

    let prompt = ElementBuilder::new("p")?
        .text("Send me an email when it's my turn:")
        .build();

    let form = create_element("form")?;
    set_class_name(&form, "notify-form");

    let input = create_element("input")?;
    set_attribute(&input, "type", "email")?;
    set_attribute(&input, "placeholder", "your@mail.com")?;
    set_attribute(&input, "required", "")?;
    set_class_name(&input, "notify-input");
    if !state.email.borrow().is_empty() {
        set_attribute(&input, "value", &state.email.borrow())?;
    }

    // Cada evento input sobreescribe el email en el estado, sin debounce
    {
        let vm = SignupViewModel::new(state.clone());
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                vm.handle_change(target.value());
            }
        })?;
    }

    let button = ElementBuilder::new("button")?
        .class("notify-button")
        .text("Sign Up")
        .build();

    append_child(&form, &input)?;
    append_child(&form, &button)?;

    // El submit voltea el flag y re-renderiza solo este panel
    {
        let vm = SignupViewModel::new(state.clone());
        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();
            vm.handle_submit();
        })?;
    }

    append_child(panel, &prompt)?;
    append_child(panel, &form)?;

    Ok(())
}

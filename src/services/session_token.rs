// ============================================================================
// SESSION TOKEN PROVIDER - Acceso al token de sesión
// ============================================================================
// El token es opaco y lo emite el servidor via cookie; el cliente solo lo
// lee. La capability inyectable desacopla al beacon del mecanismo concreto
// de almacenamiento (cookie vs. estado local en tests).
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::utils::constants::SESSION_COOKIE;

/// Fuente del token de sesión de la cola
pub trait SessionTokenProvider {
    /// Token actual; cadena vacía si no hay sesión
    fn token(&self) -> String;
}

/// Implementación de producción: lee `document.cookie`
pub struct CookieTokenProvider {
    cookie_name: String,
}

impl CookieTokenProvider {
    pub fn new() -> Self {
        Self {
            cookie_name: SESSION_COOKIE.to_string(),
        }
    }

    fn raw_cookies() -> Option<String> {
        let document = web_sys::window()?.document()?;
        let html_document = document.dyn_into::<HtmlDocument>().ok()?;
        html_document.cookie().ok()
    }
}

impl Default for CookieTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTokenProvider for CookieTokenProvider {
    fn token(&self) -> String {
        match Self::raw_cookies() {
            Some(raw) => match_cookie(&raw, &self.cookie_name),
            None => String::new(),
        }
    }
}

/// Provider fijo, para inyectar en tests y demos sin tocar cookies
pub struct StaticTokenProvider {
    value: String,
}

impl StaticTokenProvider {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl SessionTokenProvider for StaticTokenProvider {
    fn token(&self) -> String {
        self.value.clone()
    }
}

/// Busca el primer par `name=value` en el cookie string crudo.
/// Trimea espacios alrededor del `=`; sin match devuelve cadena vacía.
pub fn match_cookie(raw: &str, name: &str) -> String {
    for pair in raw.split(';') {
        if let Some((key, value)) = pair.split_once('=') {
            if key.trim() == name {
                return value.trim().to_string();
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cookie_presente() {
        assert_eq!(match_cookie("queubioustoken=abc123", "queubioustoken"), "abc123");
    }

    #[test]
    fn cookie_ausente_devuelve_vacio() {
        assert_eq!(match_cookie("", "queubioustoken"), "");
        assert_eq!(match_cookie("other=1; session=xyz", "queubioustoken"), "");
    }

    #[test]
    fn trimea_espacios_alrededor_del_igual() {
        assert_eq!(
            match_cookie("foo=1;  queubioustoken = abc123 ; bar=2", "queubioustoken"),
            "abc123"
        );
    }

    #[test]
    fn gana_el_primer_par_que_matchea() {
        assert_eq!(
            match_cookie("queubioustoken=first; queubioustoken=second", "queubioustoken"),
            "first"
        );
    }

    #[test]
    fn el_nombre_debe_coincidir_completo() {
        // "xqueubioustoken" no es nuestra cookie
        assert_eq!(match_cookie("xqueubioustoken=zzz", "queubioustoken"), "");
        assert_eq!(
            match_cookie("xqueubioustoken=zzz; queubioustoken=abc", "queubioustoken"),
            "abc"
        );
    }

    #[test]
    fn provider_estatico_devuelve_su_valor() {
        let provider = StaticTokenProvider::new("abc123");
        assert_eq!(provider.token(), "abc123");

        let empty = StaticTokenProvider::new("");
        assert_eq!(empty.token(), "");
    }
}

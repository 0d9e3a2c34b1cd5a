/// URL base de la aplicación de cola.
/// Configurada en tiempo de compilación via build.rs + .env:
/// - Por defecto: cadena vacía (mismo origen)
/// - Producción: via APP_URL env var
pub const APP_URL: &str = match option_env!("APP_URL") {
    Some(url) => url,
    None => "",
};

/// URL por defecto del endpoint de estado; el atributo data-status-url
/// del elemento host tiene prioridad.
pub const DEFAULT_STATUS_URL: &str = match option_env!("STATUS_URL") {
    Some(url) => url,
    None => "/status",
};

/// Nombre de la cookie con el token de sesión (la emite el servidor)
pub const SESSION_COOKIE: &str = "queubioustoken";

/// Delay del heartbeat tras la carga de la página
pub const HEARTBEAT_DELAY_MS: u32 = 100;

/// ID del elemento host donde se monta el widget
pub const MOUNT_ID: &str = "waiting-room";

/// Endpoint del heartbeat
pub fn heartbeat_url() -> String {
    format!("{}/heartbeat", APP_URL)
}

//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use once_cell::sync::Lazy;
use std::env;

/// Configuración global de la aplicación (extensible para más secciones: logging, etc.).
pub struct AppConfig {
    /// Configuración específica del programa de demostración.
    pub demo: DemoConfig,
}

/// Parámetros del programa de demostración.
pub struct DemoConfig {
    /// Cantidad de eventos de proceso generados.
    pub commands: usize,
    /// Imprime los registros JSON ingresados con formato legible.
    pub pretty: bool,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let commands = env::var("EVENTO_DEMO_COMMANDS").ok()
        .and_then(|v| v.parse().ok()).unwrap_or(3);
    let pretty = env::var("EVENTO_DEMO_PRETTY").ok().as_deref() == Some("1");
    AppConfig {
        demo: DemoConfig { commands, pretty },
    }
});

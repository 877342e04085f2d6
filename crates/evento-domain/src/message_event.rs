use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;
use std::fmt;

/// Evento de mensaje: el payload puede estar en blanco, pero debe estar
/// presente. A diferencia de `ProcessEvent`, admite un instante explícito.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    message: String,
    occurred_on: DateTime<Utc>,
}

impl MessageEvent {
    /// Crea el evento asignando el instante actual.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_occurred_on(message, None)
    }

    /// Forma de dos argumentos: acepta un instante explícito de ocurrencia.
    /// Si el instante es `None` se sustituye por el actual.
    pub fn with_occurred_on(message: impl Into<String>,
                            occurred_on: impl Into<Option<DateTime<Utc>>>)
                            -> Self {
        MessageEvent { message: message.into(),
                       occurred_on: occurred_on.into().unwrap_or_else(Utc::now) }
    }

    /// Decodifica un registro externo con campo `message` y campo opcional
    /// `occurred_on` (RFC 3339; ausente o nulo equivale al instante actual).
    ///
    /// # Errores
    /// Retorna `DomainError::ValidationError` si `message` falta, es nulo o
    /// no es una cadena, o si `occurred_on` está presente pero no parsea.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, DomainError> {
        let message = match value.get("message").and_then(|v| v.as_str()) {
            Some(message) => message,
            None => return Err(DomainError::ValidationError("message is required".to_string())),
        };
        let occurred_on = match value.get("occurred_on") {
            None | Some(serde_json::Value::Null) => None,
            Some(v) => match v.as_str().and_then(|s| DateTime::parse_from_rfc3339(s).ok()) {
                Some(t) => Some(t.with_timezone(&Utc)),
                None => {
                    return Err(DomainError::ValidationError(
                        "occurred_on must be an RFC 3339 timestamp".to_string(),
                    ))
                }
            },
        };
        Ok(MessageEvent::with_occurred_on(message, occurred_on))
    }

    pub fn message(&self) -> &str { &self.message }
    pub fn occurred_on(&self) -> DateTime<Utc> { self.occurred_on }
}

impl fmt::Display for MessageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<message: {}, {}>", self.message, self.occurred_on)
    }
}

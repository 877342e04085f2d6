//! Suma de variantes de evento y capacidad compartida `occurred_on`.
//!
//! Rol en el dominio:
//! - `Event` es el tipo que viaja hacia el almacén: cada variante envuelve
//!   un objeto de valor ya validado en su construcción.
//! - La única capacidad común observable es el instante de ocurrencia;
//!   cada variante aporta su propio payload.
//! - Los registros externos entran por `from_value`, etiquetados por el
//!   campo `type` (`process_event` | `message_event`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::{DomainError, MessageEvent, ProcessEvent};

/// Algo que ocurrió, inmutable y con instante de ocurrencia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Process(ProcessEvent),
    Message(MessageEvent),
}

impl Event {
    /// Instante en el que ocurrió el evento.
    pub fn occurred_on(&self) -> DateTime<Utc> {
        match self {
            Event::Process(e) => e.occurred_on(),
            Event::Message(e) => e.occurred_on(),
        }
    }

    /// Discriminador estable de la variante (registros externos y logs).
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Process(_) => "process_event",
            Event::Message(_) => "message_event",
        }
    }

    /// Decodifica un registro externo etiquetado por `type`, delegando la
    /// validación del payload en la variante correspondiente.
    ///
    /// # Errores
    /// - `type` ausente o no-cadena: `event type is required`.
    /// - `type` desconocido: `unsupported event type: <t>`.
    /// - Payload inválido: el mensaje fijo de la variante.
    pub fn from_value(value: &Value) -> Result<Event, DomainError> {
        match value.get("type").and_then(|v| v.as_str()) {
            Some("process_event") => ProcessEvent::from_value(value).map(Event::from),
            Some("message_event") => MessageEvent::from_value(value).map(Event::from),
            Some(other) => {
                Err(DomainError::ValidationError(format!("unsupported event type: {other}")))
            }
            None => Err(DomainError::ValidationError("event type is required".to_string())),
        }
    }
}

impl From<ProcessEvent> for Event {
    fn from(event: ProcessEvent) -> Self { Event::Process(event) }
}

impl From<MessageEvent> for Event {
    fn from(event: MessageEvent) -> Self { Event::Message(event) }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Process(e) => fmt::Display::fmt(e, f),
            Event::Message(e) => fmt::Display::fmt(e, f),
        }
    }
}

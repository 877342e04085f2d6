use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessEvent {
    command: String,
    occurred_on: DateTime<Utc>,
}

impl ProcessEvent {
    // El instante de ocurrencia siempre es el de construcción; no existe
    // forma pública de fijarlo explícitamente para este tipo de evento.
    pub fn new(command: impl Into<String>) -> Result<Self, DomainError> {
        let command = command.into();
        if command.trim().is_empty() {
            return Err(DomainError::ValidationError("valid command is required".to_string()));
        }
        Ok(ProcessEvent { command, occurred_on: Utc::now() })
    }

    /// Decodifica un registro externo con campo `command`.
    ///
    /// # Errores
    /// Retorna `DomainError::ValidationError` con el mismo mensaje que `new`
    /// cuando el campo falta, es nulo, no es una cadena o está en blanco.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, DomainError> {
        match value.get("command").and_then(|v| v.as_str()) {
            Some(command) => ProcessEvent::new(command),
            None => Err(DomainError::ValidationError("valid command is required".to_string())),
        }
    }

    pub fn command(&self) -> &str { &self.command }
    pub fn occurred_on(&self) -> DateTime<Utc> { self.occurred_on }
}

impl fmt::Display for ProcessEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<command: {}, {}>", self.command, self.occurred_on)
    }
}

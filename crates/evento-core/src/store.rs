use log::{debug, warn};
use serde_json::Value;

use evento_domain::Event;

use crate::errors::StoreError;

/// Almacenamiento de eventos append-only.
pub trait EventStore {
    /// Agrega un evento al final de la secuencia.
    fn store(&mut self, event: Event);
    /// Lista todos los eventos en orden de inserción (copia defensiva).
    fn list_all(&self) -> Vec<Event>;

    /// Ingresa un registro JSON producido fuera del proceso.
    ///
    /// Valida presencia y forma antes de agregar: ante cualquier error la
    /// secuencia queda intacta.
    ///
    /// # Errores
    /// - `StoreError::EventRequired` si el registro es `null`.
    /// - `StoreError::Validation` si el registro no decodifica a un evento.
    fn store_value(&mut self, value: &Value) -> Result<(), StoreError> {
        if value.is_null() {
            warn!("store_value:rejected event is required");
            return Err(StoreError::EventRequired);
        }
        let event = Event::from_value(value)?;
        self.store(event);
        Ok(())
    }
}

pub struct InMemoryEventStore { events: Vec<Event> }

impl Default for InMemoryEventStore { fn default() -> Self { Self { events: Vec::new() } } }

impl InMemoryEventStore {
    pub fn new() -> Self { Self::default() }
}

impl EventStore for InMemoryEventStore {
    fn store(&mut self, event: Event) {
        let kind = event.kind();
        self.events.push(event);
        debug!("store:done kind={kind} total={}", self.events.len());
    }
    fn list_all(&self) -> Vec<Event> { self.events.clone() }
}

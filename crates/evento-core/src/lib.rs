//! evento-core: almacén de eventos en memoria, append-only.
pub mod errors;
pub mod store;

pub use errors::StoreError;
pub use store::{EventStore, InMemoryEventStore};

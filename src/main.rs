//! main-demo: almacenar y recuperar eventos con el almacén en memoria.

mod config;

use config::CONFIG;
use evento_core::{EventStore, InMemoryEventStore};
use evento_domain::{Event, MessageEvent, ProcessEvent};
use serde_json::{json, to_string_pretty, Value};
use uuid::Uuid;

fn main() {
    // Cargar variables de entorno desde .env si existe (antes de leer CONFIG)
    let _ = dotenvy::dotenv();

    run_store_and_retrieve();
    run_payload_ingest();
}

/// Construye eventos tipados, los almacena y lista la copia del almacén.
fn run_store_and_retrieve() {
    let mut store = InMemoryEventStore::new();

    // Eventos de proceso con sufijo único, como los genera un orquestador real
    for _ in 0..CONFIG.demo.commands {
        let event = ProcessEvent::new(format!("deploy --env prod --run {}", Uuid::new_v4()))
            .expect("comando no vacío");
        store.store(event.into());
    }
    store.store(MessageEvent::new("build finished").into());

    // La validación rechaza comandos en blanco con mensaje fijo
    if let Err(e) = ProcessEvent::new("   ") {
        println!("[store] rechazo esperado: {e}");
    }

    let events = store.list_all();
    for event in &events {
        println!("[store] {event}");
    }
    let process_count = events.iter()
                              .filter(|e| matches!(e, Event::Process(_)))
                              .count();
    assert_eq!(process_count, CONFIG.demo.commands, "Deben listarse todos los de proceso");
    println!("[store] !Validación: OK ({} de proceso + 1 de mensaje)", process_count);
}

/// Ingresa registros JSON externos, mostrando aceptados y rechazados.
fn run_payload_ingest() {
    let mut store = InMemoryEventStore::new();
    let records = vec![json!({ "type": "process_event", "command": "deploy --env prod" }),
                       json!({ "type": "message_event", "message": "build finished" }),
                       Value::Null,
                       json!({ "type": "process_event", "command": "   " }),
                       json!({ "type": "vehicle_event", "plate": "XYZ-123" })];

    for record in &records {
        let shown = if CONFIG.demo.pretty {
            to_string_pretty(record).unwrap_or_default()
        } else {
            record.to_string()
        };
        match store.store_value(record) {
            Ok(()) => println!("[ingest] aceptado: {shown}"),
            Err(e) => println!("[ingest] rechazado ({e}): {shown}"),
        }
    }

    println!("[ingest] !Validación: OK ({} de {} registros aceptados)",
             store.list_all().len(),
             records.len());
}

use chrono::Utc;
use evento_core::{EventStore, InMemoryEventStore};
use evento_domain::{Event, MessageEvent, ProcessEvent};
use serde_json::{json, Value};

#[test]
fn integration_smoke_store_and_retrieve() {
    // Escenario completo: construir, almacenar y recuperar en orden.
    let mut store = InMemoryEventStore::default();

    let process = ProcessEvent::new("deploy --env prod").expect("valid command");
    let message = MessageEvent::new("build finished");
    store.store(process.clone().into());
    store.store(message.clone().into());

    let events = store.list_all();
    assert_eq!(events, vec![Event::from(process), Event::from(message)]);
    for event in &events {
        assert!(event.occurred_on() <= Utc::now(), "occurred_on must be populated");
    }
}

#[test]
fn integration_smoke_external_batch() {
    // Lote externo con registros válidos e inválidos mezclados.
    let mut store = InMemoryEventStore::default();
    let batch = vec![json!({ "type": "process_event", "command": "deploy --env prod" }),
                     Value::Null,
                     json!({ "type": "message_event", "message": "build finished" }),
                     json!({ "type": "process_event", "command": "   " })];

    let accepted = batch.iter().filter(|r| store.store_value(r).is_ok()).count();

    assert_eq!(accepted, 2);
    let events = store.list_all();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], Event::Process(e) if e.command() == "deploy --env prod"));
    assert!(matches!(&events[1], Event::Message(e) if e.message() == "build finished"));
}

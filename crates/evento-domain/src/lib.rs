// evento-domain library entry point
pub mod event;
pub mod process_event;
pub mod message_event;
pub mod error;
pub use event::Event;
pub use process_event::ProcessEvent;
pub use message_event::MessageEvent;
pub use error::DomainError;

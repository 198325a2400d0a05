//! In-memory adapters for the orchestration ports (tests/dev).
//!
//! Production hosts supply their own repository and notification transport;
//! these implementations back the integration tests and local development.

pub mod notifications;
pub mod repository;


pub use notifications::{LoggingNotificationFacade, RecordingNotificationFacade};
pub use repository::InMemoryInvoiceRepository;

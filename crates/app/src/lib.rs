//! Orchestration layer for the invoice lifecycle.
//!
//! [`InvoiceService`] coordinates aggregate construction, persistence
//! through the [`InvoiceRepository`] port, validation-gated transitions,
//! outbound notification, and event emission. All IO happens behind the
//! injected collaborators; the domain objects themselves never block.

pub mod delivery;
pub mod dto;
pub mod notifications;
pub mod repository;
pub mod service;

pub use delivery::ResourceDeliveredListener;
pub use dto::{CreateInvoice, InvoiceSnapshot, NewProductLine, ProductLineSnapshot};
pub use notifications::{NotificationFacade, NotifyData, ResourceDelivered};
pub use repository::InvoiceRepository;
pub use service::InvoiceService;

//! Invoice domain module.
//!
//! This crate contains the business rules of the invoice lifecycle,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage): self-validating value objects, the `Invoice` aggregate with its
//! guarded status state machine, and the stateless validation/calculation
//! services.

pub mod calculation;
pub mod events;
pub mod invoice;
pub mod product_line;
pub mod validation;
pub mod values;

pub use calculation::InvoiceCalculationService;
pub use events::{InvoiceCreated, InvoiceEvent, InvoiceSent, InvoiceStatusChanged};
pub use invoice::{Invoice, InvoiceStatus};
pub use product_line::InvoiceProductLine;
pub use validation::InvoiceValidationService;
pub use values::{CustomerEmail, CustomerName, Money, Quantity, UnitPrice};

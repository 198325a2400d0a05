//! Domain events emitted by the invoice lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use invoiceflow_core::InvoiceId;
use invoiceflow_events::Event;

use crate::invoice::InvoiceStatus;

/// Event: an invoice was created in `Draft`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceCreated {
    pub invoice_id: InvoiceId,
    pub customer_name: String,
    pub customer_email: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: an invoice moved from one status to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceStatusChanged {
    pub invoice_id: InvoiceId,
    pub previous_status: InvoiceStatus,
    pub new_status: InvoiceStatus,
    pub occurred_at: DateTime<Utc>,
}

/// Event: an invoice was dispatched to the customer.
///
/// Emitted after the outbound notification; consumers of
/// [`InvoiceStatusChanged`] must not assume the notification has already
/// been dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSent {
    pub invoice_id: InvoiceId,
    pub customer_email: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvoiceEvent {
    Created(InvoiceCreated),
    StatusChanged(InvoiceStatusChanged),
    Sent(InvoiceSent),
}

impl InvoiceEvent {
    pub fn invoice_id(&self) -> InvoiceId {
        match self {
            InvoiceEvent::Created(e) => e.invoice_id,
            InvoiceEvent::StatusChanged(e) => e.invoice_id,
            InvoiceEvent::Sent(e) => e.invoice_id,
        }
    }
}

impl Event for InvoiceEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InvoiceEvent::Created(_) => "invoices.invoice.created",
            InvoiceEvent::StatusChanged(_) => "invoices.invoice.status_changed",
            InvoiceEvent::Sent(_) => "invoices.invoice.sent",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InvoiceEvent::Created(e) => e.occurred_at,
            InvoiceEvent::StatusChanged(e) => e.occurred_at,
            InvoiceEvent::Sent(e) => e.occurred_at,
        }
    }
}

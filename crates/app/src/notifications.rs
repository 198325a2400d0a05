//! Outbound notification port and the inbound delivery-confirmation signal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use invoiceflow_core::InvoiceId;
use invoiceflow_events::Event;

/// Payload handed to the notification transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyData {
    pub resource_id: InvoiceId,
    pub to_email: String,
    pub subject: String,
    pub message: String,
}

/// Outbound notification facade.
///
/// Fire-and-forget from the orchestration layer's perspective: the caller
/// does not inspect a result or retry. Retries, timeouts and the actual
/// transport belong to the implementation.
pub trait NotificationFacade: Send + Sync {
    fn notify(&self, data: NotifyData);
}

impl<N> NotificationFacade for std::sync::Arc<N>
where
    N: NotificationFacade + ?Sized,
{
    fn notify(&self, data: NotifyData) {
        (**self).notify(data)
    }
}

/// Inbound signal: a notified resource reached its recipient.
///
/// Delivered at-least-once and out of order relative to other operations.
/// Consumers must stay idempotent; the invoice handler ignores unknown ids
/// and invoices that are not currently `Sending`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDelivered {
    pub resource_id: InvoiceId,
    pub occurred_at: DateTime<Utc>,
}

impl Event for ResourceDelivered {
    fn event_type(&self) -> &'static str {
        "notifications.resource.delivered"
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

//! Inbound delivery-confirmation handling.

use tracing::warn;

use invoiceflow_domain::InvoiceEvent;
use invoiceflow_events::{EventBus, Subscription};

use crate::notifications::{NotificationFacade, ResourceDelivered};
use crate::repository::InvoiceRepository;
use crate::service::InvoiceService;

/// Maps inbound `ResourceDelivered` signals onto
/// [`InvoiceService::mark_invoice_as_delivered`].
///
/// Safe to invoke any number of times with the same or stale input: the
/// service degrades to a no-op for unknown ids and non-`Sending` invoices.
/// Repository failures are logged, not raised - the triggering event source
/// offers nowhere to propagate them.
pub struct ResourceDeliveredListener<R, N, B> {
    service: InvoiceService<R, N, B>,
}

impl<R, N, B> ResourceDeliveredListener<R, N, B>
where
    R: InvoiceRepository,
    N: NotificationFacade,
    B: EventBus<InvoiceEvent>,
{
    pub fn new(service: InvoiceService<R, N, B>) -> Self {
        Self { service }
    }

    pub fn handle(&self, event: &ResourceDelivered) {
        if let Err(e) = self.service.mark_invoice_as_delivered(event.resource_id) {
            warn!(resource_id = %event.resource_id, error = %e, "delivery confirmation failed");
        }
    }

    /// Drain a subscription until the bus disconnects.
    ///
    /// Blocking; intended to run on a host-owned thread.
    pub fn run(&self, subscription: Subscription<ResourceDelivered>) {
        while let Ok(event) = subscription.recv() {
            self.handle(&event);
        }
    }
}

//! Invoice lifecycle orchestration.

use chrono::Utc;
use tracing::{debug, info, warn};

use invoiceflow_core::{AggregateRoot, DomainError, DomainResult, InvoiceId};
use invoiceflow_domain::{
    Invoice, InvoiceCreated, InvoiceEvent, InvoiceProductLine, InvoiceSent, InvoiceStatusChanged,
    InvoiceValidationService,
};
use invoiceflow_events::EventBus;

use crate::dto::{CreateInvoice, InvoiceSnapshot};
use crate::notifications::{NotificationFacade, NotifyData};
use crate::repository::InvoiceRepository;

/// Orchestrates aggregate construction, persistence, validation-gated
/// transitions, outbound notification and event emission.
///
/// Side effects are strictly ordered: persistence always precedes event
/// emission, and in [`send_invoice`](Self::send_invoice) the notification
/// sits between the status-changed and the sent event. The service holds no
/// locks; a host must serialize per-invoice-id access to make transitions
/// effectively atomic under concurrent requests.
pub struct InvoiceService<R, N, B> {
    repository: R,
    validation: InvoiceValidationService,
    notifications: N,
    events: B,
}

impl<R, N, B> InvoiceService<R, N, B>
where
    R: InvoiceRepository,
    N: NotificationFacade,
    B: EventBus<InvoiceEvent>,
{
    pub fn new(repository: R, notifications: N, events: B) -> Self {
        Self {
            repository,
            validation: InvoiceValidationService::new(),
            notifications,
            events,
        }
    }

    /// Create a `Draft` invoice with its lines, persist it, emit
    /// `InvoiceCreated` and return a snapshot.
    ///
    /// Any invalid input (blank name, bad email, blank line name, negative
    /// quantity/price) fails before anything is persisted.
    pub fn create_invoice(&self, request: CreateInvoice) -> DomainResult<InvoiceSnapshot> {
        let mut invoice = Invoice::create(&request.customer_name, &request.customer_email)?;

        for line in &request.product_lines {
            let product_line = InvoiceProductLine::create(
                *invoice.id(),
                line.name.clone(),
                line.quantity,
                line.unit_price,
            )?;
            invoice.add_product_line(product_line);
        }

        self.repository.save(&invoice)?;

        info!(invoice_id = %invoice.id(), lines = invoice.product_lines().len(), "invoice created");
        self.publish(InvoiceEvent::Created(InvoiceCreated {
            invoice_id: *invoice.id(),
            customer_name: invoice.customer_name().as_str().to_string(),
            customer_email: invoice.customer_email().as_str().to_string(),
            occurred_at: Utc::now(),
        }));

        Ok(InvoiceSnapshot::from(&invoice))
    }

    /// Load an invoice by id; fails with `NotFound` when absent.
    pub fn get_invoice(&self, invoice_id: InvoiceId) -> DomainResult<InvoiceSnapshot> {
        let invoice = self.repository.find_by_id(invoice_id)?;
        Ok(InvoiceSnapshot::from(&invoice))
    }

    /// Transition a sendable draft to `Sending`, persist, emit the
    /// status-changed event, notify the customer, then emit the sent event.
    ///
    /// A wrong status fails fast inside the aggregate; a draft with
    /// unsendable content fails with the full per-line validation report.
    pub fn send_invoice(&self, invoice_id: InvoiceId) -> DomainResult<InvoiceSnapshot> {
        let mut invoice = self.repository.find_by_id(invoice_id)?;

        if invoice.is_draft() && !self.validation.can_invoice_be_sent(&invoice) {
            let errors = self
                .validation
                .validate_product_lines_for_sending(invoice.product_lines());
            return Err(DomainError::cannot_be_sent(errors.join("; ")));
        }

        let previous_status = invoice.status();
        invoice.mark_as_sending()?;

        self.repository.save(&invoice)?;

        self.publish(InvoiceEvent::StatusChanged(InvoiceStatusChanged {
            invoice_id: *invoice.id(),
            previous_status,
            new_status: invoice.status(),
            occurred_at: Utc::now(),
        }));

        // The notification goes out between the two events; consumers of
        // the status-changed event cannot assume it has been dispatched.
        self.notifications.notify(NotifyData {
            resource_id: *invoice.id(),
            to_email: invoice.customer_email().as_str().to_string(),
            subject: "Your Invoice is Ready".to_string(),
            message: format!(
                "Dear {}, your invoice is ready for review. Total amount: {}.",
                invoice.customer_name(),
                invoice.total_price().amount(),
            ),
        });

        self.publish(InvoiceEvent::Sent(InvoiceSent {
            invoice_id: *invoice.id(),
            customer_email: invoice.customer_email().as_str().to_string(),
            occurred_at: Utc::now(),
        }));

        info!(invoice_id = %invoice.id(), "invoice sent");
        Ok(InvoiceSnapshot::from(&invoice))
    }

    /// Advance a `Sending` invoice to `SentToClient` on delivery
    /// confirmation.
    ///
    /// Idempotent no-op for unknown ids and for invoices not currently
    /// `Sending`: the confirmation originates from an at-least-once,
    /// unordered event source, so repeats and stale signals are expected.
    pub fn mark_invoice_as_delivered(&self, invoice_id: InvoiceId) -> DomainResult<()> {
        let Some(mut invoice) = self.repository.find_by_id_or_null(invoice_id)? else {
            debug!(%invoice_id, "delivery confirmation for unknown invoice ignored");
            return Ok(());
        };

        if !invoice.is_sending() {
            debug!(%invoice_id, status = %invoice.status(), "delivery confirmation ignored");
            return Ok(());
        }

        let previous_status = invoice.status();
        invoice.mark_as_sent_to_client()?;

        self.repository.save(&invoice)?;

        self.publish(InvoiceEvent::StatusChanged(InvoiceStatusChanged {
            invoice_id: *invoice.id(),
            previous_status,
            new_status: invoice.status(),
            occurred_at: Utc::now(),
        }));

        info!(%invoice_id, "invoice delivered to client");
        Ok(())
    }

    /// Events are best-effort fan-out: the aggregate is already persisted,
    /// so a publish failure is logged rather than surfaced.
    fn publish(&self, event: InvoiceEvent) {
        if let Err(e) = self.events.publish(event) {
            warn!(error = ?e, "failed to publish invoice event");
        }
    }
}

//! Persistence port for the invoice aggregate.

use std::sync::Arc;

use invoiceflow_core::{DomainResult, InvoiceId};
use invoiceflow_domain::Invoice;

/// Repository abstraction over invoice storage.
///
/// `save` is an upsert by id and must persist the full current line set,
/// replacing any previously stored lines for that invoice.
pub trait InvoiceRepository: Send + Sync {
    fn save(&self, invoice: &Invoice) -> DomainResult<()>;

    /// Failing lookup: absent ids surface as `DomainError::NotFound`.
    fn find_by_id(&self, id: InvoiceId) -> DomainResult<Invoice>;

    /// Non-failing lookup.
    fn find_by_id_or_null(&self, id: InvoiceId) -> DomainResult<Option<Invoice>>;

    fn exists(&self, id: InvoiceId) -> DomainResult<bool>;
}

impl<R> InvoiceRepository for Arc<R>
where
    R: InvoiceRepository + ?Sized,
{
    fn save(&self, invoice: &Invoice) -> DomainResult<()> {
        (**self).save(invoice)
    }

    fn find_by_id(&self, id: InvoiceId) -> DomainResult<Invoice> {
        (**self).find_by_id(id)
    }

    fn find_by_id_or_null(&self, id: InvoiceId) -> DomainResult<Option<Invoice>> {
        (**self).find_by_id_or_null(id)
    }

    fn exists(&self, id: InvoiceId) -> DomainResult<bool> {
        (**self).exists(id)
    }
}

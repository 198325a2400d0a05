//! In-memory invoice repository for tests/dev.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use invoiceflow_app::InvoiceRepository;
use invoiceflow_core::{AggregateRoot, DomainError, DomainResult, InvoiceId};
use invoiceflow_domain::Invoice;

/// Clone-on-read map keyed by invoice id.
///
/// `save` is an upsert; storing the whole aggregate clone replaces any
/// previously stored line set for that id.
#[derive(Debug, Default)]
pub struct InMemoryInvoiceRepository {
    inner: RwLock<HashMap<InvoiceId, Invoice>>,
}

impl InMemoryInvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InvoiceRepository for InMemoryInvoiceRepository {
    fn save(&self, invoice: &Invoice) -> DomainResult<()> {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(*invoice.id(), invoice.clone());
        Ok(())
    }

    fn find_by_id(&self, id: InvoiceId) -> DomainResult<Invoice> {
        self.find_by_id_or_null(id)?
            .ok_or_else(|| DomainError::not_found(id))
    }

    fn find_by_id_or_null(&self, id: InvoiceId) -> DomainResult<Option<Invoice>> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.get(&id).cloned())
    }

    fn exists(&self, id: InvoiceId) -> DomainResult<bool> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Ok(map.contains_key(&id))
    }
}

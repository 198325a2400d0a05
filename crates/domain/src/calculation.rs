//! Stateless aggregation of monetary totals.

use crate::invoice::Invoice;
use crate::product_line::InvoiceProductLine;
use crate::values::Money;

/// Pure aggregation helpers. All of them agree with the invariant that an
/// invoice total is the sum of quantity × unit price over its current lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoiceCalculationService;

impl InvoiceCalculationService {
    pub fn new() -> Self {
        Self
    }

    pub fn product_line_total(&self, product_line: &InvoiceProductLine) -> Money {
        product_line.total_price()
    }

    pub fn invoice_total(&self, invoice: &Invoice) -> Money {
        invoice.total_price()
    }

    /// Total over an arbitrary line set, for lines not yet attached to an
    /// aggregate instance.
    pub fn total_for_product_lines(&self, product_lines: &[InvoiceProductLine]) -> Money {
        product_lines
            .iter()
            .fold(Money::zero(), |total, line| total.add(line.total_price()))
    }
}

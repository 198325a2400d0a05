//! Stateless rule evaluation over invoices and product lines.

use crate::invoice::{Invoice, InvoiceStatus};
use crate::product_line::InvoiceProductLine;
use crate::values::is_valid_email;

/// Stateless rule evaluator.
///
/// `can_invoice_be_created` intentionally duplicates the value-object
/// validation: it is a pre-check for callers that only hold raw strings and
/// do not want to construct an aggregate to find out whether they could.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoiceValidationService;

impl InvoiceValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Raw-string pre-check mirroring `Invoice::create` validation.
    pub fn can_invoice_be_created(&self, customer_name: &str, customer_email: &str) -> bool {
        !customer_name.trim().is_empty()
            && !customer_email.trim().is_empty()
            && is_valid_email(customer_email)
    }

    /// Mirrors `Invoice::can_be_sent`.
    pub fn can_invoice_be_sent(&self, invoice: &Invoice) -> bool {
        if invoice.status() != InvoiceStatus::Draft {
            return false;
        }

        let product_lines = invoice.product_lines();
        !product_lines.is_empty()
            && product_lines.iter().all(|line| self.is_product_line_valid_for_sending(line))
    }

    pub fn is_product_line_valid_for_sending(&self, product_line: &InvoiceProductLine) -> bool {
        product_line.is_valid_for_sending()
    }

    /// The status transition table, queried for an aggregate instance.
    pub fn can_status_be_changed_to(&self, invoice: &Invoice, new_status: InvoiceStatus) -> bool {
        invoice.status().can_transition_to(new_status)
    }

    /// Ordered, human-readable report of every violated send rule.
    ///
    /// One entry if the set is empty, plus one entry per line per violated
    /// rule, each addressed by the line's positional index. Used to build a
    /// single combined failure message when a send attempt is rejected.
    pub fn validate_product_lines_for_sending(
        &self,
        product_lines: &[InvoiceProductLine],
    ) -> Vec<String> {
        let mut errors = Vec::new();

        if product_lines.is_empty() {
            errors.push("invoice must contain at least one product line".to_string());
        }

        for (index, product_line) in product_lines.iter().enumerate() {
            if !product_line.quantity().is_positive() {
                errors.push(format!(
                    "product line {index}: quantity must be greater than zero"
                ));
            }

            if !product_line.unit_price().is_positive() {
                errors.push(format!(
                    "product line {index}: unit price must be greater than zero"
                ));
            }

            if product_line.name().trim().is_empty() {
                errors.push(format!("product line {index}: product name cannot be empty"));
            }
        }

        errors
    }
}

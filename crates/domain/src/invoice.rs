//! Invoice aggregate root and its status state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use invoiceflow_core::{AggregateRoot, DomainError, DomainResult, InvoiceId};

use crate::product_line::InvoiceProductLine;
use crate::values::{CustomerEmail, CustomerName, Money};

/// Invoice status lifecycle: `Draft` → `Sending` → `SentToClient`.
///
/// Transitions are monotonic - never backward, never skipping a step -
/// and `SentToClient` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvoiceStatus {
    Draft,
    Sending,
    SentToClient,
}

impl InvoiceStatus {
    /// The transition table: `Draft` is never a legal target, `Sending` is
    /// reachable only from `Draft`, `SentToClient` only from `Sending`.
    pub fn can_transition_to(self, target: InvoiceStatus) -> bool {
        match target {
            InvoiceStatus::Draft => false,
            InvoiceStatus::Sending => self == InvoiceStatus::Draft,
            InvoiceStatus::SentToClient => self == InvoiceStatus::Sending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sending => "sending",
            InvoiceStatus::SentToClient => "sent-to-client",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate root: an invoice with its exclusively-owned product lines.
///
/// The total price is always derived from the current line set, never
/// cached, so there is no second source of truth that can drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    customer_name: CustomerName,
    customer_email: CustomerEmail,
    status: InvoiceStatus,
    product_lines: Vec<InvoiceProductLine>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    version: u64,
}

impl Invoice {
    /// Create a new invoice in `Draft` with a fresh identifier and no lines.
    pub fn create(customer_name: &str, customer_email: &str) -> DomainResult<Self> {
        let now = Utc::now();

        Ok(Self {
            id: InvoiceId::new(),
            customer_name: CustomerName::new(customer_name)?,
            customer_email: CustomerEmail::new(customer_email)?,
            status: InvoiceStatus::Draft,
            product_lines: Vec::new(),
            created_at: now,
            updated_at: now,
            version: 0,
        })
    }

    pub fn customer_name(&self) -> &CustomerName {
        &self.customer_name
    }

    pub fn customer_email(&self) -> &CustomerEmail {
        &self.customer_email
    }

    pub fn status(&self) -> InvoiceStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Lines in insertion order (significant for display, not for totals).
    pub fn product_lines(&self) -> &[InvoiceProductLine] {
        &self.product_lines
    }

    /// Append a line.
    pub fn add_product_line(&mut self, product_line: InvoiceProductLine) {
        self.product_lines.push(product_line);
        self.touch();
    }

    /// Replace the full line set (used on reload from storage).
    pub fn set_product_lines(&mut self, product_lines: Vec<InvoiceProductLine>) {
        self.product_lines = product_lines;
        self.touch();
    }

    /// Derived grand total over the current lines; empty set totals zero.
    pub fn total_price(&self) -> Money {
        self.product_lines
            .iter()
            .fold(Money::zero(), |total, line| total.add(line.total_price()))
    }

    /// Send-readiness: `Draft`, at least one line, every line sendable.
    pub fn can_be_sent(&self) -> bool {
        self.status == InvoiceStatus::Draft
            && !self.product_lines.is_empty()
            && self.product_lines.iter().all(InvoiceProductLine::is_valid_for_sending)
    }

    /// Transition `Draft` → `Sending`.
    ///
    /// Fails fast on a wrong status; then re-checks the full send-readiness
    /// predicate. A failed attempt leaves the invoice untouched.
    pub fn mark_as_sending(&mut self) -> DomainResult<()> {
        if self.status != InvoiceStatus::Draft {
            return Err(DomainError::invalid_status_transition(
                self.status,
                InvoiceStatus::Sending,
            ));
        }

        if !self.can_be_sent() {
            return Err(DomainError::cannot_be_sent(
                "invoice must contain product lines with positive quantity and unit price",
            ));
        }

        self.status = InvoiceStatus::Sending;
        self.touch();
        Ok(())
    }

    /// Transition `Sending` → `SentToClient` (terminal).
    pub fn mark_as_sent_to_client(&mut self) -> DomainResult<()> {
        if self.status != InvoiceStatus::Sending {
            return Err(DomainError::invalid_status_transition(
                self.status,
                InvoiceStatus::SentToClient,
            ));
        }

        self.status = InvoiceStatus::SentToClient;
        self.touch();
        Ok(())
    }

    pub fn is_draft(&self) -> bool {
        self.status == InvoiceStatus::Draft
    }

    pub fn is_sending(&self) -> bool {
        self.status == InvoiceStatus::Sending
    }

    pub fn is_sent_to_client(&self) -> bool {
        self.status == InvoiceStatus::SentToClient
    }

    /// Replace the customer name, re-validating through the value object.
    ///
    /// Not gated by status: customer fields stay editable in any state.
    pub fn update_customer_name(&mut self, customer_name: &str) -> DomainResult<()> {
        self.customer_name = CustomerName::new(customer_name)?;
        self.touch();
        Ok(())
    }

    /// Replace the customer email, re-validating through the value object.
    pub fn update_customer_email(&mut self, customer_email: &str) -> DomainResult<()> {
        self.customer_email = CustomerEmail::new(customer_email)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_invoice() -> Invoice {
        Invoice::create("John Doe", "john@example.com").unwrap()
    }

    fn valid_line(invoice: &Invoice) -> InvoiceProductLine {
        InvoiceProductLine::create(*invoice.id(), "Consulting", 1, 1000).unwrap()
    }

    #[test]
    fn create_starts_in_draft_with_no_lines() {
        let invoice = draft_invoice();
        assert_eq!(invoice.status(), InvoiceStatus::Draft);
        assert!(invoice.product_lines().is_empty());
        assert_eq!(invoice.total_price(), Money::zero());
        assert_eq!(invoice.created_at(), invoice.updated_at());
    }

    #[test]
    fn create_rejects_invalid_customer_fields() {
        assert!(Invoice::create("  ", "john@example.com").is_err());
        assert!(Invoice::create("John Doe", "invalid-email").is_err());
    }

    #[test]
    fn total_price_is_the_sum_over_all_lines() {
        let mut invoice = draft_invoice();
        let id = *invoice.id();
        invoice.add_product_line(InvoiceProductLine::create(id, "Dev", 2, 1000).unwrap());
        invoice.add_product_line(InvoiceProductLine::create(id, "Support", 1, 500).unwrap());
        assert_eq!(invoice.total_price(), Money::new(2500));
    }

    #[test]
    fn can_be_sent_requires_draft_nonempty_and_all_lines_positive() {
        let mut invoice = draft_invoice();
        assert!(!invoice.can_be_sent(), "no lines");

        let id = *invoice.id();
        invoice.add_product_line(InvoiceProductLine::create(id, "Dev", 0, 1000).unwrap());
        assert!(!invoice.can_be_sent(), "zero quantity");

        invoice.set_product_lines(vec![
            InvoiceProductLine::create(id, "Dev", 2, 1000).unwrap(),
            InvoiceProductLine::create(id, "Support", 1, 0).unwrap(),
        ]);
        assert!(!invoice.can_be_sent(), "zero unit price");

        invoice.set_product_lines(vec![
            InvoiceProductLine::create(id, "Dev", 2, 1000).unwrap(),
        ]);
        assert!(invoice.can_be_sent());
    }

    #[test]
    fn mark_as_sending_moves_a_sendable_draft_forward() {
        let mut invoice = draft_invoice();
        let line = valid_line(&invoice);
        invoice.add_product_line(line);

        invoice.mark_as_sending().unwrap();
        assert_eq!(invoice.status(), InvoiceStatus::Sending);
        assert!(invoice.is_sending());
    }

    #[test]
    fn mark_as_sending_fails_on_empty_or_incomplete_lines_and_keeps_status() {
        let mut invoice = draft_invoice();
        let err = invoice.mark_as_sending().unwrap_err();
        assert!(matches!(err, DomainError::CannotBeSent(_)));
        assert_eq!(invoice.status(), InvoiceStatus::Draft);

        let id = *invoice.id();
        invoice.add_product_line(InvoiceProductLine::create(id, "Dev", 0, 1000).unwrap());
        let err = invoice.mark_as_sending().unwrap_err();
        assert!(matches!(err, DomainError::CannotBeSent(_)));
        assert_eq!(invoice.status(), InvoiceStatus::Draft);
    }

    #[test]
    fn mark_as_sending_twice_fails_with_a_status_error() {
        let mut invoice = draft_invoice();
        let line = valid_line(&invoice);
        invoice.add_product_line(line);
        invoice.mark_as_sending().unwrap();

        let err = invoice.mark_as_sending().unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_status_transition("sending", "sending")
        );
        assert_eq!(invoice.status(), InvoiceStatus::Sending);
    }

    #[test]
    fn mark_as_sent_to_client_requires_sending() {
        let mut invoice = draft_invoice();
        let err = invoice.mark_as_sent_to_client().unwrap_err();
        assert_eq!(
            err,
            DomainError::invalid_status_transition("draft", "sent-to-client")
        );
        assert_eq!(invoice.status(), InvoiceStatus::Draft);

        let line = valid_line(&invoice);
        invoice.add_product_line(line);
        invoice.mark_as_sending().unwrap();
        invoice.mark_as_sent_to_client().unwrap();
        assert!(invoice.is_sent_to_client());
    }

    #[test]
    fn sent_to_client_is_terminal() {
        let mut invoice = draft_invoice();
        let line = valid_line(&invoice);
        invoice.add_product_line(line);
        invoice.mark_as_sending().unwrap();
        invoice.mark_as_sent_to_client().unwrap();

        assert!(invoice.mark_as_sending().is_err());
        assert!(invoice.mark_as_sent_to_client().is_err());
        assert_eq!(invoice.status(), InvoiceStatus::SentToClient);
    }

    #[test]
    fn customer_fields_can_be_updated_in_any_status() {
        let mut invoice = draft_invoice();
        let line = valid_line(&invoice);
        invoice.add_product_line(line);
        invoice.mark_as_sending().unwrap();

        invoice.update_customer_name("Jane Doe").unwrap();
        invoice.update_customer_email("jane@example.com").unwrap();
        assert_eq!(invoice.customer_name().as_str(), "Jane Doe");
        assert_eq!(invoice.customer_email().as_str(), "jane@example.com");

        assert!(invoice.update_customer_name(" ").is_err());
        assert!(invoice.update_customer_email("nope").is_err());
        // Failed updates leave the previous values in place.
        assert_eq!(invoice.customer_name().as_str(), "Jane Doe");
        assert_eq!(invoice.customer_email().as_str(), "jane@example.com");
    }

    #[test]
    fn every_mutation_bumps_the_version_once() {
        let mut invoice = draft_invoice();
        assert_eq!(invoice.version(), 0);

        let line = valid_line(&invoice);
        invoice.add_product_line(line);
        assert_eq!(invoice.version(), 1);

        invoice.update_customer_name("Jane Doe").unwrap();
        assert_eq!(invoice.version(), 2);

        invoice.mark_as_sending().unwrap();
        assert_eq!(invoice.version(), 3);

        // A failed transition does not bump the version.
        assert!(invoice.mark_as_sending().is_err());
        assert_eq!(invoice.version(), 3);
    }

    #[test]
    fn status_transition_table_is_exhaustive() {
        use InvoiceStatus::*;
        let cases = [
            (Draft, Draft, false),
            (Draft, Sending, true),
            (Draft, SentToClient, false),
            (Sending, Draft, false),
            (Sending, Sending, false),
            (Sending, SentToClient, true),
            (SentToClient, Draft, false),
            (SentToClient, Sending, false),
            (SentToClient, SentToClient, false),
        ];
        for (from, to, allowed) in cases {
            assert_eq!(from.can_transition_to(to), allowed, "{from} -> {to}");
        }
    }
}

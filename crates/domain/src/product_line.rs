//! Product line entity, owned exclusively by one invoice.

use serde::{Deserialize, Serialize};

use invoiceflow_core::{DomainError, DomainResult, Entity, InvoiceId, ProductLineId};

use crate::values::{Money, Quantity, UnitPrice};

/// One line item of an invoice.
///
/// The `invoice_id` is a lookup key back to the owner, not an ownership
/// edge: lines have no lifecycle outside their invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceProductLine {
    id: ProductLineId,
    invoice_id: InvoiceId,
    name: String,
    quantity: Quantity,
    unit_price: UnitPrice,
}

impl InvoiceProductLine {
    /// Construct a line with full validation.
    ///
    /// A blank name fails first, regardless of quantity/price validity;
    /// negative quantity or unit price fail the value-object constructors.
    pub fn create(
        invoice_id: InvoiceId,
        name: impl Into<String>,
        quantity: i64,
        unit_price: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_product_line(
                "product name cannot be empty",
            ));
        }

        Ok(Self {
            id: ProductLineId::new(),
            invoice_id,
            name,
            quantity: Quantity::new(quantity)?,
            unit_price: UnitPrice::new(unit_price)?,
        })
    }

    pub fn invoice_id(&self) -> InvoiceId {
        self.invoice_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit_price(&self) -> UnitPrice {
        self.unit_price
    }

    /// Derived line total: quantity × unit price.
    pub fn total_price(&self) -> Money {
        Money::new(self.unit_price.value()).multiply(self.quantity.value())
    }

    /// A line contributes to a sendable invoice only when both quantity and
    /// unit price are strictly positive.
    pub fn is_valid_for_sending(&self) -> bool {
        self.quantity.is_positive() && self.unit_price.is_positive()
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_product_line(
                "product name cannot be empty",
            ));
        }
        self.name = name;
        Ok(())
    }

    pub fn update_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        self.quantity = Quantity::new(quantity)?;
        Ok(())
    }

    pub fn update_unit_price(&mut self, unit_price: i64) -> DomainResult<()> {
        self.unit_price = UnitPrice::new(unit_price)?;
        Ok(())
    }
}

impl Entity for InvoiceProductLine {
    type Id = ProductLineId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

//! Request and snapshot shapes crossing the service boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use invoiceflow_core::{AggregateRoot, Entity, InvoiceId, ProductLineId};
use invoiceflow_domain::{Invoice, InvoiceProductLine, InvoiceStatus};

/// Creation request: customer fields plus zero or more lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateInvoice {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub product_lines: Vec<NewProductLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProductLine {
    pub name: String,
    pub quantity: i64,
    pub unit_price: i64,
}

/// Read-only projection of an invoice returned to callers outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    pub id: InvoiceId,
    pub customer_name: String,
    pub customer_email: String,
    pub status: InvoiceStatus,
    pub product_lines: Vec<ProductLineSnapshot>,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLineSnapshot {
    pub id: ProductLineId,
    pub name: String,
    pub quantity: i64,
    pub unit_price: i64,
    pub total_price: i64,
}

impl From<&InvoiceProductLine> for ProductLineSnapshot {
    fn from(line: &InvoiceProductLine) -> Self {
        Self {
            id: *line.id(),
            name: line.name().to_string(),
            quantity: line.quantity().value(),
            unit_price: line.unit_price().value(),
            total_price: line.total_price().amount(),
        }
    }
}

impl From<&Invoice> for InvoiceSnapshot {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: *invoice.id(),
            customer_name: invoice.customer_name().as_str().to_string(),
            customer_email: invoice.customer_email().as_str().to_string(),
            status: invoice.status(),
            product_lines: invoice.product_lines().iter().map(Into::into).collect(),
            total_price: invoice.total_price().amount(),
            created_at: invoice.created_at(),
            updated_at: invoice.updated_at(),
        }
    }
}

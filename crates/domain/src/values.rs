//! Self-validating value objects.
//!
//! Construction is the only validation gate: once an instance exists it is
//! immutable and always valid.

use serde::{Deserialize, Serialize};

use invoiceflow_core::{DomainError, DomainResult, ValueObject};

/// A monetary amount in the minor currency unit (e.g. cents).
///
/// No validation on construction - amounts may be produced internally from
/// arithmetic. Zero is the additive identity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub fn zero() -> Self {
        Self(0)
    }

    /// Saturates instead of wrapping on overflow.
    pub fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Saturates instead of wrapping on overflow.
    pub fn multiply(self, factor: i64) -> Money {
        Money(self.0.saturating_mul(factor))
    }

    pub fn amount(self) -> i64 {
        self.0
    }
}

impl ValueObject for Money {}

/// Quantity of a product line. Non-negative; zero marks an incomplete line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        Ok(Self(value))
    }

    /// Strictly greater than zero.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl ValueObject for Quantity {}

/// Per-unit price in the minor currency unit. Non-negative; zero marks an
/// incomplete line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitPrice(i64);

impl UnitPrice {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::validation("unit price cannot be negative"));
        }
        Ok(Self(value))
    }

    /// Strictly greater than zero.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl ValueObject for UnitPrice {}

/// Customer name; must be non-empty after trimming. The original string
/// (including surrounding whitespace) is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CustomerName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for CustomerName {}

/// Customer email address; must be syntactically valid. Round-trips its
/// string form exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("customer email cannot be empty"));
        }
        if !is_valid_email(&value) {
            return Err(DomainError::validation(
                "customer email must be a valid email address",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CustomerEmail {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for CustomerEmail {}

/// Syntactic email check: one `@`, a non-empty local part, a dotted domain,
/// no whitespace. Deliverability is out of scope.
pub(crate) fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_addition_and_scalar_multiplication() {
        let total = Money::zero().add(Money::new(1000).multiply(2)).add(Money::new(500));
        assert_eq!(total.amount(), 2500);
    }

    #[test]
    fn money_zero_is_the_additive_identity() {
        let amount = Money::new(42);
        assert_eq!(amount.add(Money::zero()), amount);
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = Quantity::new(-1).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn zero_quantity_is_allowed_but_not_positive() {
        let quantity = Quantity::new(0).unwrap();
        assert!(!quantity.is_positive());
        assert!(Quantity::new(1).unwrap().is_positive());
    }

    #[test]
    fn negative_unit_price_is_rejected() {
        assert!(UnitPrice::new(-500).is_err());
        assert!(UnitPrice::new(0).is_ok());
    }

    #[test]
    fn blank_customer_name_is_rejected() {
        assert!(CustomerName::new("").is_err());
        assert!(CustomerName::new("   ").is_err());
        assert_eq!(CustomerName::new("John Doe").unwrap().as_str(), "John Doe");
    }

    #[test]
    fn invalid_email_is_rejected() {
        for candidate in ["", "invalid-email", "no-at.example.org", "two@@example.org",
            "spaces in@example.org", "@example.org", "user@nodot", "user@.org", "user@org."]
        {
            assert!(CustomerEmail::new(candidate).is_err(), "accepted: {candidate}");
        }
    }

    #[test]
    fn valid_email_round_trips_exactly() {
        let email = CustomerEmail::new("user+tag@example.org").unwrap();
        assert_eq!(email.as_str(), "user+tag@example.org");
        assert_eq!(email.to_string(), "user+tag@example.org");
    }
}

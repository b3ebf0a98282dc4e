//! Address value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Postal address of a customer.
///
/// A value object: it has no identity and is replaced as a whole rather than
/// mutated. Two addresses with the same fields are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    street: String,
    number: i64,
    zip: String,
    city: String,
}

impl Address {
    /// Creates a validated address.
    ///
    /// # Errors
    ///
    /// Returns a [`DomainError`] if street, zip or city is blank, or if the
    /// number is not positive.
    pub fn new(
        street: impl Into<String>,
        number: i64,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.street.trim().is_empty() {
            return Err(DomainError::StreetRequired);
        }
        if self.number <= 0 {
            return Err(DomainError::InvalidNumber);
        }
        if self.zip.trim().is_empty() {
            return Err(DomainError::ZipRequired);
        }
        if self.city.trim().is_empty() {
            return Err(DomainError::CityRequired);
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.number, self.zip, self.city
        )
    }
}

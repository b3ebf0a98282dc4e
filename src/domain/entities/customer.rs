//! Customer aggregate root.

use crate::domain::entities::Address;
use crate::domain::errors::DomainError;

/// A customer who can place orders.
///
/// Customers start inactive and without an address. Activation requires an
/// address. Reward points only grow; they are earned by placing orders
/// (see [`crate::domain::services::OrderService::place_order`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: f64,
}

impl Customer {
    /// Creates an inactive customer with no address and no reward points.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::IdRequired`] or [`DomainError::NameRequired`]
    /// when either value is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0.0,
        };
        customer.validate()?;
        Ok(customer)
    }

    fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::NameRequired);
        }
        Ok(())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> f64 {
        self.reward_points
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Replaces the customer's address.
    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn activate(&mut self) -> Result<(), DomainError> {
        if self.address.is_none() {
            return Err(DomainError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: f64) -> Result<(), DomainError> {
        let total = self.reward_points + points;
        if !(points >= 0.0 && total.is_finite()) {
            return Err(DomainError::NegativeRewardPoints);
        }
        self.reward_points = total;
        Ok(())
    }
}

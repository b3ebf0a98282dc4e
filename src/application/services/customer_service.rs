//! Customer registration and address management.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{Address, Customer};
use crate::domain::events::{CustomerAddressChangedEvent, CustomerCreatedEvent, EventDispatcher};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// Service for registering customers and keeping their address current.
///
/// Each successful write is followed by the matching domain event, so
/// handlers only ever observe persisted state.
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
    dispatcher: Arc<EventDispatcher>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a new customer service.
    pub fn new(repository: Arc<R>, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Registers a new customer with a generated id.
    ///
    /// When an address is given the customer is stored with it and activated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is blank.
    /// Returns [`AppError::Conflict`] or [`AppError::Internal`] from the repository.
    /// Returns the first handler error raised while notifying
    /// [`CustomerCreatedEvent`]; the customer is already stored at that point.
    pub async fn register_customer(
        &self,
        name: String,
        address: Option<Address>,
    ) -> Result<Customer, AppError> {
        let mut customer = Customer::new(Uuid::new_v4().to_string(), name)?;
        if let Some(address) = address {
            customer.change_address(address);
            customer.activate()?;
        }

        self.repository.create(&customer).await?;
        tracing::info!(customer_id = customer.id(), "customer registered");

        self.dispatcher
            .notify(&CustomerCreatedEvent::new(&customer))?;

        Ok(customer)
    }

    /// Replaces the address of an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns the first handler error raised while notifying
    /// [`CustomerAddressChangedEvent`].
    pub async fn change_address(&self, id: &str, address: Address) -> Result<Customer, AppError> {
        let mut customer = self.repository.find(id).await?;
        customer.change_address(address.clone());

        self.repository.update(&customer).await?;
        tracing::info!(customer_id = id, "customer address changed");

        self.dispatcher.notify(&CustomerAddressChangedEvent::new(
            customer.id(),
            customer.name(),
            address,
        ))?;

        Ok(customer)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    pub async fn get_customer(&self, id: &str) -> Result<Customer, AppError> {
        self.repository.find(id).await
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.repository.find_all().await
    }
}

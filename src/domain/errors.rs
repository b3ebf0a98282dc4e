//! Business rule violations raised by entities and domain services.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Id is required")]
    IdRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("Price must be greater than or equal to zero")]
    NegativePrice,

    #[error("Street is required")]
    StreetRequired,

    #[error("Number must be greater than zero")]
    InvalidNumber,

    #[error("Zip is required")]
    ZipRequired,

    #[error("City is required")]
    CityRequired,

    #[error("Address is mandatory to activate a customer")]
    AddressRequired,

    #[error("Reward points must not be negative")]
    NegativeRewardPoints,

    #[error("CustomerId is required")]
    CustomerIdRequired,

    #[error("ProductId is required")]
    ProductIdRequired,

    #[error("Items are required")]
    ItemsRequired,

    #[error("Quantity must be greater than 0")]
    InvalidQuantity(i64),

    #[error("Percentage must not be negative")]
    NegativePercentage,
}

impl DomainError {
    /// Short identifier of the violated rule.
    pub fn rule(&self) -> &'static str {
        match self {
            DomainError::IdRequired => "id_required",
            DomainError::NameRequired => "name_required",
            DomainError::NegativePrice => "negative_price",
            DomainError::StreetRequired => "street_required",
            DomainError::InvalidNumber => "invalid_number",
            DomainError::ZipRequired => "zip_required",
            DomainError::CityRequired => "city_required",
            DomainError::AddressRequired => "address_required",
            DomainError::NegativeRewardPoints => "negative_reward_points",
            DomainError::CustomerIdRequired => "customer_id_required",
            DomainError::ProductIdRequired => "product_id_required",
            DomainError::ItemsRequired => "items_required",
            DomainError::InvalidQuantity(_) => "invalid_quantity",
            DomainError::NegativePercentage => "negative_percentage",
        }
    }
}

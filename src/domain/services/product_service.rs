//! Domain service for bulk catalog changes.

use crate::domain::entities::Product;
use crate::domain::entities::product::is_valid_price;
use crate::domain::errors::DomainError;

pub struct ProductService;

impl ProductService {
    /// Raises every price by `percentage` percent.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativePercentage`] for a negative or
    /// non-finite percentage, and [`DomainError::NegativePrice`] if a new
    /// price would overflow. No product is modified in either case.
    pub fn increase_price(products: &mut [Product], percentage: f64) -> Result<(), DomainError> {
        if !(percentage.is_finite() && percentage >= 0.0) {
            return Err(DomainError::NegativePercentage);
        }

        // Validate every new price before touching any product
        let prices = products
            .iter()
            .map(|p| p.price() + p.price() * percentage / 100.0)
            .collect::<Vec<_>>();
        if !prices.iter().all(|&price| is_valid_price(price)) {
            return Err(DomainError::NegativePrice);
        }

        for (product, price) in products.iter_mut().zip(prices) {
            product.change_price(price)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_price_of_all_products() {
        let mut products = vec![
            Product::new("p1", "Product 1", 10.0).unwrap(),
            Product::new("p2", "Product 2", 20.0).unwrap(),
        ];

        ProductService::increase_price(&mut products, 100.0).unwrap();

        assert_eq!(products[0].price(), 20.0);
        assert_eq!(products[1].price(), 40.0);
    }

    #[test]
    fn test_zero_percent_keeps_prices() {
        let mut products = vec![Product::new("p1", "Product 1", 12.5).unwrap()];

        ProductService::increase_price(&mut products, 0.0).unwrap();

        assert_eq!(products[0].price(), 12.5);
    }

    #[test]
    fn test_negative_percentage_rejected() {
        let mut products = vec![Product::new("p1", "Product 1", 10.0).unwrap()];

        let result = ProductService::increase_price(&mut products, -10.0);

        assert_eq!(result.unwrap_err(), DomainError::NegativePercentage);
        assert_eq!(products[0].price(), 10.0);
    }

    #[test]
    fn test_non_finite_percentage_rejected() {
        let mut products = vec![Product::new("p1", "Product 1", 10.0).unwrap()];

        for percentage in [f64::NAN, f64::INFINITY] {
            assert_eq!(
                ProductService::increase_price(&mut products, percentage).unwrap_err(),
                DomainError::NegativePercentage
            );
        }
        assert_eq!(products[0].price(), 10.0);
    }

    #[test]
    fn test_overflowing_price_leaves_catalog_untouched() {
        let mut products = vec![
            Product::new("p1", "Product 1", 10.0).unwrap(),
            Product::new("p2", "Product 2", f64::MAX).unwrap(),
        ];

        let result = ProductService::increase_price(&mut products, 100.0);

        assert_eq!(result.unwrap_err(), DomainError::NegativePrice);
        assert_eq!(products[0].price(), 10.0);
        assert_eq!(products[1].price(), f64::MAX);
    }
}

//! Cart line value object.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

use crate::domain::catalog::Product;
use crate::domain::foundation::{Money, ProductId};

/// One entry in the cart: a product snapshot and a positive quantity.
///
/// Name, price and image are copied from the product when the line is
/// created and do not follow later catalog changes. The field names are
/// the persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartLine {
    id: ProductId,
    name: String,
    price: Money,
    quantity: NonZeroU32,
    image: String,
}

impl CartLine {
    /// Snapshots `product` with the given quantity.
    pub fn from_product(product: &Product, quantity: NonZeroU32) -> Self {
        Self {
            id: product.id().clone(),
            name: product.name().to_string(),
            price: product.price(),
            quantity,
            image: product.image().to_string(),
        }
    }

    /// Reassembles a line from stored fields.
    pub fn restore(
        id: ProductId,
        name: String,
        price: Money,
        quantity: NonZeroU32,
        image: String,
    ) -> Self {
        Self {
            id,
            name,
            price,
            quantity,
            image,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// price × quantity for this line.
    pub fn subtotal(&self) -> Money {
        self.price.times(self.quantity.get())
    }

    pub(crate) fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn line(quantity: u32) -> CartLine {
        CartLine::restore(
            ProductId::new("3").unwrap(),
            "Organic Cotton T-Shirt".to_string(),
            Money::new(dec!(29.99)),
            NonZeroU32::new(quantity).unwrap(),
            "shirt.jpg".to_string(),
        )
    }

    #[test]
    fn subtotal_multiplies_price_by_quantity() {
        assert_eq!(line(3).subtotal(), Money::new(dec!(89.97)));
    }

    #[test]
    fn serializes_to_flat_object() {
        let json = serde_json::to_value(line(2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "3",
                "name": "Organic Cotton T-Shirt",
                "price": 29.99,
                "quantity": 2,
                "image": "shirt.jpg"
            })
        );
    }

    #[test]
    fn unknown_fields_are_rejected_on_deserialize() {
        let json = r#"{"id":"3","name":"x","price":1.0,"quantity":1,"image":"","extra":true}"#;
        assert!(serde_json::from_str::<CartLine>(json).is_err());
    }

    #[test]
    fn zero_quantity_is_rejected_on_deserialize() {
        let json = r#"{"id":"3","name":"x","price":1.0,"quantity":0,"image":""}"#;
        assert!(serde_json::from_str::<CartLine>(json).is_err());
    }
}

//! Line items are the cart/order rows the delivery core reads. They carry
//! everything we need from the host platform's product model: identity,
//! quantity, price, measurements, and the warehouse the product dispatches
//! from.

use getset::Getters;
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};
use crate::models::{
    dimensions::Dimensions,
    warehouse::WarehouseId,
};

model_id! {
    /// The host platform's product identifier.
    pub struct ProductId
}

/// One cart row, read fresh for each build pass.
///
/// `warehouse_id` is product metadata maintained by the merchant; a missing
/// or blank value makes the whole cart undeliverable (see
/// [`requests::build`][crate::requests::build]).
#[derive(Clone, Debug, PartialEq, Getters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct LineItem {
    product_id: ProductId,
    quantity: u32,
    name: String,
    price: Decimal,
    #[builder(default)]
    dimensions: Dimensions,
    #[builder(setter(strip_option), default)]
    warehouse_id: Option<WarehouseId>,
}

impl LineItem {
    pub fn builder() -> LineItemBuilder {
        LineItemBuilder::default()
    }

    /// The warehouse this item dispatches from, if the metadata actually
    /// holds one. Blank ids count as absent.
    pub fn assigned_warehouse(&self) -> Option<&WarehouseId> {
        match self.warehouse_id.as_ref() {
            Some(id) if !id.is_empty() => Some(id),
            _ => None,
        }
    }
}

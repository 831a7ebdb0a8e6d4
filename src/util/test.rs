//! Shared fixtures for the test modules scattered through the crate. Every
//! `make_*` helper produces a value that's valid on its own, so individual
//! tests only spell out what they actually care about.

use rust_decimal::Decimal;
use crate::{
    models::{
        delivery::DeliveryGroup,
        dimensions::Dimensions,
        dropoff::{Dropoff, DropoffContact, DropoffLocation},
        line_item::{LineItem, ProductId},
        warehouse::{GeoPoint, PickupPoint, WarehouseId, WarehouseRegistry},
    },
    requests::quote::{Quote, QuoteId},
};

pub(crate) fn make_pickup_point(id: &str) -> PickupPoint {
    PickupPoint::builder()
        .id(WarehouseId::new(id))
        .contact(format!("contact {}", id))
        .location(GeoPoint::builder()
            .address(format!("{} dispatch dock", id))
            .lat(-0.17)
            .lng(-78.48)
            .build().unwrap())
        .build().unwrap()
}

pub(crate) fn make_registry(ids: &[&str]) -> WarehouseRegistry {
    let mut registry = WarehouseRegistry::new();
    for id in ids {
        registry.insert(make_pickup_point(id));
    }
    registry
}

pub(crate) fn make_dropoff() -> Dropoff {
    Dropoff::builder()
        .contact(DropoffContact::builder()
            .name("Larry Chairs")
            .email("larry@chairs.example")
            .phone("+593999999999")
            .build().unwrap())
        .location(DropoffLocation::builder()
            .address("444 Checkmate lane")
            .lat(-0.2)
            .lng(-78.5)
            .instructions("blue gate, ring twice")
            .build().unwrap())
        .build().unwrap()
}

pub(crate) fn make_line_item(product: &str, quantity: u32, warehouse: Option<&str>, dimensions: Dimensions) -> LineItem {
    let mut builder = LineItem::builder()
        .product_id(ProductId::new(product))
        .quantity(quantity)
        .name(format!("product {}", product))
        .price(num!(19.90))
        .dimensions(dimensions);
    if let Some(warehouse) = warehouse {
        builder = builder.warehouse_id(WarehouseId::new(warehouse));
    }
    builder.build().unwrap()
}

/// One single-package group per warehouse id given.
pub(crate) fn make_groups(warehouses: &[&str]) -> Vec<DeliveryGroup> {
    warehouses.iter().copied()
        .map(|id| {
            let mut group = DeliveryGroup::new(make_pickup_point(id), make_dropoff());
            group.push(crate::models::delivery::Package::from_line_item(
                &make_line_item("77", 2, Some(id), Dimensions::unset()),
            ));
            group
        })
        .collect()
}

pub(crate) fn make_quote(id: u64, cost: Decimal) -> Quote {
    Quote::new(QuoteId::new(id), cost)
}

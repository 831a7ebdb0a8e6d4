//! Delivery groups are the provider-facing delivery requests: one per
//! warehouse touched by the cart, each holding the packages dispatching from
//! that warehouse plus the shared customer dropoff.
//!
//! Groups are transient. They are built per request, serialized straight into
//! a quote or dispatch body, and never stored by this crate.

use getset::Getters;
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};
use crate::{
    models::{
        dropoff::Dropoff,
        line_item::{LineItem, ProductId},
        warehouse::PickupPoint,
    },
    size::{self, SizeBucket},
};

/// One physical package inside a delivery group. Field names follow the
/// provider's delivery schema (`qty`, not `quantity`).
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Package {
    id: ProductId,
    #[serde(rename = "qty")]
    quantity: u32,
    name: String,
    size: SizeBucket,
    price: Decimal,
}

impl Package {
    /// Turn a cart row into a package, classifying its size as we go.
    pub fn from_line_item(item: &LineItem) -> Self {
        Self {
            id: item.product_id().clone(),
            quantity: *item.quantity(),
            name: item.name().clone(),
            size: size::classify(item.dimensions()),
            price: item.price().clone(),
        }
    }
}

/// One delivery request, scoped to a single warehouse.
///
/// `reference_id` and `cod` only appear at dispatch time; quoting sends the
/// group without them.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct DeliveryGroup {
    pickup: PickupPoint,
    dropoff: Dropoff,
    #[serde(rename = "sendEmail")]
    send_email: bool,
    packages: Vec<Package>,
    #[serde(rename = "referenceId", skip_serializing_if = "Option::is_none", default)]
    reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    cod: Option<Decimal>,
}

impl DeliveryGroup {
    /// Seed an empty group for a warehouse. The builder that calls this is
    /// responsible for pushing at least one package before the group goes
    /// anywhere.
    pub(crate) fn new(pickup: PickupPoint, dropoff: Dropoff) -> Self {
        Self {
            pickup,
            dropoff,
            send_email: true,
            packages: Vec::new(),
            reference_id: None,
            cod: None,
        }
    }

    pub(crate) fn push(&mut self, package: Package) {
        self.packages.push(package);
    }

    /// Total cash to collect on delivery: the sum of `price * qty` over the
    /// group's packages.
    pub fn cash_on_delivery(&self) -> Decimal {
        self.packages.iter().fold(Decimal::new(0, 0), |total, package| {
            total + package.price.clone() * Decimal::from(package.quantity)
        })
    }

    /// Stamp the group with the order reference and (for cash-on-delivery
    /// orders) the amount the courier collects. Used when a quoted group is
    /// promoted into a dispatch request.
    pub(crate) fn for_dispatch(mut self, reference_id: &str, cod: Option<Decimal>) -> Self {
        self.reference_id = Some(reference_id.to_string());
        self.cod = cod;
        self
    }
}

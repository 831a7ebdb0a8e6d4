//! Warehouses are the pickup points deliveries dispatch from. The provider
//! owns them: we learn about them through its place-listing call and key
//! everything by the provider-assigned id.

use std::collections::HashMap;
use getset::Getters;
use serde::{Serialize, Deserialize};

model_id! {
    /// Provider-assigned warehouse identifier. Products carry one of these
    /// as metadata to say where they dispatch from.
    pub struct WarehouseId
}

/// An address pinned to coordinates.
#[derive(Clone, Debug, PartialEq, Getters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct GeoPoint {
    address: String,
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    pub fn builder() -> GeoPointBuilder {
        GeoPointBuilder::default()
    }
}

/// A fixed dispatch origin. Immutable for the duration of one build pass.
///
/// The id is how we look a pickup point up; the provider's delivery schema
/// only wants the contact and location, so the id stays off the wire.
#[derive(Clone, Debug, PartialEq, Getters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct PickupPoint {
    #[serde(skip)]
    #[builder(default)]
    id: WarehouseId,
    contact: String,
    location: GeoPoint,
}

impl PickupPoint {
    pub fn builder() -> PickupPointBuilder {
        PickupPointBuilder::default()
    }
}

/// One entry of the provider's place-listing response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: WarehouseId,
    pub contact: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// The provider's place-listing response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub places: Vec<Place>,
}

/// The set of warehouses known to the provider, keyed by id. Built once from
/// a place listing and handed to the request builder read-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WarehouseRegistry {
    places: HashMap<WarehouseId, PickupPoint>,
}

impl WarehouseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a place listing by warehouse id. Duplicate ids keep the last
    /// entry, matching how the listing was consumed historically.
    pub fn from_places(listing: PlacesResponse) -> Self {
        let mut registry = Self::new();
        for place in listing.places {
            registry.insert(PickupPoint {
                id: place.id,
                contact: place.contact,
                location: GeoPoint {
                    address: place.address,
                    lat: place.lat,
                    lng: place.lng,
                },
            });
        }
        registry
    }

    pub fn insert(&mut self, pickup: PickupPoint) {
        self.places.insert(pickup.id.clone(), pickup);
    }

    pub fn get(&self, id: &WarehouseId) -> Option<&PickupPoint> {
        self.places.get(id)
    }

    pub fn contains(&self, id: &WarehouseId) -> bool {
        self.places.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// An empty listing. Callers generally refuse to quote against one of
    /// these, but that's their call.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

//! This crate is the core logic of a store-checkout integration with a
//! last-mile delivery provider: it turns a cart into per-warehouse delivery
//! requests, classifies each product into the provider's coarse package
//! sizes, and shapes the quote and dispatch bodies the provider expects.
//!
//! Everything here is pure and synchronous. The host platform owns the cart,
//! the order, and the settings screens; the network layer owns the actual
//! HTTP calls. This crate takes values in and hands values back, which is
//! what lets the same grouping and validation logic back every entry point
//! (shipping-rate calculation, checkout validation, and order dispatch)
//! instead of each one growing its own copy.
//!
//! The flow, for orientation:
//!
//! 1. the caller fetches the provider's warehouse listing and indexes it into
//!    a [`WarehouseRegistry`];
//! 2. [`requests::build::build`] groups the cart's [`LineItem`]s by
//!    warehouse into [`DeliveryGroup`]s, classifying package sizes via
//!    [`size::classify`] and failing the whole cart if any item lacks a
//!    known warehouse;
//! 3. the groups ride a [`CheckoutSession`] through the quote step
//!    ([`requests::quote`]) and into dispatch ([`requests::dispatch`]).

pub mod error;
#[macro_use]
mod util;
#[macro_use]
pub mod models;
pub mod size;
pub mod requests;
pub mod session;

pub use crate::{
    error::{Error, Result},
    models::{
        delivery::{DeliveryGroup, Package},
        dimensions::Dimensions,
        dropoff::{Dropoff, DropoffContact, DropoffLocation},
        line_item::{LineItem, ProductId},
        warehouse::{GeoPoint, PickupPoint, Place, PlacesResponse, WarehouseId, WarehouseRegistry},
    },
    requests::{
        Endpoints,
        dispatch::{DeliveryId, DispatchRequest, DispatchResponse, prepare_dispatch},
        quote::{Quote, QuoteId, QuoteRequest, QuoteResponse},
    },
    session::CheckoutSession,
    size::{classify, SizeBucket},
};

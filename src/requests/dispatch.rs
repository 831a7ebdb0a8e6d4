//! The dispatch step: promote quoted delivery groups into the provider's
//! delivery-creation request, and confirm that the provider actually created
//! one delivery per group before anything gets marked shipped.

use getset::Getters;
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};
use crate::{
    error::{Error, Result},
    models::delivery::DeliveryGroup,
    requests::quote::QuoteId,
};

model_id! {
    /// Provider-assigned identifier for a created delivery.
    pub struct DeliveryId
}

/// The delivery-creation request body: the quote envelope again, plus the
/// quote id when the session still holds one. Dispatching without a quote id
/// is legal — the provider just prices the deliveries fresh.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct DispatchRequest {
    flexible: bool,
    express: bool,
    timeslots: bool,
    limit: u32,
    deliveries: Vec<DeliveryGroup>,
    #[serde(rename = "quoteId", skip_serializing_if = "Option::is_none", default)]
    quote_id: Option<QuoteId>,
}

/// Build the dispatch request for an order.
///
/// Every group is stamped with the order's `reference_id`. When `cod` is set
/// (the order pays cash on delivery), each group also carries the amount its
/// courier collects, computed from its own packages.
pub fn prepare_dispatch(groups: Vec<DeliveryGroup>, reference_id: &str, cod: bool, quote_id: Option<QuoteId>) -> DispatchRequest {
    let deliveries = groups.into_iter()
        .map(|group| {
            let collect = if cod { Some(group.cash_on_delivery()) } else { None };
            group.for_dispatch(reference_id, collect)
        })
        .collect();
    DispatchRequest {
        flexible: true,
        express: false,
        timeslots: false,
        limit: 2,
        deliveries,
        quote_id,
    }
}

/// One created delivery in the provider's response. The provider sends more
/// fields; the id is the only one the integration keeps.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct CreatedDelivery {
    id: DeliveryId,
}

/// The provider's delivery-creation response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchResponse {
    payload: Vec<CreatedDelivery>,
}

impl DispatchResponse {
    /// Check the provider created exactly one delivery per submitted group
    /// and hand back their ids for the order record. A count mismatch means
    /// the dispatch failed as a whole.
    pub fn confirm(&self, expected: usize) -> Result<Vec<DeliveryId>> {
        if self.payload.len() != expected {
            Err(Error::DispatchIncomplete {
                expected,
                created: self.payload.len(),
            })?;
        }
        Ok(self.payload.iter().map(|delivery| delivery.id().clone()).collect())
    }
}

//! The quoting step: wrap a set of delivery groups in the provider's quote
//! envelope and pull the winning fare out of what comes back.

use getset::Getters;
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};
use crate::models::delivery::DeliveryGroup;

/// The provider's quote identifier. Numeric on the wire, opaque to us: we
/// hold it between the quote and dispatch steps and hand it straight back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(u64);

impl QuoteId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// The quote request envelope. The flag values are the integration's fixed
/// contract with the provider: flexible fares, no express, no timeslots, at
/// most two quotes back.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct QuoteRequest {
    flexible: bool,
    express: bool,
    timeslots: bool,
    limit: u32,
    deliveries: Vec<DeliveryGroup>,
}

impl QuoteRequest {
    /// Wrap delivery groups in the standard envelope.
    pub fn new(deliveries: Vec<DeliveryGroup>) -> Self {
        Self {
            flexible: true,
            express: false,
            timeslots: false,
            limit: 2,
            deliveries,
        }
    }
}

/// One priced estimate from the provider.
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Quote {
    #[serde(rename = "quoteId")]
    quote_id: QuoteId,
    cost: Decimal,
}

impl Quote {
    pub fn new(quote_id: QuoteId, cost: Decimal) -> Self {
        Self { quote_id, cost }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct QuotePayload {
    quotes: Vec<Quote>,
}

/// The provider's quote response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    payload: QuotePayload,
}

impl QuoteResponse {
    /// The quote the checkout flow uses: the first one listed. The provider
    /// orders its quotes, and the integration has always taken the head.
    pub fn best(&self) -> Option<&Quote> {
        self.payload.quotes.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::make_groups;

    #[test]
    fn envelope_carries_the_fixed_flags() {
        let request = QuoteRequest::new(make_groups(&["W1", "W2"]));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["flexible"], true);
        assert_eq!(json["express"], false);
        assert_eq!(json["timeslots"], false);
        assert_eq!(json["limit"], 2);
        assert_eq!(json["deliveries"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn pulls_the_first_quote() {
        let body = r#"{
            "payload": {
                "quotes": [
                    {"quoteId": 9182, "cost": 4.5},
                    {"quoteId": 9183, "cost": 7.25}
                ]
            }
        }"#;
        let response: QuoteResponse = serde_json::from_str(body).unwrap();
        let quote = response.best().unwrap();
        assert_eq!(quote.quote_id(), &QuoteId::new(9182));
        assert_eq!(quote.cost(), &num!(4.5));
    }

    #[test]
    fn no_quotes_means_no_fare() {
        let body = r#"{"payload": {"quotes": []}}"#;
        let response: QuoteResponse = serde_json::from_str(body).unwrap();
        assert!(response.best().is_none());
    }
}

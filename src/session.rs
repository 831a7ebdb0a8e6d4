//! The checkout session context: the state that has to survive between the
//! quoting step and the dispatch step for one customer's checkout.
//!
//! The caller owns one of these per checkout and passes it along explicitly
//! (stash it in order metadata, a session store, wherever — it serializes).
//! This crate never reads or writes any ambient storage on its own.

use chrono::{DateTime, Utc};
use getset::Getters;
use serde::{Serialize, Deserialize};
use crate::{
    models::delivery::DeliveryGroup,
    requests::{
        dispatch::{self, DispatchRequest},
        quote::{Quote, QuoteId, QuoteRequest},
    },
};

/// Everything one checkout carries from quote to dispatch: the delivery
/// groups as quoted, and the quote the provider answered with (if it did).
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct CheckoutSession {
    deliveries: Vec<DeliveryGroup>,
    quote_id: Option<QuoteId>,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl CheckoutSession {
    /// Open a session around a freshly-built set of delivery groups.
    pub fn new(deliveries: Vec<DeliveryGroup>, now: &DateTime<Utc>) -> Self {
        Self {
            deliveries,
            quote_id: None,
            created: now.clone(),
            updated: now.clone(),
        }
    }

    /// Like [`new`][Self::new], stamped with the current wall clock. Handy
    /// for callers that don't carry their own notion of "now".
    pub fn open(deliveries: Vec<DeliveryGroup>) -> Self {
        Self::new(deliveries, &crate::util::time::now())
    }

    /// The quote request for this session's deliveries.
    pub fn quote_request(&self) -> QuoteRequest {
        QuoteRequest::new(self.deliveries.clone())
    }

    /// Record the quote the provider accepted for this session. Re-quoting
    /// (the customer nudged the map marker again) just overwrites it.
    pub fn record_quote(&mut self, quote: &Quote, now: &DateTime<Utc>) {
        self.quote_id = Some(quote.quote_id().clone());
        self.updated = now.clone();
    }

    /// The dispatch request for the placed order. `reference_id` is the
    /// order's identifier on our side; `cod` says whether the courier
    /// collects cash. Works with or without a recorded quote.
    pub fn dispatch_request(&self, reference_id: &str, cod: bool) -> DispatchRequest {
        dispatch::prepare_dispatch(self.deliveries.clone(), reference_id, cod, self.quote_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util;
    use crate::util::test::{make_groups, make_quote};

    #[test]
    fn threads_the_quote_to_dispatch() {
        let now = util::time::now();
        let mut session = CheckoutSession::new(make_groups(&["W1", "W2"]), &now);
        assert_eq!(session.quote_id(), &None);
        assert_eq!(session.quote_request().deliveries().len(), 2);

        let quote = make_quote(9182, num!(4.5));
        let later = util::time::now();
        session.record_quote(&quote, &later);
        assert_eq!(session.quote_id(), &Some(QuoteId::new(9182)));
        assert_eq!(session.created(), &now);
        assert_eq!(session.updated(), &later);

        let request = session.dispatch_request("1042", false);
        assert_eq!(request.quote_id(), &Some(QuoteId::new(9182)));
        assert_eq!(request.deliveries().len(), 2);
    }

    #[test]
    fn dispatches_without_a_quote_when_the_session_lost_it() {
        let now = util::time::now();
        let session = CheckoutSession::new(make_groups(&["W1"]), &now);
        let request = session.dispatch_request("1042", true);
        assert_eq!(request.quote_id(), &None);
        assert!(request.deliveries()[0].cod().is_some());
    }

    #[test]
    fn survives_the_trip_through_storage() {
        let now = util::time::now();
        let mut session = CheckoutSession::new(make_groups(&["W1"]), &now);
        session.record_quote(&make_quote(9182, num!(4.5)), &now);
        let stored = serde_json::to_string(&session).unwrap();
        let restored: CheckoutSession = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored.quote_id(), session.quote_id());
        assert_eq!(restored.deliveries().len(), 1);
    }
}

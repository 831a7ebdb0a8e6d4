//! Requests are the primary interface for interacting with the delivery
//! provider. They are responsible for taking the needed information (which
//! must be passed in) and returning the request values the caller is
//! responsible for sending over whatever HTTP stack it uses.
//!
//! The high-level picture is that we're creating a functional API for the
//! checkout flow: grouping and validation logic all lives here, but network
//! transport, retries, and credential handling happen somewhere else and we
//! don't touch them. Every function in this module is pure and synchronous,
//! so concurrent checkout sessions can call in with no coordination.

use getset::Getters;
use url::Url;
use crate::error::Result;

pub mod build;
pub mod quote;
pub mod dispatch;

/// The provider's production API base.
pub const PROVIDER_BASE: &str = "https://api.shippify.co/v1/";

/// The three provider endpoints the checkout flow talks to, resolved against
/// one base so staging environments are a one-string change.
#[derive(Clone, Debug, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Endpoints {
    /// Warehouse listing (GET).
    places: Url,
    /// Price quotes (POST).
    quotes: Url,
    /// Delivery creation (POST).
    deliveries: Url,
}

impl Endpoints {
    /// Endpoints against the production base.
    pub fn production() -> Result<Self> {
        Self::with_base(PROVIDER_BASE)
    }

    /// Endpoints against an arbitrary base URL.
    pub fn with_base(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        Ok(Self {
            places: base.join("places")?,
            quotes: base.join("deliveries/quotes")?,
            deliveries: base.join("deliveries")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_endpoints_resolve() {
        let endpoints = Endpoints::production().unwrap();
        assert_eq!(endpoints.places().as_str(), "https://api.shippify.co/v1/places");
        assert_eq!(endpoints.quotes().as_str(), "https://api.shippify.co/v1/deliveries/quotes");
        assert_eq!(endpoints.deliveries().as_str(), "https://api.shippify.co/v1/deliveries");
    }

    #[test]
    fn staging_base_swaps_cleanly() {
        let endpoints = Endpoints::with_base("https://staging.example/v9/").unwrap();
        assert_eq!(endpoints.places().as_str(), "https://staging.example/v9/places");
        assert!(Endpoints::with_base("not a url").is_err());
    }
}

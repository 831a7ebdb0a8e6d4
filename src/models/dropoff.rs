//! The dropoff is the customer side of a delivery: who receives it and
//! where. It is collected once per checkout session and shared by every
//! delivery group built in that session.

use getset::Getters;
use serde::{Serialize, Deserialize};

/// Who the courier hands the packages to.
#[derive(Clone, Debug, PartialEq, Getters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct DropoffContact {
    name: String,
    email: String,
    // the provider schema calls this field `phonenumber`
    #[serde(rename = "phonenumber")]
    phone: String,
}

impl DropoffContact {
    pub fn builder() -> DropoffContactBuilder {
        DropoffContactBuilder::default()
    }
}

/// Where the packages go, plus the courier-facing instructions the customer
/// typed at checkout (not every flow collects them).
#[derive(Clone, Debug, PartialEq, Getters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct DropoffLocation {
    address: String,
    lat: f64,
    lng: f64,
    #[builder(setter(strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    instructions: Option<String>,
}

impl DropoffLocation {
    pub fn builder() -> DropoffLocationBuilder {
        DropoffLocationBuilder::default()
    }
}

/// The complete customer destination for one checkout session.
#[derive(Clone, Debug, PartialEq, Getters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct Dropoff {
    contact: DropoffContact,
    location: DropoffLocation,
}

impl Dropoff {
    pub fn builder() -> DropoffBuilder {
        DropoffBuilder::default()
    }
}

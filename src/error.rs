//! The main error enum for the crate lives here, and documents the various
//! conditions that can arise while turning a cart into delivery requests.
//!
//! Nothing in this crate panics on bad input; invalidity is always reported
//! through [`Result`].

use thiserror::Error;

/// An error type that covers everything that can go wrong while grouping a
/// cart into delivery requests or interpreting a provider response.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A builder was missing a required field.
    #[error("error building object: {0}")]
    BuilderFailed(String),
    /// The provider created fewer (or more) deliveries than we asked for.
    /// The dispatch must be treated as failed; nothing should be marked
    /// shipped.
    #[error("provider created {created} deliveries, expected {expected}")]
    DispatchIncomplete {
        /// How many delivery groups were submitted.
        expected: usize,
        /// How many deliveries the provider reported creating.
        created: usize,
    },
    /// A provider endpoint could not be parsed as a URL.
    #[error("invalid provider endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    /// A line item has no warehouse assigned to it, so there is no pickup
    /// point to dispatch it from. Fatal to the whole build.
    #[error("line item {0} has no warehouse assignment")]
    MissingWarehouseAssignment(crate::models::line_item::ProductId),
    /// A line item names a warehouse the provider doesn't know about. Fatal
    /// to the whole build.
    #[error("line item {product_id} references unknown warehouse {warehouse_id}")]
    UnknownWarehouse {
        /// The offending line item's product.
        product_id: crate::models::line_item::ProductId,
        /// The warehouse id that failed to resolve.
        warehouse_id: crate::models::warehouse::WarehouseId,
    },
}

/// Standard result, backed by our `Error` enum.
pub type Result<T> = std::result::Result<T, Error>;

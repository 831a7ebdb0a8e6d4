//! Shared machinery for building our models.

#[macro_use]
pub(crate) mod model_id;

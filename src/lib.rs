//! Tooltip text for tag helpers and their attributes
//!
//! Renders tag helper metadata (qualified type names, property names and raw
//! documentation comments) into completion and hover descriptions, in
//! markdown or plain text depending on what the client negotiated.

pub mod description;
pub mod logging;

#[cfg(test)]
mod test_utils;

pub use description::{
    AttributeDescriptionEntry, CapabilityProvider, ClientFormatCapability, DescriptionError,
    DescriptionFactory, DescriptionRequest, EntityDescriptionEntry, FormattedDescription,
    LazyCapabilities, create_description,
};

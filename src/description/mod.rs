//! Tag helper description rendering
//!
//! Turns tag helper and bound attribute metadata into tooltip text for
//! completion and hover. Leaf modules handle one concern each:
//!
//! - [`names`]: qualified name reduction and primitive aliases
//! - [`cref`]: documentation cross-reference resolution
//! - [`summary`]: summary extraction and cleanup
//! - [`capability`]: client documentation format negotiation
//! - [`formatter`]: per-entity blocks and the final tooltip

pub mod capability;
pub mod cref;
pub mod error;
pub mod formatter;
pub mod names;
pub mod summary;

pub use capability::{CapabilityProvider, ClientFormatCapability, LazyCapabilities};
pub use cref::{CrefKind, resolve_cref};
pub use error::DescriptionError;
pub use formatter::{
    AttributeDescriptionEntry, DescriptionFactory, DescriptionRequest, EntityDescriptionEntry,
    FormattedDescription, create_description, resolve_owner_type_name,
};
pub use names::{reduce_member_name, reduce_type_name, simple_name};
pub use summary::{clean_summary_content, try_extract_summary};

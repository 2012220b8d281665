//! Tooltip text for tag helper elements and attributes
//!
//! Each described entity becomes one block: a header naming the tag helper
//! (or attribute property) followed by its cleaned documentation summary.
//! Blocks are joined with a `---` rule. Headers are bolded only when the
//! client accepts markdown.

use lsp_types::{MarkupContent, MarkupKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::capability::{CapabilityProvider, ClientFormatCapability};
use super::error::DescriptionError;
use super::names::{reduce_type_name, simple_name, split_once_top_level};
use super::summary::{clean_summary_content, try_extract_summary};

/// Line placed between consecutive entity blocks
const BLOCK_SEPARATOR: &str = "\n---\n";

// ============================================================================
// Request and result types
// ============================================================================

/// Description of a tag helper type matched by an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDescriptionEntry {
    /// Fully qualified tag helper type name
    pub qualified_type_name: String,

    /// Raw documentation comment, possibly empty
    #[serde(default)]
    pub documentation: String,
}

impl EntityDescriptionEntry {
    pub fn new(qualified_type_name: impl Into<String>, documentation: impl Into<String>) -> Self {
        Self {
            qualified_type_name: qualified_type_name.into(),
            documentation: documentation.into(),
        }
    }
}

/// Description of a bound attribute property on a tag helper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDescriptionEntry {
    /// `"<ReturnType> <OwnerType>.<PropertyName>"`
    pub display_name: String,

    pub property_name: String,

    /// Fully qualified return type of the property
    pub return_type_name: String,

    /// Raw documentation comment, possibly empty
    #[serde(default)]
    pub documentation: String,
}

impl AttributeDescriptionEntry {
    pub fn new(
        display_name: impl Into<String>,
        property_name: impl Into<String>,
        return_type_name: impl Into<String>,
        documentation: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            property_name: property_name.into(),
            return_type_name: return_type_name.into(),
            documentation: documentation.into(),
        }
    }
}

/// Entities to describe in a single tooltip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "entries", rename_all = "lowercase")]
pub enum DescriptionRequest {
    Element(Vec<EntityDescriptionEntry>),
    Attribute(Vec<AttributeDescriptionEntry>),
}

impl DescriptionRequest {
    pub fn len(&self) -> usize {
        match self {
            Self::Element(entries) => entries.len(),
            Self::Attribute(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rendered tooltip text and the style it was rendered in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedDescription {
    pub text: String,
    pub is_markup: bool,
}

impl FormattedDescription {
    pub fn markup_kind(&self) -> MarkupKind {
        if self.is_markup {
            MarkupKind::Markdown
        } else {
            MarkupKind::PlainText
        }
    }
}

impl From<FormattedDescription> for MarkupContent {
    fn from(description: FormattedDescription) -> Self {
        MarkupContent {
            kind: description.markup_kind(),
            value: description.text,
        }
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Builds descriptions using the capability of the client being served
#[derive(Debug)]
pub struct DescriptionFactory<P> {
    capabilities: P,
}

impl<P: CapabilityProvider> DescriptionFactory<P> {
    pub fn new(capabilities: P) -> Self {
        Self { capabilities }
    }

    /// Render a request for the client; fails only when it has no entries
    pub fn try_create_description(
        &self,
        request: &DescriptionRequest,
    ) -> Result<FormattedDescription, DescriptionError> {
        if request.is_empty() {
            return Err(DescriptionError::NoContent);
        }

        let capability = self.capabilities.capability();
        create_description(request, &capability)
    }
}

/// Render a request against an explicit capability snapshot
pub fn create_description(
    request: &DescriptionRequest,
    capability: &ClientFormatCapability,
) -> Result<FormattedDescription, DescriptionError> {
    if request.is_empty() {
        debug!("Description requested without any entries");
        return Err(DescriptionError::NoContent);
    }

    let is_markup = capability.supports_markdown();

    let blocks: Vec<String> = match request {
        DescriptionRequest::Element(entries) => entries
            .iter()
            .map(|entry| render_block(element_header(entry, is_markup), &entry.documentation))
            .collect(),
        DescriptionRequest::Attribute(entries) => entries
            .iter()
            .map(|entry| render_block(attribute_header(entry, is_markup), &entry.documentation))
            .collect(),
    };

    debug!(
        "Rendered {} description block(s) as {}",
        blocks.len(),
        if is_markup { "markdown" } else { "plain text" }
    );

    Ok(FormattedDescription {
        text: blocks.join(BLOCK_SEPARATOR),
        is_markup,
    })
}

/// Owner type of an attribute property, taken from its display name
///
/// `"string Foo.Bar.SomeProperty"` yields `"Foo.Bar"`. The return type ends
/// at the first space outside any generic or parameter list, so spaces inside
/// either the return type or the owner type's generic arguments are kept.
pub fn resolve_owner_type_name(entry: &AttributeDescriptionEntry) -> String {
    let qualified_property = split_once_top_level(&entry.display_name, ' ')
        .map_or(entry.display_name.as_str(), |(_, rest)| rest);

    let property_suffix = format!(".{}", entry.property_name);
    let owner = qualified_property
        .strip_suffix(property_suffix.as_str())
        .or_else(|| qualified_property.rsplit_once('.').map(|(owner, _)| owner))
        .unwrap_or(qualified_property);

    owner.to_string()
}

// ============================================================================
// Rendering helpers
// ============================================================================

fn bold(text: &str, is_markup: bool) -> String {
    if is_markup {
        format!("**{text}**")
    } else {
        text.to_string()
    }
}

fn element_header(entry: &EntityDescriptionEntry, is_markup: bool) -> String {
    bold(&reduce_type_name(&entry.qualified_type_name), is_markup)
}

fn attribute_header(entry: &AttributeDescriptionEntry, is_markup: bool) -> String {
    let return_type = reduce_type_name(simple_name(&entry.return_type_name));
    let owner_type = reduce_type_name(&resolve_owner_type_name(entry));

    format!(
        "{} {}.{}",
        bold(&return_type, is_markup),
        owner_type,
        bold(&entry.property_name, is_markup)
    )
}

fn render_block(header: String, documentation: &str) -> String {
    match try_extract_summary(Some(documentation)) {
        Some(summary) => format!("{header}\n\n{}", clean_summary_content(&summary)),
        None => {
            trace!("No summary for {}, rendering header only", header);
            header
        }
    }
}

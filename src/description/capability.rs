//! Client documentation format capability
//!
//! The negotiated formats are owned by whoever holds the client's
//! `initialize` parameters. Formatting only ever sees an immutable snapshot
//! obtained through [`CapabilityProvider`].

use std::sync::{Arc, OnceLock};

use lsp_types::{ClientCapabilities, MarkupKind};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Snapshot of the documentation formats a client accepts, in preference order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientFormatCapability {
    formats: Vec<MarkupKind>,
}

impl ClientFormatCapability {
    /// Create a capability from an ordered list of formats
    pub fn new(formats: Vec<MarkupKind>) -> Self {
        Self { formats }
    }

    /// A client that only renders plain text
    pub fn plain_text() -> Self {
        Self::new(vec![MarkupKind::PlainText])
    }

    /// A client that prefers markdown
    pub fn markdown() -> Self {
        Self::new(vec![MarkupKind::Markdown, MarkupKind::PlainText])
    }

    /// Read the completion documentation formats from LSP client capabilities
    ///
    /// Falls back to the hover content formats when the client does not
    /// declare completion item documentation formats. Missing capabilities
    /// produce an empty list, which renders as plain text.
    pub fn from_client_capabilities(capabilities: &ClientCapabilities) -> Self {
        let text_document = capabilities.text_document.as_ref();

        let completion_formats = text_document
            .and_then(|td| td.completion.as_ref())
            .and_then(|completion| completion.completion_item.as_ref())
            .and_then(|item| item.documentation_format.clone());

        let formats = completion_formats
            .or_else(|| {
                text_document
                    .and_then(|td| td.hover.as_ref())
                    .and_then(|hover| hover.content_format.clone())
            })
            .unwrap_or_default();

        debug!("Client documentation formats: {:?}", formats);
        Self::new(formats)
    }

    /// Formats in the client's preference order
    pub fn formats(&self) -> &[MarkupKind] {
        &self.formats
    }

    /// Whether markdown may be used; markdown wins whenever it is listed
    pub fn supports_markdown(&self) -> bool {
        self.formats.contains(&MarkupKind::Markdown)
    }

    /// The markup kind descriptions should be rendered in
    pub fn markup_kind(&self) -> MarkupKind {
        if self.supports_markdown() {
            MarkupKind::Markdown
        } else {
            MarkupKind::PlainText
        }
    }
}

// ============================================================================
// Providers
// ============================================================================

/// Read-only source of the client's format capability
pub trait CapabilityProvider: Send + Sync {
    /// Current capability snapshot
    fn capability(&self) -> ClientFormatCapability;
}

impl CapabilityProvider for ClientFormatCapability {
    fn capability(&self) -> ClientFormatCapability {
        self.clone()
    }
}

impl<P: CapabilityProvider + ?Sized> CapabilityProvider for Arc<P> {
    fn capability(&self) -> ClientFormatCapability {
        (**self).capability()
    }
}

/// Provider that resolves the capability on first use and caches it
pub struct LazyCapabilities<F> {
    init: F,
    resolved: OnceLock<ClientFormatCapability>,
}

impl<F> LazyCapabilities<F>
where
    F: Fn() -> ClientFormatCapability + Send + Sync,
{
    pub fn new(init: F) -> Self {
        Self {
            init,
            resolved: OnceLock::new(),
        }
    }

    /// Whether the capability has been resolved yet
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

impl<F> CapabilityProvider for LazyCapabilities<F>
where
    F: Fn() -> ClientFormatCapability + Send + Sync,
{
    fn capability(&self) -> ClientFormatCapability {
        self.resolved.get_or_init(|| (self.init)()).clone()
    }
}

impl<F> std::fmt::Debug for LazyCapabilities<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyCapabilities")
            .field("resolved", &self.resolved.get())
            .finish()
    }
}

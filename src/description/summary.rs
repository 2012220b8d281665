//! Summary extraction and cleanup for documentation comments
//!
//! Documentation arrives as raw doc-comment text: sometimes a proper
//! `<summary>` block surrounded by other elements, sometimes plain prose.
//! Extraction picks the summary out; cleanup turns inline `<see cref>` and
//! `<seealso cref>` references into code spans.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use super::cref::resolve_cref;

/// First `<summary>...</summary>` pair, shortest match, across lines
static SUMMARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<summary>(.*?)</summary>").expect("summary pattern is valid")
});

/// Self-closing `<see cref="..." />` and `<seealso cref="..." />` tags
static CREF_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<(?:see|seealso)\s+cref="([^"]+)"\s*/>"#).expect("cref tag pattern is valid")
});

fn is_line_break(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}

/// Extract the summary section of a documentation comment
///
/// Returns the inner text of the first complete `<summary>` block exactly as
/// written. Without one, documentation that looks like other markup yields
/// `None` and anything else is treated as free-form prose and returned with
/// its surrounding line breaks removed.
pub fn try_extract_summary(documentation: Option<&str>) -> Option<String> {
    let documentation = documentation.filter(|doc| !doc.is_empty())?;

    if let Some(captures) = SUMMARY_PATTERN.captures(documentation) {
        return captures.get(1).map(|inner| inner.as_str().to_string());
    }

    if documentation.trim().starts_with('<') {
        debug!("Documentation is markup without a summary block");
        return None;
    }

    Some(documentation.trim_matches(is_line_break).to_string())
}

/// Replace inline cref tags with code spans and trim surrounding whitespace
///
/// Cref generic braces are shown in source style, so `List{String}` renders
/// as `` `List<String>` ``.
///
/// Only the start and end of the whole summary are trimmed; interior lines
/// keep their indentation. An indented second paragraph therefore survives
/// as-is (`"\n    A.\n\n    B.\n"` becomes `"A.\n\n    B."`), which a
/// markdown client may render as a code block. Trimming every line would
/// avoid that but would also flatten deliberate indentation.
pub fn clean_summary_content(summary: &str) -> String {
    let replaced = CREF_TAG_PATTERN.replace_all(summary, |captures: &Captures<'_>| {
        let resolved = resolve_cref(&captures[1]).replace('{', "<").replace('}', ">");
        format!("`{resolved}`")
    });

    replaced.trim().to_string()
}

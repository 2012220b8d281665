//! Documentation cross-reference (`cref`) resolution

use tracing::debug;

use super::names::{reduce_member_name, reduce_type_name};

/// The member kind encoded in the prefix of a cref token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrefKind {
    Type,
    Property,
    Field,
    Method,
}

impl CrefKind {
    /// Parse the single-letter discriminator of a cref token
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'T' => Some(Self::Type),
            'P' => Some(Self::Property),
            'F' => Some(Self::Field),
            'M' => Some(Self::Method),
            _ => None,
        }
    }
}

/// Split a cref token into its kind and qualified name
///
/// Returns `None` unless the token is a known kind letter, a colon and a
/// non-empty qualified name.
pub fn parse_cref(token: &str) -> Option<(CrefKind, &str)> {
    let mut chars = token.chars();
    let kind = CrefKind::from_prefix(chars.next()?)?;
    let qualified_name = chars.as_str().strip_prefix(':')?;

    if qualified_name.is_empty() {
        return None;
    }

    Some((kind, qualified_name))
}

/// Resolve a cref token such as `T:System.String` to a display name
///
/// Unresolvable tokens produce an empty string.
pub fn resolve_cref(token: &str) -> String {
    match parse_cref(token) {
        Some((CrefKind::Type, name)) => reduce_type_name(name),
        Some((CrefKind::Property | CrefKind::Field | CrefKind::Method, name)) => {
            reduce_member_name(name)
        }
        None => {
            debug!("Unresolvable cref token: {:?}", token);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cref_invalid_short_value() {
        assert_eq!(resolve_cref("T:"), "");
        assert_eq!(resolve_cref("T"), "");
        assert_eq!(resolve_cref(""), "");
    }

    #[test]
    fn test_resolve_cref_unknown_identifier() {
        assert_eq!(resolve_cref("X:"), "");
        assert_eq!(resolve_cref("X:Foo.Bar"), "");
        assert_eq!(resolve_cref("TT:Foo.Bar"), "");
    }

    #[test]
    fn test_resolve_cref_missing_colon() {
        assert_eq!(resolve_cref("TFoo.Bar"), "");
    }

    #[test]
    fn test_resolve_cref_type() {
        let value = resolve_cref("T:Microsoft.AspNetCore.SometTagHelpers.SomeType");
        assert_eq!(value, "SomeType");
    }

    #[test]
    fn test_resolve_cref_property() {
        let value = resolve_cref("P:Microsoft.AspNetCore.SometTagHelpers.SomeType.SomeProperty");
        assert_eq!(value, "SomeType.SomeProperty");
    }

    #[test]
    fn test_resolve_cref_field_and_method() {
        assert_eq!(
            resolve_cref("F:Microsoft.AspNetCore.SomeType.SomeField"),
            "SomeType.SomeField"
        );
        assert_eq!(
            resolve_cref("M:Microsoft.AspNetCore.SomeType.Render(System.String,System.Int32)"),
            "SomeType.Render(System.String,System.Int32)"
        );
    }

    #[test]
    fn test_resolve_cref_non_ascii_prefix_does_not_panic() {
        assert_eq!(resolve_cref("é:Foo"), "");
        assert_eq!(resolve_cref("ü"), "");
    }

    #[test]
    fn test_parse_cref_kinds() {
        assert_eq!(parse_cref("T:Foo"), Some((CrefKind::Type, "Foo")));
        assert_eq!(parse_cref("M:Foo.Bar()"), Some((CrefKind::Method, "Foo.Bar()")));
        assert_eq!(parse_cref("Q:Foo"), None);
    }
}

//! Display-name reduction for fully qualified type and member names
//!
//! Names arrive either in source style (`List<System.String>`) or in
//! documentation-comment style (`List{System.String}`), optionally with a
//! method parameter list. Reduction keeps only the trailing segment(s) and
//! leaves anything with mismatched delimiters untouched.

use tracing::debug;

// ============================================================================
// Primitive aliases
// ============================================================================

/// Fully qualified primitive type names and their keyword aliases
const PRIMITIVE_ALIASES: &[(&str, &str)] = &[
    ("System.Byte", "byte"),
    ("System.SByte", "sbyte"),
    ("System.Int32", "int"),
    ("System.UInt32", "uint"),
    ("System.Int16", "short"),
    ("System.UInt16", "ushort"),
    ("System.Int64", "long"),
    ("System.UInt64", "ulong"),
    ("System.Single", "float"),
    ("System.Double", "double"),
    ("System.Char", "char"),
    ("System.Boolean", "bool"),
    ("System.Object", "object"),
    ("System.String", "string"),
    ("System.Decimal", "decimal"),
];

/// Map a fully qualified primitive type name to its keyword alias
///
/// Names outside the alias table are returned unchanged.
pub fn simple_name(type_name: &str) -> &str {
    PRIMITIVE_ALIASES
        .iter()
        .find(|(full_name, _)| *full_name == type_name)
        .map(|(_, alias)| *alias)
        .unwrap_or(type_name)
}

// ============================================================================
// Qualified name reduction
// ============================================================================

/// Reduce a type name to its last top-level segment
///
/// `System.Collections.Generic.List<System.String>` becomes
/// `List<System.String>`. Unbalanced names are returned verbatim.
pub fn reduce_type_name(name: &str) -> String {
    reduce_full_name(name, 1)
}

/// Reduce a member name to `OwnerType.Member`, keeping generic and
/// parameter lists attached to both segments
pub fn reduce_member_name(name: &str) -> String {
    reduce_full_name(name, 2)
}

/// Keep the last `segments` top-level dot-separated pieces of `name`
///
/// Scans once from the end, tracking the expected opener for every closer
/// seen so far. A dot only counts as a boundary when nothing is open. The
/// scan always runs to the start so that a stray delimiter anywhere in the
/// name leaves it untouched.
fn reduce_full_name(name: &str, segments: usize) -> String {
    let mut expected_openers: Vec<char> = Vec::new();
    let mut boundaries = 0;
    let mut cut = None;

    for (index, ch) in name.char_indices().rev() {
        match ch {
            '>' => expected_openers.push('<'),
            '}' => expected_openers.push('{'),
            ')' => expected_openers.push('('),
            '<' | '{' | '(' => {
                if expected_openers.pop() != Some(ch) {
                    debug!("Mismatched '{}' in qualified name, keeping as-is: {}", ch, name);
                    return name.to_string();
                }
            }
            '.' if expected_openers.is_empty() && cut.is_none() => {
                boundaries += 1;
                if boundaries == segments {
                    cut = Some(index + 1);
                }
            }
            _ => {}
        }
    }

    if !expected_openers.is_empty() {
        debug!("Unbalanced qualified name, keeping as-is: {}", name);
        return name.to_string();
    }

    match cut {
        Some(start) => name[start..].to_string(),
        None => name.to_string(),
    }
}

/// Split `text` at the first `separator` that is not nested inside `<>`,
/// `{}` or `()`
///
/// Closers without a matching opener are ignored rather than treated as
/// errors; callers only need the position of the first top-level separator.
pub fn split_once_top_level(text: &str, separator: char) -> Option<(&str, &str)> {
    let mut depth = 0usize;

    for (index, ch) in text.char_indices() {
        match ch {
            '<' | '{' | '(' => depth += 1,
            '>' | '}' | ')' => depth = depth.saturating_sub(1),
            _ if ch == separator && depth == 0 => {
                return Some((&text[..index], &text[index + ch.len_utf8()..]));
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name_noops_for_non_primitive_type() {
        let type_name = "Microsoft.AspNetCore.SomeType";
        assert_eq!(simple_name(type_name), type_name);
    }

    #[test]
    fn test_simple_name_simplifies_primitive_types() {
        assert_eq!(simple_name("System.Int32"), "int");
        assert_eq!(simple_name("System.Boolean"), "bool");
        assert_eq!(simple_name("System.String"), "string");
        assert_eq!(simple_name("System.Decimal"), "decimal");
    }

    #[test]
    fn test_simple_name_is_idempotent() {
        for name in ["System.Int32", "System.Boolean?", "Foo.Bar", "int", ""] {
            let once = simple_name(name);
            assert_eq!(simple_name(once), once);
        }
    }

    #[test]
    fn test_split_once_top_level_skips_nested_separators() {
        assert_eq!(
            split_once_top_level("Dictionary<String, Object> Foo.Grid<K, V>.Items", ' '),
            Some(("Dictionary<String, Object>", "Foo.Grid<K, V>.Items"))
        );
        assert_eq!(split_once_top_level("Foo<A, B>", ' '), None);
        assert_eq!(split_once_top_level("a b", ' '), Some(("a", "b")));
    }

    #[test]
    fn test_reduce_type_name_plain() {
        let reduced = reduce_type_name("Microsoft.AspNetCore.SomeTagHelpers.SomeTypeName");
        assert_eq!(reduced, "SomeTypeName");
    }

    #[test]
    fn test_reduce_type_name_generics() {
        let reduced = reduce_type_name("System.Collections.Generic.List<System.String>");
        assert_eq!(reduced, "List<System.String>");
    }

    #[test]
    fn test_reduce_type_name_cref_generics() {
        let reduced = reduce_type_name("System.Collections.Generic.List{System.String}");
        assert_eq!(reduced, "List{System.String}");
    }

    #[test]
    fn test_reduce_type_name_nested_generics() {
        let reduced =
            reduce_type_name("Microsoft.AspNetCore.SometTagHelpers.SomeType<Foo.Bar<Baz.Phi>>");
        assert_eq!(reduced, "SomeType<Foo.Bar<Baz.Phi>>");
    }

    #[test]
    fn test_reduce_type_name_without_namespace() {
        assert_eq!(reduce_type_name("SomeType"), "SomeType");
        assert_eq!(reduce_type_name(""), "");
    }

    #[test]
    fn test_reduce_type_name_unbalanced_returns_original() {
        for content in [
            "Microsoft.AspNetCore.SometTagHelpers.SomeType.Foo.Bar<Baz.Phi>>",
            "Microsoft.AspNetCore.SometTagHelpers.SomeType.Foo.Bar{Baz.Phi}}",
        ] {
            assert_eq!(reduce_type_name(content), content);
        }
    }

    #[test]
    fn test_reduce_member_name_plain() {
        let reduced =
            reduce_member_name("Microsoft.AspNetCore.SometTagHelpers.SomeType.SomeProperty");
        assert_eq!(reduced, "SomeType.SomeProperty");
    }

    #[test]
    fn test_reduce_member_name_generics() {
        let reduced = reduce_member_name(
            "Microsoft.AspNetCore.SometTagHelpers.SomeType<Foo.Bar>.SomeProperty<Foo.Bar>",
        );
        assert_eq!(reduced, "SomeType<Foo.Bar>.SomeProperty<Foo.Bar>");
    }

    #[test]
    fn test_reduce_member_name_cref_generics() {
        let reduced = reduce_member_name(
            "Microsoft.AspNetCore.SometTagHelpers.SomeType{Foo.Bar}.SomeProperty{Foo.Bar}",
        );
        assert_eq!(reduced, "SomeType{Foo.Bar}.SomeProperty{Foo.Bar}");
    }

    #[test]
    fn test_reduce_member_name_nested_generics_methods_types() {
        let reduced = reduce_member_name(
            "Microsoft.AspNetCore.SometTagHelpers.SomeType<Foo.Bar<Baz,Fi>>.SomeMethod(Foo.Bar<System.String>,Baz<Something>.Fi)",
        );
        assert_eq!(
            reduced,
            "SomeType<Foo.Bar<Baz,Fi>>.SomeMethod(Foo.Bar<System.String>,Baz<Something>.Fi)"
        );
    }

    #[test]
    fn test_reduce_member_name_unbalanced_returns_original() {
        for content in [
            "Microsoft.AspNetCore.SometTagHelpers.SomeType.Foo.Bar<Baz.Phi>>",
            "Microsoft.AspNetCore.SometTagHelpers.SomeType.Foo.Bar{Baz.Phi}}",
            "Microsoft.AspNetCore.SometTagHelpers.SomeType.Foo.Bar(Baz.Phi))",
            "Microsoft.AspNetCore.SometTagHelpers.SomeType.Foo{.>",
        ] {
            assert_eq!(reduce_member_name(content), content);
        }
    }

    #[test]
    fn test_reduce_name_stray_opener_before_boundary_returns_original() {
        assert_eq!(reduce_member_name("Foo<Bar.Baz.Qux"), "Foo<Bar.Baz.Qux");
        assert_eq!(reduce_type_name("Foo(Bar.Baz"), "Foo(Bar.Baz");
    }

    #[test]
    fn test_reduce_name_interleaved_families_returns_original() {
        assert_eq!(reduce_type_name("Foo.Bar<Baz{Qux>}"), "Foo.Bar<Baz{Qux>}");
    }
}

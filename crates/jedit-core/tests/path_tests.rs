//! Parsing, display, and navigation arithmetic for `PathExpr`.

use jedit_core::{JeditError, PathExpr, Segment};

fn key(name: &str) -> Segment {
    Segment::Key(name.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_single_key() {
    let path = PathExpr::parse("foo").unwrap();
    assert_eq!(path.segments(), &[key("foo")]);
}

#[test]
fn parse_dotted_keys() {
    let path = PathExpr::parse("foo.bar.baz").unwrap();
    assert_eq!(path.segments(), &[key("foo"), key("bar"), key("baz")]);
}

#[test]
fn parse_key_with_index() {
    let path = PathExpr::parse("items[3]").unwrap();
    assert_eq!(path.segments(), &[key("items"), Segment::Index(3)]);
}

#[test]
fn parse_index_then_key() {
    let path = PathExpr::parse("items[3].name").unwrap();
    assert_eq!(
        path.segments(),
        &[key("items"), Segment::Index(3), key("name")]
    );
}

#[test]
fn parse_consecutive_indices() {
    let path = PathExpr::parse("grid[0][1]").unwrap();
    assert_eq!(
        path.segments(),
        &[key("grid"), Segment::Index(0), Segment::Index(1)]
    );
}

#[test]
fn parse_root_index() {
    // A document whose root is an array.
    let path = PathExpr::parse("[2].id").unwrap();
    assert_eq!(path.segments(), &[Segment::Index(2), key("id")]);
}

#[test]
fn parse_dot_before_bracket_is_tolerated() {
    // Dotted-index notation some path printers emit: `a.[0]` == `a[0]`.
    let path = PathExpr::parse("a.[0]").unwrap();
    assert_eq!(path.segments(), &[key("a"), Segment::Index(0)]);
}

#[test]
fn parse_empty_string_is_root() {
    assert!(PathExpr::parse("").unwrap().is_root());
}

#[test]
fn parse_root_marker_alone() {
    assert!(PathExpr::parse("$").unwrap().is_root());
}

#[test]
fn parse_root_marker_prefix() {
    let path = PathExpr::parse("$.a.b").unwrap();
    assert_eq!(path.segments(), &[key("a"), key("b")]);
}

#[test]
fn parse_root_marker_with_index() {
    let path = PathExpr::parse("$[0]").unwrap();
    assert_eq!(path.segments(), &[Segment::Index(0)]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Malformed expressions
// ─────────────────────────────────────────────────────────────────────────────

fn assert_path_syntax(expr: &str) {
    match PathExpr::parse(expr) {
        Err(JeditError::PathSyntax { .. }) => {}
        other => panic!("expected PathSyntax for {expr:?}, got {other:?}"),
    }
}

#[test]
fn parse_rejects_trailing_dot() {
    assert_path_syntax("a.");
    assert_path_syntax("$.");
}

#[test]
fn parse_rejects_empty_segment() {
    assert_path_syntax("a..b");
}

#[test]
fn parse_rejects_leading_dot() {
    assert_path_syntax(".a");
}

#[test]
fn parse_rejects_non_integer_index() {
    assert_path_syntax("a[x]");
    assert_path_syntax("a[1.5]");
}

#[test]
fn parse_rejects_negative_index() {
    assert_path_syntax("a[-1]");
}

#[test]
fn parse_rejects_unterminated_bracket() {
    assert_path_syntax("a[1");
    assert_path_syntax("a[");
}

#[test]
fn parse_rejects_empty_bracket() {
    assert_path_syntax("a[]");
}

#[test]
fn parse_rejects_text_after_bracket() {
    assert_path_syntax("a[1]x");
}

#[test]
fn parse_rejects_stray_closing_bracket() {
    assert_path_syntax("a]b");
}

#[test]
fn parse_rejects_overflowing_index() {
    assert_path_syntax("a[99999999999999999999999999]");
}

// ─────────────────────────────────────────────────────────────────────────────
// Display, join, up
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn display_root() {
    assert_eq!(PathExpr::root().to_string(), "$");
}

#[test]
fn display_mixed_path() {
    let path = PathExpr::parse("servers[0].host").unwrap();
    assert_eq!(path.to_string(), "$.servers[0].host");
}

#[test]
fn display_round_trips_through_parse() {
    let path = PathExpr::parse("a[2].b.c[0]").unwrap();
    let reparsed = PathExpr::parse(&path.to_string()).unwrap();
    assert_eq!(path, reparsed);
}

#[test]
fn join_concatenates_segments() {
    let base = PathExpr::parse("a.b").unwrap();
    let rel = PathExpr::parse("c[1]").unwrap();
    assert_eq!(base.join(&rel), PathExpr::parse("a.b.c[1]").unwrap());
}

#[test]
fn join_with_root_is_identity() {
    let base = PathExpr::parse("a.b").unwrap();
    assert_eq!(base.join(&PathExpr::root()), base);
    assert_eq!(PathExpr::root().join(&base), base);
}

#[test]
fn up_drops_last_segment() {
    let path = PathExpr::parse("a.b[3]").unwrap();
    assert_eq!(path.up(1), PathExpr::parse("a.b").unwrap());
    assert_eq!(path.up(2), PathExpr::parse("a").unwrap());
}

#[test]
fn up_saturates_at_root() {
    let path = PathExpr::parse("a.b").unwrap();
    assert!(path.up(5).is_root());
    assert!(PathExpr::root().up(1).is_root());
}

#[test]
fn from_iterator_collects_segments() {
    let path: PathExpr = vec![key("a"), Segment::Index(2)].into_iter().collect();
    assert_eq!(path.to_string(), "$.a[2]");
}

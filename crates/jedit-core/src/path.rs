//! Structured path expressions.
//!
//! A [`PathExpr`] is the parsed form of the restricted dot/bracket
//! notation: `servers[0].host` descends into key `servers`, index `0`,
//! key `host`. Paths are parsed once at the boundary; all navigation
//! arithmetic (joining, moving up) operates on segments, never on string
//! slicing.
//!
//! The accepted grammar is deliberately narrow -- dot-separated keys and
//! single bracketed non-negative integer indices, with an optional leading
//! `$` root marker. Wildcards, filters, and slices are not path
//! expressions here.

use std::fmt;
use std::str::FromStr;

use crate::error::{JeditError, Result};

/// One step of a path: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// An ordered sequence of segments, read left to right from the document
/// root. The empty sequence addresses the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathExpr {
    segments: Vec<Segment>,
}

impl PathExpr {
    /// The empty path, addressing the document root.
    pub fn root() -> PathExpr {
        PathExpr::default()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Segment-level concatenation: `self` then `other`.
    pub fn join(&self, other: &PathExpr) -> PathExpr {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        PathExpr { segments }
    }

    /// Drop the last `levels` segments, saturating at the root.
    pub fn up(&self, levels: usize) -> PathExpr {
        let keep = self.segments.len().saturating_sub(levels);
        PathExpr {
            segments: self.segments[..keep].to_vec(),
        }
    }

    /// Parse the restricted dot/bracket syntax: `key`, `key.sub`,
    /// `key[3].sub`, `a[0][1]`, with an optional leading `$` (and optional
    /// following `.`). The empty string parses as the root.
    pub fn parse(expr: &str) -> Result<PathExpr> {
        let mut rest = match expr.strip_prefix('$') {
            Some(after_root) => match after_root.strip_prefix('.') {
                Some("") => return Err(JeditError::path_syntax(expr, "trailing `.`")),
                Some(after_dot) => after_dot,
                None => after_root,
            },
            None => expr,
        };

        let mut segments = Vec::new();
        // A bare key is only legal at the start or right after a `.`;
        // after `]` the next segment must be introduced by `.` or `[`.
        let mut key_position = true;

        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix('[') {
                let close = after
                    .find(']')
                    .ok_or_else(|| JeditError::path_syntax(expr, "unterminated `[`"))?;
                let digits = &after[..close];
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(JeditError::path_syntax(
                        expr,
                        "array index must be a non-negative integer",
                    ));
                }
                let index: usize = digits
                    .parse()
                    .map_err(|_| JeditError::path_syntax(expr, "array index out of range"))?;
                segments.push(Segment::Index(index));
                rest = &after[close + 1..];
                key_position = false;
            } else if let Some(after) = rest.strip_prefix('.') {
                if segments.is_empty() {
                    return Err(JeditError::path_syntax(expr, "leading `.`"));
                }
                if after.is_empty() {
                    return Err(JeditError::path_syntax(expr, "trailing `.`"));
                }
                if after.starts_with('.') {
                    return Err(JeditError::path_syntax(expr, "empty key segment"));
                }
                rest = after;
                key_position = true;
            } else {
                if !key_position {
                    return Err(JeditError::path_syntax(expr, "expected `.` or `[`"));
                }
                let end = rest.find(['.', '[']).unwrap_or(rest.len());
                let key = &rest[..end];
                if key.contains(']') {
                    return Err(JeditError::path_syntax(expr, "unexpected `]`"));
                }
                segments.push(Segment::Key(key.to_string()));
                rest = &rest[end..];
                key_position = false;
            }
        }

        Ok(PathExpr { segments })
    }
}

impl FromIterator<Segment> for PathExpr {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> PathExpr {
        PathExpr {
            segments: iter.into_iter().collect(),
        }
    }
}

impl FromStr for PathExpr {
    type Err = JeditError;

    fn from_str(s: &str) -> Result<PathExpr> {
        PathExpr::parse(s)
    }
}

impl fmt::Display for PathExpr {
    /// `$` for the root, else `$.a.b[3]` style. Keys containing `.` or `[`
    /// cannot round-trip through this notation; such keys can only come
    /// from a loaded document, never from a parsed path.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

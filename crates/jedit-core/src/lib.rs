//! # jedit-core
//!
//! Path-directed JSON document mutation.
//!
//! Given a document, a target path expression (which may address nodes
//! that do not exist yet), and a new value, jedit-core produces a new
//! document with exactly that path set -- creating missing intermediate
//! objects and arrays and leaving everything else untouched. The engine is
//! pure: inputs are only read, every operation returns a fresh document.
//!
//! The algorithm is build/merge/erase:
//!
//! 1. [`skeleton::build`] folds the path into a minimal tree carrying the
//!    new value, padding arrays with [`Value::Placeholder`].
//! 2. [`merge::merge`] reconciles the skeleton with the document; the
//!    skeleton wins wherever both sides carry a value, placeholders lose
//!    to everything.
//! 3. [`merge::erase`] rewrites surviving placeholders to `null`.
//!
//! ## Quick start
//!
//! ```rust
//! use jedit_core::{lookup, mutate, PathExpr, Value};
//!
//! let doc: Value = "{}".parse().unwrap();
//! let doc = mutate(&doc, &PathExpr::root(), "foo.bar[1]", "5").unwrap();
//!
//! let five: Value = "5".parse().unwrap();
//! let read = PathExpr::parse("foo.bar[1]").unwrap();
//! assert_eq!(lookup(&doc, &read), Some(&five));
//!
//! // The skipped slot was padded with null:
//! let gap = PathExpr::parse("foo.bar[0]").unwrap();
//! assert_eq!(lookup(&doc, &gap), Some(&Value::Null));
//! ```
//!
//! ## Modules
//!
//! - [`types`] -- the [`Value`] model and canonical serialization
//! - [`path`] -- [`PathExpr`] parsing and navigation arithmetic
//! - [`skeleton`] -- minimal-tree construction for one write
//! - [`merge`] -- placeholder-aware merge and the final erase
//! - [`engine`] -- the composed mutation operation
//! - [`resolve`] -- read-side lookups and the completion feed
//! - [`error`] -- error types

pub mod engine;
pub mod error;
pub mod merge;
pub mod path;
pub mod resolve;
pub mod skeleton;
pub mod types;

pub use engine::{effective_path, mutate, parse_value};
pub use error::{JeditError, Result};
pub use merge::{erase, merge};
pub use path::{PathExpr, Segment};
pub use resolve::{child_keys, lookup, resolve};
pub use skeleton::build;
pub use types::Value;

//! Selector parsing and view-hierarchy matching.
//!
//! # Scope
//!
//! This crate implements the two halves of the query engine:
//!
//! - **Selector parser** - a compact CSS-like grammar: capitalized bare
//!   tokens are type names (`Panel`), `.name` is a class requirement,
//!   `#name` is an identifier requirement, and a whitespace-free compound
//!   such as `Panel.a.b#root` flattens into one [`SimpleSelector`].
//!   Whitespace between tokens is the descendant combinator, chaining
//!   simple selectors into a [`Sequence`].
//!
//! - **Tree matcher** - a depth-first walk over a [`viewgrep_view::ViewNode`]
//!   hierarchy that reports every node satisfying the full sequence, across
//!   all three child relations (subviews, content subviews, control).
//!
//! # Not implemented
//!
//! - Combinators other than descendant (no `>`, `+`, `~`)
//! - Attribute selectors beyond type/class/identifier
//! - Pseudo-classes and specificity

/// Tree-matching engine for parsed selector sequences.
pub mod matcher;
/// Selector grammar: types and the token parser.
pub mod parser;

pub use matcher::{collect_matches, match_sequence};
pub use parser::{Sequence, SimpleSelector, parse};

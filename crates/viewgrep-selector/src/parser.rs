//! Selector grammar and parsing.
//!
//! The grammar has three attribute forms and one combinator:
//!
//! - `Panel` - a capitalized bare token requires the node's type name
//! - `.fancy` - requires membership in the named style class
//! - `#ok` - requires the node's identifier
//! - whitespace - descendant combinator between simple selectors
//!
//! A whitespace-free compound (`Panel.a.b#root`) flattens into a single
//! [`SimpleSelector`]; only whitespace produces a chain. Parsing is total:
//! malformed input never fails, it just contributes nothing.

use viewgrep_view::ViewNode;

/// One atomic type/class/identifier constraint block, matched against a
/// single view node.
///
/// An unset field is a wildcard. A fully unset selector (from an empty
/// token) matches every node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleSelector {
    /// Required type name, exact and case-sensitive.
    pub base_class: Option<String>,
    /// Required class memberships, order-preserving and de-duplicated.
    pub class_names: Vec<String>,
    /// Required unique identifier.
    pub identifier: Option<String>,
}

impl SimpleSelector {
    /// True if no attribute is set, i.e. this selector matches any node.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.base_class.is_none() && self.class_names.is_empty() && self.identifier.is_none()
    }

    /// Check whether this selector's constraints are satisfied by `node`.
    ///
    /// A set field must equal the node's corresponding field; a set field
    /// against an absent node field is a non-match; an unset field always
    /// matches. Every required class name must appear in the node's class
    /// list.
    #[must_use]
    pub fn matches(&self, node: &ViewNode) -> bool {
        let class_ok = self
            .base_class
            .as_deref()
            .is_none_or(|want| node.class.as_deref() == Some(want));
        let identifier_ok = self
            .identifier
            .as_deref()
            .is_none_or(|want| node.identifier.as_deref() == Some(want));
        let names_ok = self
            .class_names
            .iter()
            .all(|want| node.class_names.iter().any(|have| have == want));

        class_ok && identifier_ok && names_ok
    }

    /// Field-wise combine with the attributes parsed from the remainder of
    /// the same token.
    ///
    /// Class names append in order, skipping duplicates already present. A
    /// later identifier fragment wins; an earlier base class wins.
    fn merge(mut self, rest: Self) -> Self {
        for name in rest.class_names {
            if !self.class_names.contains(&name) {
                self.class_names.push(name);
            }
        }
        self.identifier = rest.identifier.or(self.identifier);
        self.base_class = self.base_class.or(rest.base_class);
        self
    }
}

/// An ordered chain of simple selectors joined by descendant combinators.
///
/// `selectors[0]` must match an ancestor (at any depth) of a node matching
/// `selectors[1]`, and so on; the node matching the final element is what
/// gets reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    /// The simple selectors, left to right.
    pub selectors: Vec<SimpleSelector>,
}

/// Parse a raw selector string into a [`Sequence`].
///
/// The input is split on whitespace; each token independently flattens into
/// one [`SimpleSelector`]. Input with no tokens at all yields a sequence
/// containing a single wildcard selector.
///
/// Parsing is pure and total: any string produces a sequence, and repeated
/// parses of the same input are structurally equal.
#[must_use]
pub fn parse(input: &str) -> Sequence {
    let selectors: Vec<SimpleSelector> = input.split_whitespace().map(parse_token).collect();
    if selectors.is_empty() {
        return Sequence {
            selectors: vec![SimpleSelector::default()],
        };
    }
    Sequence { selectors }
}

/// Parse one whitespace-free token into a flattened simple selector.
///
/// Recursive, left to right: classify the leading attribute, cut at the next
/// `.`/`#` delimiter, then merge in whatever the remainder parses to. A
/// leading run that is neither capitalized nor prefixed contributes nothing
/// (malformed input is tolerated silently).
fn parse_token(token: &str) -> SimpleSelector {
    let Some(leading) = token.chars().next() else {
        return SimpleSelector::default();
    };

    let mut attributes = SimpleSelector::default();
    let remainder = match leading {
        '.' => {
            let body = &token[1..];
            let cut = delimiter_index(body);
            // Consecutive delimiters (`..x`, trailing `.`) must not
            // register an empty class name.
            if cut > 0 {
                attributes.class_names.push(body[..cut].to_string());
            }
            &body[cut..]
        }
        '#' => {
            let body = &token[1..];
            let cut = delimiter_index(body);
            if cut > 0 {
                attributes.identifier = Some(body[..cut].to_string());
            }
            &body[cut..]
        }
        c if c.is_ascii_uppercase() => {
            let cut = delimiter_index(token);
            attributes.base_class = Some(token[..cut].to_string());
            &token[cut..]
        }
        _ => {
            // Unrecognized leading run: skip it, keep whatever follows the
            // next delimiter.
            &token[delimiter_index(token)..]
        }
    };

    attributes.merge(parse_token(remainder))
}

/// Byte index of the first `.` or `#` delimiter, or the end of the string
/// when neither occurs.
fn delimiter_index(s: &str) -> usize {
    s.find(['.', '#']).unwrap_or(s.len())
}

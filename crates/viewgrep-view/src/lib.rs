//! View-hierarchy tree model for viewgrep.
//!
//! A view hierarchy is serialized as nested JSON objects. The external
//! contract names exactly these fields:
//!
//! - `class` - the view's type name
//! - `identifier` - the view's unique identifier
//! - `classNames` - list of style class memberships
//! - `subviews` - direct children
//! - `contentView` - a container whose `subviews` form a secondary child group
//! - `control` - a singular child view
//!
//! Every field is optional. Deserialization is total: a missing or mistyped
//! field is treated as absent, never as an error, so a malformed document
//! still produces a tree the matcher can walk.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One node of a deserialized view hierarchy.
///
/// All attribute fields are optional; all child relations may be empty. The
/// tree is immutable once decoded and is only ever read by the matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewNode {
    /// The view's type name (the `class` field), if present.
    pub class: Option<String>,
    /// The view's unique identifier, if present.
    pub identifier: Option<String>,
    /// Style class memberships, in document order.
    pub class_names: Vec<String>,
    /// Direct children (the `subviews` relation).
    pub subviews: Vec<ViewNode>,
    /// The content container. Not itself a child: only its `subviews`
    /// participate in traversal.
    pub content_view: Option<Box<ViewNode>>,
    /// The singular `control` child, if present.
    pub control: Option<Box<ViewNode>>,
}

impl ViewNode {
    /// Build a node from a JSON value, tolerating any malformed shape.
    ///
    /// A non-object value yields an empty node; within an object, each field
    /// that is missing or has an unusable type is simply absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        Self {
            class: map.get("class").and_then(coerce_string),
            identifier: map.get("identifier").and_then(coerce_string),
            class_names: map
                .get("classNames")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(coerce_string).collect())
                .unwrap_or_default(),
            subviews: node_list(map.get("subviews")),
            content_view: child_node(map.get("contentView")),
            control: child_node(map.get("control")),
        }
    }

    /// The node's child groups, one slice per relation, in traversal order:
    /// direct subviews, then the content container's subviews, then the
    /// control child.
    ///
    /// The matcher iterates this uniform list instead of checking three
    /// differently named fields. Absent relations contribute no group.
    #[must_use]
    pub fn child_groups(&self) -> Vec<&[ViewNode]> {
        let mut groups = vec![self.subviews.as_slice()];
        if let Some(content) = &self.content_view {
            groups.push(content.subviews.as_slice());
        }
        if let Some(control) = &self.control {
            groups.push(std::slice::from_ref(control.as_ref()));
        }
        groups
    }

    /// Iterate over all children across every relation, in traversal order.
    pub fn children(&self) -> impl Iterator<Item = &ViewNode> {
        self.child_groups().into_iter().flatten()
    }

    /// Count this node and everything beneath it.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children().map(Self::node_count).sum::<usize>()
    }

    /// A selector-shaped summary of the node: `Class.a.b#id`.
    ///
    /// Absent fields are omitted; a node with no attributes at all renders
    /// as `(anonymous view)`.
    #[must_use]
    pub fn descriptor(&self) -> String {
        let mut out = self.class.clone().unwrap_or_default();
        for name in &self.class_names {
            out.push('.');
            out.push_str(name);
        }
        if let Some(identifier) = &self.identifier {
            out.push('#');
            out.push_str(identifier);
        }
        if out.is_empty() {
            out.push_str("(anonymous view)");
        }
        out
    }

    /// Print the hierarchy rooted at this node, indented two spaces per
    /// level, one descriptor per line.
    pub fn dump(&self, depth: usize) {
        println!("{:indent$}{self}", "", indent = depth * 2);
        for child in self.children() {
            child.dump(depth + 1);
        }
    }
}

impl fmt::Display for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.descriptor())
    }
}

impl<'de> Deserialize<'de> for ViewNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Decode through Value so field-level damage never fails the whole
        // document; only unparseable JSON is an error, and that is the
        // caller's to report.
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Coerce a scalar JSON value to a string.
///
/// Strings pass through; numbers and booleans are stringified so that e.g. a
/// numeric identifier still compares against a selector's `#42`. Arrays,
/// objects, and null are unusable and read as absent.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Decode an optional array of child nodes; anything else is an empty list.
fn node_list(value: Option<&Value>) -> Vec<ViewNode> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().map(ViewNode::from_value).collect())
        .unwrap_or_default()
}

/// Decode an optional singular child; a non-object value is absent.
fn child_node(value: Option<&Value>) -> Option<Box<ViewNode>> {
    value
        .filter(|v| v.is_object())
        .map(|v| Box::new(ViewNode::from_value(v)))
}

//! Descendant-combinator matching over a view hierarchy.
//!
//! The walk is a single-threaded, purely synchronous depth-first pre-order
//! traversal over the union of a node's child relations. Matches are handed
//! to a caller-supplied sink in traversal order, one report per reachable
//! path; nothing is deduplicated.

use viewgrep_view::ViewNode;

use crate::parser::{Sequence, SimpleSelector};

/// Report every node in the tree under `root` whose match path satisfies
/// the full `sequence`.
///
/// The head of the sequence has no ancestor constraint: every node in the
/// tree, at any depth, is a candidate for it. Each remaining element must
/// match somewhere in the subtree of the node that satisfied the previous
/// one. The node satisfying the final element is reported through `report`.
///
/// The candidate scan never short-circuits: after a node matches the head,
/// the walk still descends into its subtree looking for further independent
/// head matches.
///
/// An empty sequence reports nothing.
pub fn match_sequence<'a>(
    root: &'a ViewNode,
    sequence: &Sequence,
    report: &mut dyn FnMut(&'a ViewNode),
) {
    let Some((head, rest)) = sequence.selectors.split_first() else {
        return;
    };
    scan(root, head, rest, report);
}

/// Collect every match of `sequence` under `root`, in traversal order.
#[must_use]
pub fn collect_matches<'a>(root: &'a ViewNode, sequence: &Sequence) -> Vec<&'a ViewNode> {
    let mut matches = Vec::new();
    match_sequence(root, sequence, &mut |node| matches.push(node));
    matches
}

/// Outer candidate scan: test every node against the head selector, and on
/// a hit switch the matched node's subtree into nested mode for the rest of
/// the chain. The scan itself continues into every subtree regardless.
fn scan<'a>(
    node: &'a ViewNode,
    head: &SimpleSelector,
    rest: &[SimpleSelector],
    report: &mut dyn FnMut(&'a ViewNode),
) {
    if head.matches(node) {
        if let Some((next, tail)) = rest.split_first() {
            for child in node.children() {
                descend(child, next, tail, report);
            }
        } else {
            report(node);
        }
    }

    for child in node.children() {
        scan(child, head, rest, report);
    }
}

/// Nested mode: search a subtree for the current chain element. A node that
/// satisfies it consumes the element and its subtree continues with the
/// next one (or is reported when the chain is exhausted); a node that does
/// not keeps searching its own subtree for the same element.
fn descend<'a>(
    node: &'a ViewNode,
    current: &SimpleSelector,
    remaining: &[SimpleSelector],
    report: &mut dyn FnMut(&'a ViewNode),
) {
    if current.matches(node) {
        if let Some((next, tail)) = remaining.split_first() {
            for child in node.children() {
                descend(child, next, tail, report);
            }
        } else {
            report(node);
        }
    } else {
        for child in node.children() {
            descend(child, current, remaining, report);
        }
    }
}

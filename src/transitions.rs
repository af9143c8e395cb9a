//! Keyed enter/leave transitions.
//!
//! Reconciles a keyed child list against the previous generation:
//! newly appearing keys are tagged with an enter class, and keys that
//! disappeared are kept for one more generation with a leave class so
//! a renderer can animate them out.

use std::collections::HashSet;

use crate::node::{Element, Node, Tag};

/// Tracks one generation of keyed children under a transition name.
#[derive(Debug, Clone, Default)]
pub struct TransitionGroup {
    name: String,
    previous: Vec<(String, Node)>,
}

impl TransitionGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            previous: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn keys(children: &[Node]) -> HashSet<String> {
        children
            .iter()
            .filter_map(|child| child.as_element().and_then(|e| e.key.clone()))
            .collect()
    }

    /// Merge the new children with the previous generation's leavers
    /// and remember this generation for the next call.
    pub fn reconcile(&mut self, children: Vec<Node>) -> Node {
        let enter_class = format!("{}-enter", self.name);
        let leave_class = format!("{}-leave", self.name);

        let prev_keys: HashSet<&str> =
            self.previous.iter().map(|(k, _)| k.as_str()).collect();
        let next_keys = Self::keys(&children);

        let mut out: Vec<Node> = Vec::with_capacity(children.len());
        for child in children {
            let is_new = child
                .as_element()
                .and_then(|e| e.key.as_deref())
                .is_some_and(|k| !prev_keys.contains(k));
            if is_new {
                out.push(child.with_class(enter_class.as_str()));
            } else {
                out.push(child);
            }
        }

        // Keys gone this generation ride along once more, marked as
        // leaving, then drop out entirely.
        for (key, node) in &self.previous {
            let already_leaving = node
                .as_element()
                .is_some_and(|e| e.has_class(&leave_class));
            if !next_keys.contains(key) && !already_leaving {
                out.push(node.clone().with_class(leave_class.as_str()));
            }
        }

        self.previous = out
            .iter()
            .filter_map(|child| {
                child
                    .as_element()
                    .and_then(|e| e.key.clone())
                    .map(|key| (key, child.clone()))
            })
            .collect();

        Element::new(Tag::Group)
            .attr("transition", &self.name)
            .children(out)
            .into()
    }
}

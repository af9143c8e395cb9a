//! Overlay hosting.
//!
//! Components that float above the normal tree (modals, tooltips)
//! render into an [`OverlayHost`] instead of their parent. The host
//! owns the detached subtree and is responsible for painting it last.

use crate::node::Node;

/// A mount point outside the regular render tree.
pub trait OverlayHost {
    /// Attach content. Replaces any previous content.
    fn mount(&mut self, node: Node);

    /// Replace the content of an already mounted overlay.
    fn update(&mut self, node: Node);

    /// Detach the content entirely.
    fn unmount(&mut self);
}

/// The default host: holds the detached subtree in memory for the
/// renderer to composite on top.
#[derive(Debug, Default)]
pub struct DetachedOverlay {
    node: Option<Node>,
}

impl DetachedOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.node.is_some()
    }

    pub fn content(&self) -> Option<&Node> {
        self.node.as_ref()
    }
}

impl OverlayHost for DetachedOverlay {
    fn mount(&mut self, node: Node) {
        log::debug!("overlay mounted");
        self.node = Some(node);
    }

    fn update(&mut self, node: Node) {
        if self.node.is_none() {
            log::debug!("overlay update before mount, mounting instead");
        }
        self.node = Some(node);
    }

    fn unmount(&mut self) {
        if self.node.take().is_some() {
            log::debug!("overlay unmounted");
        }
    }
}

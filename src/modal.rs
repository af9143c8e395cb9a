//! Modal dialog over an overlay host.
//!
//! A show/hide wrapper: the modal owns its content and renders it into
//! an [`OverlayHost`] when opened, tearing it down again on close.
//! Open and close fire optional callbacks.

use std::fmt;
use std::sync::Arc;

use crate::node::{Element, Node, Tag};
use crate::overlay::OverlayHost;

/// Callback fired when the modal opens or closes.
pub type ModalCallback = Arc<dyn Fn() + Send + Sync>;

/// Width preset for the dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalSize {
    #[default]
    Auto,
    Sm,
    Md,
    Lg,
}

impl ModalSize {
    pub fn as_class(&self) -> &'static str {
        match self {
            Self::Auto => "modal",
            Self::Sm => "modal modal-sm",
            Self::Md => "modal modal-md",
            Self::Lg => "modal modal-lg",
        }
    }
}

/// A dialog that mounts into an overlay host while open.
pub struct Modal<H: OverlayHost> {
    host: H,
    open: bool,
    title: Option<String>,
    footer: Option<Node>,
    show_footer: bool,
    size: ModalSize,
    content: Node,
    on_open: Option<ModalCallback>,
    on_close: Option<ModalCallback>,
}

impl<H: OverlayHost> Modal<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            open: false,
            title: None,
            footer: None,
            show_footer: false,
            size: ModalSize::Auto,
            content: Node::Empty,
            on_open: None,
            on_close: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn footer(mut self, footer: Node) -> Self {
        self.footer = Some(footer);
        self.show_footer = true;
        self
    }

    pub fn show_footer(mut self, show: bool) -> Self {
        self.show_footer = show;
        self
    }

    pub fn size(mut self, size: ModalSize) -> Self {
        self.size = size;
        self
    }

    pub fn content(mut self, content: Node) -> Self {
        self.content = content;
        self
    }

    pub fn on_open(mut self, callback: ModalCallback) -> Self {
        self.on_open = Some(callback);
        self
    }

    pub fn on_close(mut self, callback: ModalCallback) -> Self {
        self.on_close = Some(callback);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mount the dialog into the host. No-op when already open.
    pub fn open(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        let node = self.render();
        self.host.mount(node);
        log::debug!("modal opened");
        if let Some(cb) = &self.on_open {
            cb();
        }
    }

    /// Unmount the dialog from the host. No-op when already closed.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.host.unmount();
        log::debug!("modal closed");
        if let Some(cb) = &self.on_close {
            cb();
        }
    }

    /// Replace the body. Re-renders into the host while open.
    pub fn set_content(&mut self, content: Node) {
        self.content = content;
        if self.open {
            let node = self.render();
            self.host.update(node);
        }
    }

    fn render(&self) -> Node {
        let mut dialog = Element::new(Tag::Container).class(self.size.as_class());
        if let Some(title) = &self.title {
            dialog = dialog.child(
                Element::new(Tag::Container)
                    .class("modal-header")
                    .text(title.clone()),
            );
        }
        dialog = dialog.child(
            Element::new(Tag::Container)
                .class("modal-body")
                .child(self.content.clone()),
        );
        if self.show_footer {
            if let Some(footer) = &self.footer {
                dialog = dialog.child(
                    Element::new(Tag::Container)
                        .class("modal-footer")
                        .child(footer.clone()),
                );
            }
        }
        Element::new(Tag::Container)
            .class("modal-backdrop")
            .child(dialog)
            .into()
    }
}

impl<H: OverlayHost + fmt::Debug> fmt::Debug for Modal<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modal")
            .field("host", &self.host)
            .field("open", &self.open)
            .field("title", &self.title)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

//! Headless stand-ins for host nodes and rendered children.

use bounds_observer_core::{HostNode, NodeId, NodeKind, NodeRef, RefTarget};
use bounds_observer_graphics::Rect;
use std::cell::Cell;
use std::rc::Rc;

/// A host node whose bounds the test sets by hand.
#[derive(Debug)]
pub struct TestNode {
    id: NodeId,
    kind: NodeKind,
    bounds: Cell<Rect>,
}

impl TestNode {
    pub fn element(bounds: Rect) -> Rc<Self> {
        Rc::new(Self {
            id: NodeId::next(),
            kind: NodeKind::Element,
            bounds: Cell::new(bounds),
        })
    }

    pub fn text() -> Rc<Self> {
        Rc::new(Self {
            id: NodeId::next(),
            kind: NodeKind::Text,
            bounds: Cell::new(Rect::ZERO),
        })
    }

    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    /// Moves or resizes the node. Nothing is reported until the test asks the
    /// service to deliver.
    pub fn set_bounds(&self, bounds: Rect) {
        self.bounds.set(bounds);
    }

    pub fn as_host(self: &Rc<Self>) -> Rc<dyn HostNode> {
        Rc::clone(self) as Rc<dyn HostNode>
    }
}

impl HostNode for TestNode {
    fn id(&self) -> NodeId {
        self.id
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn bounding_rect(&self) -> Rect {
        self.bounds.get()
    }
}

/// A rendered child backed by a [`TestNode`].
///
/// Rendering through a provider attaches a ref; [`TestElement::attach`] then
/// plays the host's part and fills that ref with the backing node.
#[derive(Debug)]
pub struct TestElement {
    node: Rc<TestNode>,
    node_ref: Option<NodeRef>,
}

impl TestElement {
    pub fn new(node: Rc<TestNode>) -> Self {
        Self {
            node,
            node_ref: None,
        }
    }

    pub fn node(&self) -> &Rc<TestNode> {
        &self.node
    }

    pub fn node_ref(&self) -> Option<&NodeRef> {
        self.node_ref.as_ref()
    }

    /// Fills the attached ref, if any. Returns whether a ref was filled.
    pub fn attach(&self) -> bool {
        match &self.node_ref {
            Some(node_ref) => {
                node_ref.attach(self.node.as_host());
                true
            }
            None => false,
        }
    }
}

impl RefTarget for TestElement {
    fn with_node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }
}

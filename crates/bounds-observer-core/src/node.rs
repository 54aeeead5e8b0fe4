use crate::fault::{LifecycleFault, Phase};
use bounds_observer_graphics::Rect;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a host node. Two nodes are the same target iff their ids match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Allocates a fresh id from the process-wide counter.
    pub fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Element,
    Text,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Element => f.write_str("element"),
            NodeKind::Text => f.write_str("text"),
        }
    }
}

/// A node in the host's attached tree.
pub trait HostNode {
    fn id(&self) -> NodeId;

    fn kind(&self) -> NodeKind {
        NodeKind::Element
    }

    /// Current on-screen bounds, read synchronously from the host.
    fn bounding_rect(&self) -> Rect;
}

/// The element an observer handle is bound to.
///
/// Only element nodes can become roots; the id is captured once so it stays
/// stable for the lifetime of every handle bound to this root.
#[derive(Clone)]
pub struct RootNode {
    id: NodeId,
    node: Rc<dyn HostNode>,
}

impl RootNode {
    pub fn from_host(node: Rc<dyn HostNode>, phase: Phase) -> Result<Self, LifecycleFault> {
        let id = node.id();
        match node.kind() {
            NodeKind::Element => Ok(Self { id, node }),
            kind => Err(LifecycleFault::NotAnElement { phase, id, kind }),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn bounding_rect(&self) -> Rect {
        self.node.bounding_rect()
    }

    pub fn host(&self) -> &Rc<dyn HostNode> {
        &self.node
    }
}

impl fmt::Debug for RootNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RootNode").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        id: NodeId,
        kind: NodeKind,
    }

    impl HostNode for Fixed {
        fn id(&self) -> NodeId {
            self.id
        }

        fn kind(&self) -> NodeKind {
            self.kind
        }

        fn bounding_rect(&self) -> Rect {
            Rect::new(1.0, 2.0, 3.0, 4.0)
        }
    }

    #[test]
    fn element_becomes_root() {
        let id = NodeId::next();
        let root = RootNode::from_host(
            Rc::new(Fixed {
                id,
                kind: NodeKind::Element,
            }),
            Phase::Mount,
        )
        .expect("element root");
        assert_eq!(root.id(), id);
        assert_eq!(root.bounding_rect(), Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn text_node_is_rejected() {
        let id = NodeId::new(7);
        let fault = RootNode::from_host(
            Rc::new(Fixed {
                id,
                kind: NodeKind::Text,
            }),
            Phase::Mount,
        )
        .unwrap_err();
        assert_eq!(
            fault,
            LifecycleFault::NotAnElement {
                phase: Phase::Mount,
                id,
                kind: NodeKind::Text,
            }
        );
    }

    #[test]
    fn next_ids_are_distinct() {
        assert_ne!(NodeId::next(), NodeId::next());
    }
}

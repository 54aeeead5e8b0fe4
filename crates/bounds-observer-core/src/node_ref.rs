use crate::node::HostNode;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Single-threaded slot the host fills with the node it attached.
///
/// Cloning shares the slot, so a provider can hand a clone to the host at
/// render time and read the attached node back at mount.
pub struct NodeRef {
    inner: Rc<RefCell<Option<Rc<dyn HostNode>>>>,
}

impl Clone for NodeRef {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl Default for NodeRef {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeRef {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }

    /// Store the attached node, replacing any previous one.
    pub fn attach(&self, node: Rc<dyn HostNode>) {
        *self.inner.borrow_mut() = Some(node);
    }

    /// Clear the slot, returning the node that was attached.
    pub fn detach(&self) -> Option<Rc<dyn HostNode>> {
        self.inner.borrow_mut().take()
    }

    pub fn get(&self) -> Option<Rc<dyn HostNode>> {
        self.inner.borrow().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Whether both refs share the same slot.
    pub fn ptr_eq(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("attached", &self.get().map(|node| node.id()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;
    use bounds_observer_graphics::Rect;

    struct Leaf(NodeId);

    impl HostNode for Leaf {
        fn id(&self) -> NodeId {
            self.0
        }

        fn bounding_rect(&self) -> Rect {
            Rect::ZERO
        }
    }

    #[test]
    fn clones_share_the_slot() {
        let node_ref = NodeRef::new();
        let shared = node_ref.clone();
        assert!(!shared.is_attached());

        node_ref.attach(Rc::new(Leaf(NodeId::new(11))));
        assert!(shared.is_attached());
        assert_eq!(shared.get().map(|n| n.id()), Some(NodeId::new(11)));
        assert!(shared.ptr_eq(&node_ref));
        assert!(!shared.ptr_eq(&NodeRef::new()));
    }

    #[test]
    fn detach_empties_the_slot() {
        let node_ref = NodeRef::new();
        node_ref.attach(Rc::new(Leaf(NodeId::new(1))));
        let detached = node_ref.detach();
        assert_eq!(detached.map(|n| n.id()), Some(NodeId::new(1)));
        assert!(node_ref.get().is_none());
    }
}

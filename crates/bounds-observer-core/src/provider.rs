//! Strategies for acquiring the node a [`BoundsObserver`](crate::BoundsObserver) watches.
//!
//! Both strategies hand the host a [`NodeRef`] to fill during attachment and
//! resolve through it afterwards, so the lifecycle code never needs to know
//! which one is in use.

use crate::fault::LifecycleFault;
use crate::node::HostNode;
use crate::node_ref::NodeRef;
use std::rc::Rc;

/// Supplies the single node to observe.
pub trait RootNodeProvider {
    /// The attached node, or `None` when the host has not attached it yet.
    fn resolve(&self) -> Option<Rc<dyn HostNode>>;
}

impl<P: RootNodeProvider + ?Sized> RootNodeProvider for Rc<P> {
    fn resolve(&self) -> Option<Rc<dyn HostNode>> {
        (**self).resolve()
    }
}

/// The component renders its own wrapper container and observes it.
#[derive(Clone, Debug, Default)]
pub struct OwnContainer {
    container: NodeRef,
}

impl OwnContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ref the host attaches to the rendered container.
    pub fn container_ref(&self) -> NodeRef {
        self.container.clone()
    }
}

impl RootNodeProvider for OwnContainer {
    fn resolve(&self) -> Option<Rc<dyn HostNode>> {
        self.container.get()
    }
}

/// A rendered child that can carry a node ref through to its host node.
pub trait RefTarget: Sized {
    fn with_node_ref(self, node_ref: NodeRef) -> Self;
}

/// The component wraps exactly one child and observes that child's node.
#[derive(Clone, Debug, Default)]
pub struct WrapChild {
    child: NodeRef,
}

impl WrapChild {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the only child with this provider's ref attached.
    ///
    /// Anything other than exactly one child is a usage defect and raises
    /// [`LifecycleFault::ChildCount`].
    pub fn render<E: RefTarget>(&self, children: impl IntoIterator<Item = E>) -> E {
        only_child(children).with_node_ref(self.child.clone())
    }

    pub fn child_ref(&self) -> NodeRef {
        self.child.clone()
    }
}

impl RootNodeProvider for WrapChild {
    fn resolve(&self) -> Option<Rc<dyn HostNode>> {
        self.child.get()
    }
}

/// Unwraps a children list that must hold exactly one element.
#[track_caller]
pub fn only_child<E>(children: impl IntoIterator<Item = E>) -> E {
    let mut children = children.into_iter();
    match (children.next(), children.next()) {
        (Some(child), None) => child,
        (None, _) => LifecycleFault::ChildCount { found: 0 }.raise(),
        (Some(_), Some(_)) => LifecycleFault::ChildCount {
            found: 2 + children.count(),
        }
        .raise(),
    }
}

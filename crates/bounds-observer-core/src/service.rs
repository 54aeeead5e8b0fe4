//! Contract of the external geometry observer service.
//!
//! The service measures rectangles and decides when they changed; this crate
//! only decides when an observer is attached, replaced or torn down.

use crate::node::{NodeId, RootNode};
use bounds_observer_graphics::Rect;

/// One change notification: `target`'s bounds are now `new_bounds`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsEntry {
    pub target: NodeId,
    pub new_bounds: Rect,
}

impl BoundsEntry {
    pub fn new(target: NodeId, new_bounds: Rect) -> Self {
        Self { target, new_bounds }
    }
}

/// Receives every batch the service delivers to one observer.
pub type EntryListener = Box<dyn FnMut(&[BoundsEntry])>;

/// Factory for observers.
pub trait GeometryObserverService {
    fn construct(&self, listener: EntryListener) -> Box<dyn GeometryObserver>;
}

impl<S: GeometryObserverService + ?Sized> GeometryObserverService for std::rc::Rc<S> {
    fn construct(&self, listener: EntryListener) -> Box<dyn GeometryObserver> {
        (**self).construct(listener)
    }
}

/// A single observer created by a [`GeometryObserverService`].
///
/// Deliveries for an observer happen outside lifecycle transitions and must
/// stop once `disconnect` returns. An observer may be observed again after a
/// disconnect; callers never disconnect twice without observing in between.
pub trait GeometryObserver {
    fn observe(&mut self, root: &RootNode);

    fn disconnect(&mut self);
}

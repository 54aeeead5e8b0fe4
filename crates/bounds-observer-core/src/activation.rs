//! Starting and stopping delivery on an existing handle.

use crate::node::{NodeId, RootNode};
use crate::service::BoundsEntry;
use crate::subscription::ObserverHandle;
use bounds_observer_graphics::Rect;
use smallvec::SmallVec;

/// Starts delivery on `handle`, then reports `root`'s current bounds.
///
/// The initial reading reaches the callback before this returns, so the
/// consumer does not wait for the next geometry change.
pub fn activate(handle: &mut ObserverHandle, root: &RootNode) {
    debug_assert_eq!(
        handle.root().id(),
        root.id(),
        "handle is bound to a different root"
    );
    handle.start(root);
    let bounds = root.bounding_rect();
    log::debug!(
        "activated observer handle {} with initial bounds {bounds:?}",
        handle.id()
    );
    handle.emit(bounds);
}

/// Stops delivery on `handle`. Never invokes the callback.
pub fn deactivate(handle: &mut ObserverHandle) {
    handle.stop();
    log::debug!("deactivated observer handle {}", handle.id());
}

/// Bounds of the entries in `entries` that target `root`, in batch order.
pub fn filter_for_root(root: NodeId, entries: &[BoundsEntry]) -> SmallVec<[Rect; 1]> {
    entries
        .iter()
        .filter(|entry| entry.target == root)
        .map(|entry| entry.new_bounds)
        .collect()
}

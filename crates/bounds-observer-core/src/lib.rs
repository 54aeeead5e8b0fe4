//! Keeps one bounding-rect observer in sync with a component's lifecycle.
//!
//! A [`BoundsObserver`] watches a single root node through an external
//! [`GeometryObserverService`] and forwards bounds changes to the current
//! [`BoundsCallback`]. The host drives it with `on_mount`, `on_update` and
//! `on_unmount` (directly, or through a [`HostDriver`]); toggling the
//! activation flag starts and stops delivery on the live handle, while a new
//! callback identity replaces the handle.

pub mod activation;
mod callback;
mod driver;
mod fault;
mod lifecycle;
mod node;
mod node_ref;
mod provider;
mod service;
pub mod subscription;

pub use bounds_observer_graphics::{Point, Rect, Size};
pub use callback::{BoundsCallback, CallbackToken};
pub use driver::{HostDriver, Lifecycle};
pub use fault::{LifecycleFault, Phase};
pub use lifecycle::{BoundsObserver, BoundsObserverProps, ObserverStatus};
pub use node::{HostNode, NodeId, NodeKind, RootNode};
pub use node_ref::NodeRef;
pub use provider::{only_child, OwnContainer, RefTarget, RootNodeProvider, WrapChild};
pub use service::{BoundsEntry, EntryListener, GeometryObserver, GeometryObserverService};
pub use subscription::{HandleId, HandleState, ObserverHandle, SubscriptionManager};

pub mod prelude {
    pub use crate::callback::BoundsCallback;
    pub use crate::driver::{HostDriver, Lifecycle};
    pub use crate::lifecycle::{BoundsObserver, BoundsObserverProps};
    pub use crate::node::{HostNode, NodeId, NodeKind};
    pub use crate::provider::{OwnContainer, RootNodeProvider, WrapChild};
    pub use crate::service::{BoundsEntry, GeometryObserver, GeometryObserverService};
    pub use bounds_observer_graphics::Rect;
}

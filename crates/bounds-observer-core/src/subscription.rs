//! Ownership of the single live observer handle.

use crate::activation;
use crate::callback::{BoundsCallback, CallbackToken};
use crate::fault::{LifecycleFault, Phase};
use crate::node::RootNode;
use crate::service::{BoundsEntry, EntryListener, GeometryObserver, GeometryObserverService};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(u64);

impl HandleId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleState {
    Disconnected,
    Observing,
}

/// A service observer bound to one root and one callback.
///
/// The root and callback are fixed at creation. Dropping the handle releases
/// it: a still-observing service observer is disconnected exactly once
/// before it is dropped, and since the handle is consumed it cannot be reused.
pub struct ObserverHandle {
    id: HandleId,
    raw: Box<dyn GeometryObserver>,
    root: RootNode,
    callback: BoundsCallback,
    state: HandleState,
}

impl ObserverHandle {
    pub fn id(&self) -> HandleId {
        self.id
    }

    pub fn root(&self) -> &RootNode {
        &self.root
    }

    pub fn state(&self) -> HandleState {
        self.state
    }

    pub fn is_observing(&self) -> bool {
        self.state == HandleState::Observing
    }

    pub fn callback_token(&self) -> CallbackToken {
        self.callback.token()
    }

    pub(crate) fn start(&mut self, root: &RootNode) {
        self.raw.observe(root);
        self.state = HandleState::Observing;
    }

    pub(crate) fn stop(&mut self) {
        if self.state == HandleState::Observing {
            self.raw.disconnect();
            self.state = HandleState::Disconnected;
        } else {
            log::trace!("observer handle {} already disconnected", self.id);
        }
    }

    pub(crate) fn emit(&self, bounds: bounds_observer_graphics::Rect) {
        self.callback.invoke(bounds);
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.stop();
        log::debug!(
            "released observer handle {} for root {}",
            self.id,
            self.root.id()
        );
    }
}

impl fmt::Debug for ObserverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverHandle")
            .field("id", &self.id)
            .field("root", &self.root.id())
            .field("callback", &self.callback.token())
            .field("state", &self.state)
            .finish()
    }
}

/// Creates, replaces and releases the one live [`ObserverHandle`].
pub struct SubscriptionManager<S> {
    service: S,
    current: Option<ObserverHandle>,
    next_id: u64,
}

impl<S: GeometryObserverService> SubscriptionManager<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            current: None,
            next_id: 1,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn current(&self) -> Option<&ObserverHandle> {
        self.current.as_ref()
    }

    pub fn has_live_handle(&self) -> bool {
        self.current.is_some()
    }

    #[track_caller]
    pub fn current_mut(&mut self, phase: Phase) -> &mut ObserverHandle {
        match self.current.as_mut() {
            Some(handle) => handle,
            None => LifecycleFault::HandleMissing { phase }.raise(),
        }
    }

    /// Builds a handle bound to `root` and, if `activate`, starts it.
    ///
    /// Activation delivers the initial reading to `callback` before this
    /// returns.
    #[track_caller]
    pub fn observe(
        &mut self,
        root: &RootNode,
        callback: &BoundsCallback,
        activate: bool,
        phase: Phase,
    ) -> &mut ObserverHandle {
        if let Some(live) = &self.current {
            LifecycleFault::HandleAlreadyLive {
                phase,
                handle: live.id(),
            }
            .raise();
        }

        let id = HandleId(self.next_id);
        self.next_id += 1;

        let raw = self.service.construct(listener_for(root, callback));
        log::debug!(
            "created observer handle {id} for root {} ({}, activate={activate})",
            root.id(),
            callback.token()
        );

        let handle = self.current.insert(ObserverHandle {
            id,
            raw,
            root: root.clone(),
            callback: callback.clone(),
            state: HandleState::Disconnected,
        });
        if activate {
            activation::activate(handle, root);
        }
        handle
    }

    /// Releases the live handle.
    #[track_caller]
    pub fn disconnect(&mut self, phase: Phase) {
        match self.current.take() {
            Some(handle) => drop(handle),
            None => LifecycleFault::HandleMissing { phase }.raise(),
        }
    }

    /// Releases the live handle, then builds its replacement.
    #[track_caller]
    pub fn recreate(
        &mut self,
        root: &RootNode,
        callback: &BoundsCallback,
        activate: bool,
        phase: Phase,
    ) -> &mut ObserverHandle {
        self.disconnect(phase);
        self.observe(root, callback, activate, phase)
    }
}

fn listener_for(root: &RootNode, callback: &BoundsCallback) -> EntryListener {
    let root_id = root.id();
    let callback = callback.clone();
    Box::new(move |entries: &[BoundsEntry]| {
        let matching = activation::filter_for_root(root_id, entries);
        if matching.len() < entries.len() {
            log::trace!(
                "dropped {} entries not targeting root {root_id}",
                entries.len() - matching.len()
            );
        }
        for bounds in matching {
            callback.invoke(bounds);
        }
    })
}

//! A geometry observer service that never measures anything.
//!
//! Every call the core makes is counted and journaled as a [`ServiceEvent`];
//! batches are delivered only when a test calls [`RecordingGeometryService::report`]
//! or [`RecordingGeometryService::deliver`]. Like a real engine it drops
//! deliveries for observers that are not observing.

use bounds_observer_core::{
    BoundsEntry, EntryListener, GeometryObserver, GeometryObserverService, HostNode, NodeId,
    RootNode,
};
use bounds_observer_graphics::Rect;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

use crate::host::TestNode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceEvent {
    Constructed(u64),
    Observe(u64, NodeId),
    Disconnect(u64),
    Dropped(u64),
}

struct ObserverRecord {
    listener: Option<EntryListener>,
    target: Option<NodeId>,
    observing: bool,
}

#[derive(Default)]
struct Registry {
    observers: FxHashMap<u64, ObserverRecord>,
    next_id: u64,
    max_live: usize,
    observe_calls: usize,
    disconnect_calls: usize,
    redundant_disconnects: usize,
    dropped_while_observing: usize,
    events: Vec<ServiceEvent>,
}

/// Shared handle to the recording service; clones see the same registry.
#[derive(Clone, Default)]
pub struct RecordingGeometryService {
    registry: Rc<RefCell<Registry>>,
}

impl RecordingGeometryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports `bounds` for `target` to every observer currently observing it.
    ///
    /// Returns the number of observers the entry was delivered to.
    pub fn report(&self, target: NodeId, bounds: Rect) -> usize {
        let entry = BoundsEntry::new(target, bounds);
        let recipients: Vec<u64> = self
            .registry
            .borrow()
            .observers
            .iter()
            .filter(|(_, record)| record.observing && record.target == Some(target))
            .map(|(id, _)| *id)
            .collect();
        for id in &recipients {
            self.deliver_to(*id, std::slice::from_ref(&entry));
        }
        recipients.len()
    }

    /// Reports the node's current bounds.
    pub fn report_node(&self, node: &TestNode) -> usize {
        self.report(node.id(), node.bounds())
    }

    /// Hands `entries` unfiltered to every observing observer, whatever it
    /// observes.
    pub fn deliver(&self, entries: &[BoundsEntry]) -> usize {
        let recipients: Vec<u64> = self
            .registry
            .borrow()
            .observers
            .iter()
            .filter(|(_, record)| record.observing)
            .map(|(id, _)| *id)
            .collect();
        for id in &recipients {
            self.deliver_to(*id, entries);
        }
        recipients.len()
    }

    /// Hands `entries` to one observer regardless of its state, the way a
    /// late timer tick might. Observers that are not observing ignore it.
    pub fn deliver_late(&self, observer: u64, entries: &[BoundsEntry]) -> bool {
        let observing = self
            .registry
            .borrow()
            .observers
            .get(&observer)
            .is_some_and(|record| record.observing);
        if observing {
            self.deliver_to(observer, entries);
        } else {
            log::trace!("ignored late delivery to observer {observer}");
        }
        observing
    }

    fn deliver_to(&self, id: u64, entries: &[BoundsEntry]) {
        // The listener runs user callbacks, so it is called with the
        // registry unborrowed.
        let listener = self
            .registry
            .borrow_mut()
            .observers
            .get_mut(&id)
            .and_then(|record| record.listener.take());
        if let Some(mut listener) = listener {
            listener(entries);
            if let Some(record) = self.registry.borrow_mut().observers.get_mut(&id) {
                record.listener = Some(listener);
            }
        }
    }

    pub fn live_observers(&self) -> usize {
        self.registry.borrow().observers.len()
    }

    pub fn max_live_observers(&self) -> usize {
        self.registry.borrow().max_live
    }

    pub fn observing_count(&self) -> usize {
        self.registry
            .borrow()
            .observers
            .values()
            .filter(|record| record.observing)
            .count()
    }

    /// Id of the most recently constructed observer, if any was constructed.
    pub fn last_observer(&self) -> Option<u64> {
        let registry = self.registry.borrow();
        registry.next_id.checked_sub(1)
    }

    pub fn constructed(&self) -> usize {
        self.registry.borrow().next_id as usize
    }

    pub fn observe_calls(&self) -> usize {
        self.registry.borrow().observe_calls
    }

    pub fn disconnect_calls(&self) -> usize {
        self.registry.borrow().disconnect_calls
    }

    /// Disconnects of observers that were not observing.
    pub fn redundant_disconnects(&self) -> usize {
        self.registry.borrow().redundant_disconnects
    }

    /// Observers dropped without being disconnected first.
    pub fn dropped_while_observing(&self) -> usize {
        self.registry.borrow().dropped_while_observing
    }

    pub fn events(&self) -> Vec<ServiceEvent> {
        self.registry.borrow().events.clone()
    }

    pub fn clear_events(&self) {
        self.registry.borrow_mut().events.clear();
    }
}

impl GeometryObserverService for RecordingGeometryService {
    fn construct(&self, listener: EntryListener) -> Box<dyn GeometryObserver> {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.observers.insert(
            id,
            ObserverRecord {
                listener: Some(listener),
                target: None,
                observing: false,
            },
        );
        registry.max_live = registry.max_live.max(registry.observers.len());
        registry.events.push(ServiceEvent::Constructed(id));
        Box::new(RecordedObserver {
            id,
            registry: Rc::clone(&self.registry),
        })
    }
}

struct RecordedObserver {
    id: u64,
    registry: Rc<RefCell<Registry>>,
}

impl GeometryObserver for RecordedObserver {
    fn observe(&mut self, root: &RootNode) {
        let mut registry = self.registry.borrow_mut();
        registry.observe_calls += 1;
        registry.events.push(ServiceEvent::Observe(self.id, root.id()));
        if let Some(record) = registry.observers.get_mut(&self.id) {
            record.target = Some(root.id());
            record.observing = true;
        }
    }

    fn disconnect(&mut self) {
        let mut registry = self.registry.borrow_mut();
        registry.disconnect_calls += 1;
        registry.events.push(ServiceEvent::Disconnect(self.id));
        let was_observing = registry
            .observers
            .get_mut(&self.id)
            .map(|record| std::mem::replace(&mut record.observing, false))
            .unwrap_or(false);
        if !was_observing {
            registry.redundant_disconnects += 1;
        }
    }
}

impl Drop for RecordedObserver {
    fn drop(&mut self) {
        let mut registry = self.registry.borrow_mut();
        registry.events.push(ServiceEvent::Dropped(self.id));
        if let Some(record) = registry.observers.remove(&self.id) {
            if record.observing {
                registry.dropped_while_observing += 1;
            }
        }
    }
}

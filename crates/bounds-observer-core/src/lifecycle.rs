use crate::activation;
use crate::callback::BoundsCallback;
use crate::fault::{LifecycleFault, Phase};
use crate::node::RootNode;
use crate::provider::RootNodeProvider;
use crate::service::GeometryObserverService;
use crate::subscription::{ObserverHandle, SubscriptionManager};

/// Host-supplied configuration of a [`BoundsObserver`].
#[derive(Clone, Debug)]
pub struct BoundsObserverProps {
    pub activate: bool,
    pub on_bounds_change: BoundsCallback,
}

impl BoundsObserverProps {
    pub fn new(activate: bool, on_bounds_change: BoundsCallback) -> Self {
        Self {
            activate,
            on_bounds_change,
        }
    }

    pub fn with_activate(&self, activate: bool) -> Self {
        Self {
            activate,
            on_bounds_change: self.on_bounds_change.clone(),
        }
    }

    pub fn with_callback(&self, on_bounds_change: BoundsCallback) -> Self {
        Self {
            activate: self.activate,
            on_bounds_change,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverStatus {
    Unmounted,
    Active,
    Inactive,
}

/// Keeps one observer handle in sync with the root, the activation flag and
/// the callback identity across mount, update and unmount.
pub struct BoundsObserver<P, S> {
    provider: P,
    subscriptions: SubscriptionManager<S>,
    root: Option<RootNode>,
}

impl<P, S> BoundsObserver<P, S>
where
    P: RootNodeProvider,
    S: GeometryObserverService,
{
    pub fn new(provider: P, service: S) -> Self {
        Self {
            provider,
            subscriptions: SubscriptionManager::new(service),
            root: None,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn service(&self) -> &S {
        self.subscriptions.service()
    }

    pub fn root(&self) -> Option<&RootNode> {
        self.root.as_ref()
    }

    pub fn handle(&self) -> Option<&ObserverHandle> {
        self.subscriptions.current()
    }

    pub fn status(&self) -> ObserverStatus {
        match self.subscriptions.current() {
            None => ObserverStatus::Unmounted,
            Some(handle) if handle.is_observing() => ObserverStatus::Active,
            Some(_) => ObserverStatus::Inactive,
        }
    }

    #[track_caller]
    pub fn on_mount(&mut self, props: &BoundsObserverProps) {
        if self.subscriptions.has_live_handle() {
            LifecycleFault::AlreadyMounted.raise();
        }

        let node = match self.provider.resolve() {
            Some(node) => node,
            None => LifecycleFault::RootUnresolved {
                phase: Phase::Mount,
            }
            .raise(),
        };
        let root = RootNode::from_host(node, Phase::Mount).unwrap_or_else(|fault| fault.raise());
        log::debug!("mounting bounds observer on root {}", root.id());

        let root = self.root.insert(root);
        self.subscriptions
            .observe(root, &props.on_bounds_change, props.activate, Phase::Mount);
    }

    /// Applies a props change: callback identity first, then activation.
    #[track_caller]
    pub fn on_update(&mut self, prev: &BoundsObserverProps, next: &BoundsObserverProps) {
        if !self.subscriptions.has_live_handle() {
            LifecycleFault::HandleMissing {
                phase: Phase::Update,
            }
            .raise();
        }
        let root = match self.root.as_ref() {
            Some(root) => root,
            None => LifecycleFault::RootUnresolved {
                phase: Phase::Update,
            }
            .raise(),
        };

        let current = if next.on_bounds_change.same_identity(&prev.on_bounds_change) {
            self.subscriptions.current_mut(Phase::Update)
        } else {
            log::debug!(
                "callback changed ({} -> {}), recreating observer handle",
                prev.on_bounds_change.token(),
                next.on_bounds_change.token()
            );
            // The replacement inherits the activation state it is replacing;
            // the flag transition below applies on top of it.
            self.subscriptions.recreate(
                root,
                &next.on_bounds_change,
                prev.activate,
                Phase::Update,
            )
        };

        if next.activate != prev.activate {
            if next.activate {
                activation::activate(current, root);
            } else {
                activation::deactivate(current);
            }
        }
    }

    #[track_caller]
    pub fn on_unmount(&mut self) {
        self.subscriptions.disconnect(Phase::Unmount);
        if let Some(root) = self.root.take() {
            log::debug!("unmounted bounds observer from root {}", root.id());
        }
    }
}

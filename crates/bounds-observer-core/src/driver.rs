use crate::fault::{LifecycleFault, Phase};
use crate::lifecycle::{BoundsObserver, BoundsObserverProps};
use crate::provider::RootNodeProvider;
use crate::service::GeometryObserverService;

/// Host lifecycle entry points of a component.
///
/// Transitions run synchronously, one at a time, on the host's UI thread.
pub trait Lifecycle {
    type Props: Clone;

    fn on_mount(&mut self, props: &Self::Props);

    fn on_update(&mut self, prev: &Self::Props, next: &Self::Props);

    fn on_unmount(&mut self);
}

impl<P, S> Lifecycle for BoundsObserver<P, S>
where
    P: RootNodeProvider,
    S: GeometryObserverService,
{
    type Props = BoundsObserverProps;

    fn on_mount(&mut self, props: &BoundsObserverProps) {
        BoundsObserver::on_mount(self, props)
    }

    fn on_update(&mut self, prev: &BoundsObserverProps, next: &BoundsObserverProps) {
        BoundsObserver::on_update(self, prev, next)
    }

    fn on_unmount(&mut self) {
        BoundsObserver::on_unmount(self)
    }
}

/// Remembers the last applied props so callers only supply the new ones.
pub struct HostDriver<C: Lifecycle> {
    component: C,
    props: Option<C::Props>,
}

impl<C: Lifecycle> HostDriver<C> {
    pub fn new(component: C) -> Self {
        Self {
            component,
            props: None,
        }
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    pub fn props(&self) -> Option<&C::Props> {
        self.props.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.props.is_some()
    }

    #[track_caller]
    pub fn mount(&mut self, props: C::Props) {
        if self.props.is_some() {
            LifecycleFault::AlreadyMounted.raise();
        }
        self.component.on_mount(&props);
        self.props = Some(props);
    }

    #[track_caller]
    pub fn update(&mut self, next: C::Props) {
        let prev = match self.props.take() {
            Some(prev) => prev,
            None => LifecycleFault::NotMounted {
                phase: Phase::Update,
            }
            .raise(),
        };
        self.component.on_update(&prev, &next);
        self.props = Some(next);
    }

    #[track_caller]
    pub fn unmount(&mut self) {
        if self.props.is_none() {
            LifecycleFault::NotMounted {
                phase: Phase::Unmount,
            }
            .raise();
        }
        self.component.on_unmount();
        self.props = None;
    }

    pub fn into_inner(self) -> C {
        self.component
    }
}

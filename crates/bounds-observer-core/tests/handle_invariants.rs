//! Property tests over arbitrary mount/update/unmount sequences.

use bounds_observer_core::*;
use bounds_observer_testing::*;
use proptest::prelude::*;

const CALLBACKS: usize = 3;

fn props_for(recorders: &[BoundsRecorder], activate: bool, callback: usize) -> BoundsObserverProps {
    BoundsObserverProps::new(activate, recorders[callback].callback())
}

proptest! {
    /// At most one live handle, one reading per activation transition, and
    /// recreation only on callback change, for every update sequence.
    #[test]
    fn handle_and_callback_accounting(
        mount_active in any::<bool>(),
        mount_callback in 0usize..CALLBACKS,
        updates in prop::collection::vec((any::<bool>(), 0usize..CALLBACKS), 0..32),
    ) {
        let node = TestNode::element(Rect::new(0.0, 0.0, 10.0, 10.0));
        let provider = OwnContainer::new();
        provider.container_ref().attach(node.as_host());
        let service = RecordingGeometryService::new();
        let recorders: Vec<BoundsRecorder> = (0..CALLBACKS).map(|_| BoundsRecorder::new()).collect();
        let mut expected = [0usize; CALLBACKS];
        let mut expected_constructed = 1;

        let mut driver = HostDriver::new(BoundsObserver::new(provider, service.clone()));
        driver.mount(props_for(&recorders, mount_active, mount_callback));
        if mount_active {
            expected[mount_callback] += 1;
        }

        let (mut prev_active, mut prev_callback) = (mount_active, mount_callback);
        for (step, (active, callback)) in updates.into_iter().enumerate() {
            node.set_bounds(Rect::new(step as f32, 0.0, 10.0, 10.0));
            driver.update(props_for(&recorders, active, callback));

            if callback != prev_callback {
                expected_constructed += 1;
                if prev_active {
                    expected[callback] += 1;
                }
            }
            if active != prev_active && active {
                expected[callback] += 1;
            }

            prop_assert_eq!(service.live_observers(), 1);
            let status = driver.component().status();
            let expected_status = if active { ObserverStatus::Active } else { ObserverStatus::Inactive };
            prop_assert_eq!(status, expected_status);

            let delivered = service.report_node(&node);
            prop_assert_eq!(delivered, usize::from(active));
            if active {
                expected[callback] += 1;
            }

            prev_active = active;
            prev_callback = callback;
        }

        driver.unmount();

        let counts: Vec<usize> = recorders.iter().map(BoundsRecorder::count).collect();
        prop_assert_eq!(counts, expected.to_vec());
        prop_assert_eq!(service.constructed(), expected_constructed);
        prop_assert_eq!(service.live_observers(), 0);
        prop_assert!(service.max_live_observers() <= 1);
        prop_assert_eq!(service.redundant_disconnects(), 0);
        prop_assert_eq!(service.dropped_while_observing(), 0);
    }

    /// Toggling only the activation flag never replaces the handle.
    #[test]
    fn activation_toggles_keep_handle(flags in prop::collection::vec(any::<bool>(), 1..24)) {
        let node = TestNode::element(Rect::new(1.0, 1.0, 5.0, 5.0));
        let provider = OwnContainer::new();
        provider.container_ref().attach(node.as_host());
        let service = RecordingGeometryService::new();
        let recorder = BoundsRecorder::new();
        let mut observer = BoundsObserver::new(provider, service.clone());

        let mut prev = BoundsObserverProps::new(false, recorder.callback());
        observer.on_mount(&prev);
        let handle = observer.handle().map(|h| h.id());

        let mut activations = 0;
        for flag in flags {
            let next = prev.with_activate(flag);
            if flag && !prev.activate {
                activations += 1;
            }
            observer.on_update(&prev, &next);
            prop_assert_eq!(observer.handle().map(|h| h.id()), handle);
            prev = next;
        }

        prop_assert_eq!(recorder.count(), activations);
        prop_assert_eq!(service.constructed(), 1);
    }
}

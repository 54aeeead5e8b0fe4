use bounds_observer_core::prelude::*;
use bounds_observer_testing::{RecordingGeometryService, TestElement, TestNode};
use std::rc::Rc;

fn logging_callback(label: &'static str) -> BoundsCallback {
    BoundsCallback::new(move |rect: Rect| {
        log::info!(
            "[{label}] bounds x={:.1} y={:.1} w={:.1} h={:.1}",
            rect.x,
            rect.y,
            rect.width,
            rect.height
        );
    })
}

fn main() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Bounds Observer Walkthrough ===");
    println!("A headless host wraps one child, toggles observation and swaps callbacks.");
    println!("Run with RUST_LOG=debug to see handle creation and release.");
    println!();

    let panel = TestNode::element(Rect::new(0.0, 0.0, 320.0, 240.0));
    let service = RecordingGeometryService::new();

    let provider = WrapChild::new();
    let child = provider.render([TestElement::new(Rc::clone(&panel))]);
    child.attach();

    let mut host = HostDriver::new(BoundsObserver::new(provider, service.clone()));
    let first = logging_callback("first");
    let second = logging_callback("second");

    log::info!("mount, inactive");
    host.mount(BoundsObserverProps::new(false, first.clone()));

    log::info!("activate");
    host.update(BoundsObserverProps::new(true, first));

    panel.set_bounds(Rect::new(0.0, 0.0, 640.0, 480.0));
    service.report_node(&panel);

    log::info!("swap callback");
    host.update(BoundsObserverProps::new(true, second.clone()));

    panel.set_bounds(Rect::new(16.0, 16.0, 640.0, 480.0));
    service.report_node(&panel);

    log::info!("deactivate");
    host.update(BoundsObserverProps::new(false, second));
    panel.set_bounds(Rect::new(0.0, 0.0, 1.0, 1.0));
    service.report_node(&panel);

    log::info!("unmount");
    host.unmount();

    println!();
    println!(
        "observers constructed: {}, live: {}, disconnects: {}",
        service.constructed(),
        service.live_observers(),
        service.disconnect_calls()
    );
}

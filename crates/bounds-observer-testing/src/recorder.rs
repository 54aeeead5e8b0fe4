use bounds_observer_core::BoundsCallback;
use bounds_observer_graphics::Rect;
use std::cell::RefCell;
use std::rc::Rc;

/// A bounds callback that remembers every rectangle it receives.
///
/// [`BoundsRecorder::callback`] always returns the same identity, so passing
/// it in successive props does not count as a callback change.
#[derive(Clone)]
pub struct BoundsRecorder {
    calls: Rc<RefCell<Vec<Rect>>>,
    callback: BoundsCallback,
}

impl Default for BoundsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundsRecorder {
    pub fn new() -> Self {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let callback = BoundsCallback::new(move |bounds| sink.borrow_mut().push(bounds));
        Self { calls, callback }
    }

    pub fn callback(&self) -> BoundsCallback {
        self.callback.clone()
    }

    pub fn calls(&self) -> Vec<Rect> {
        self.calls.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last(&self) -> Option<Rect> {
        self.calls.borrow().last().copied()
    }

    /// Returns the recorded calls and starts over.
    pub fn take(&self) -> Vec<Rect> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }
}

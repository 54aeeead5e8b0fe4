use bounds_observer_graphics::Rect;
use std::fmt;
use std::rc::Rc;

/// Pointer-derived identity of a [`BoundsCallback`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallbackToken(usize);

impl fmt::Display for CallbackToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cb@{:#x}", self.0)
    }
}

/// Bounds-change callback compared by identity, never by behavior.
///
/// Clones share one allocation and therefore one identity. Wrapping the same
/// closure body twice yields two different callbacks.
#[derive(Clone)]
pub struct BoundsCallback {
    inner: Rc<dyn Fn(Rect)>,
}

impl BoundsCallback {
    pub fn new(callback: impl Fn(Rect) + 'static) -> Self {
        Self {
            inner: Rc::new(callback),
        }
    }

    pub fn invoke(&self, bounds: Rect) {
        (self.inner)(bounds)
    }

    pub fn same_identity(&self, other: &BoundsCallback) -> bool {
        self.token() == other.token()
    }

    pub fn token(&self) -> CallbackToken {
        CallbackToken(Rc::as_ptr(&self.inner) as *const () as usize)
    }
}

impl fmt::Debug for BoundsCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoundsCallback").field(&self.token()).finish()
    }
}

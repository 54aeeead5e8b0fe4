use crate::node::{NodeId, NodeKind};
use crate::subscription::HandleId;
use std::fmt;

/// Host lifecycle step during which a fault was detected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Render,
    Mount,
    Update,
    Unmount,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Render => f.write_str("render"),
            Phase::Mount => f.write_str("mount"),
            Phase::Update => f.write_str("update"),
            Phase::Unmount => f.write_str("unmount"),
        }
    }
}

/// A broken host-integration invariant.
///
/// None of these are recoverable: the observer is unusable until the host
/// is fixed. They are raised through [`LifecycleFault::raise`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleFault {
    RootUnresolved {
        phase: Phase,
    },
    NotAnElement {
        phase: Phase,
        id: NodeId,
        kind: NodeKind,
    },
    HandleMissing {
        phase: Phase,
    },
    HandleAlreadyLive {
        phase: Phase,
        handle: HandleId,
    },
    AlreadyMounted,
    NotMounted {
        phase: Phase,
    },
    ChildCount {
        found: usize,
    },
}

impl LifecycleFault {
    /// Logs the fault and panics with its message.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        log::error!("bounds observer fault: {self}");
        panic!("{self}")
    }
}

impl fmt::Display for LifecycleFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleFault::RootUnresolved { phase } => {
                write!(f, "root node should have been resolved by {phase}")
            }
            LifecycleFault::NotAnElement { phase, id, kind } => {
                write!(
                    f,
                    "root node {id} should be an element at {phase}, found {kind} node"
                )
            }
            LifecycleFault::HandleMissing { phase } => {
                write!(f, "observer handle should have been installed by {phase}")
            }
            LifecycleFault::HandleAlreadyLive { phase, handle } => {
                write!(f, "observer handle {handle} is still live at {phase}")
            }
            LifecycleFault::AlreadyMounted => f.write_str("component is already mounted"),
            LifecycleFault::NotMounted { phase } => {
                write!(f, "component should be mounted before {phase}")
            }
            LifecycleFault::ChildCount { found } => {
                write!(f, "expected exactly one child, found {found}")
            }
        }
    }
}

impl std::error::Error for LifecycleFault {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_phase() {
        let fault = LifecycleFault::HandleMissing {
            phase: Phase::Unmount,
        };
        assert_eq!(
            fault.to_string(),
            "observer handle should have been installed by unmount"
        );

        let fault = LifecycleFault::NotAnElement {
            phase: Phase::Mount,
            id: NodeId::new(3),
            kind: NodeKind::Text,
        };
        assert_eq!(
            fault.to_string(),
            "root node #3 should be an element at mount, found text node"
        );
    }

    #[test]
    #[should_panic(expected = "expected exactly one child, found 2")]
    fn raise_panics_with_message() {
        LifecycleFault::ChildCount { found: 2 }.raise();
    }
}

//! Testing utilities for bounds observers
//!
//! A headless host ([`TestNode`], [`TestElement`]), a geometry service that
//! records every call made to it and delivers only the batches a test asks
//! for ([`RecordingGeometryService`]), and a callback that remembers what it
//! received ([`BoundsRecorder`]).

pub mod assertions;
pub mod host;
pub mod recorder;
pub mod service;

pub use assertions::*;
pub use host::{TestElement, TestNode};
pub use recorder::BoundsRecorder;
pub use service::{RecordingGeometryService, ServiceEvent};

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::host::{TestElement, TestNode};
    pub use crate::recorder::BoundsRecorder;
    pub use crate::service::{RecordingGeometryService, ServiceEvent};
}

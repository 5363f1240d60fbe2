//! Controllers for observing and steering the viewer from external code.
//!
//! The controller exposes lightweight shared state and a subscription
//! mechanism so non-UI code can receive every snapshot the viewer renders and
//! push period requests without touching the aggregator directly.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::data::snapshot::WindingSnapshot;
use crate::render::WindingRenderer;

/// Shared handle between the viewer and external observers.
#[derive(Clone, Default)]
pub struct SnapshotController {
    pub(crate) inner: Arc<Mutex<SnapshotCtrlInner>>,
}

#[derive(Default)]
pub(crate) struct SnapshotCtrlInner {
    pub(crate) latest: Option<WindingSnapshot>,
    pub(crate) request_period: Option<(f64, f64)>,
    pub(crate) listeners: Vec<Sender<WindingSnapshot>>,
}

impl SnapshotController {
    pub fn new() -> Self {
        Self::default()
    }

    // The guarded state stays consistent across a panicking holder, so a
    // poisoned lock is recovered rather than ignored.
    fn lock(&self) -> MutexGuard<'_, SnapshotCtrlInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Most recently published snapshot, if any.
    pub fn latest(&self) -> Option<WindingSnapshot> {
        self.lock().latest.clone()
    }

    /// Ask the viewer to switch to `period` (with `shift`) on its next frame.
    /// `0` selects the automatic period.
    pub fn request_period(&self, period: f64, shift: f64) {
        self.lock().request_period = Some((period, shift));
    }

    /// Subscribe to snapshots. The receiver gets one message per publish.
    pub fn subscribe(&self) -> Receiver<WindingSnapshot> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.lock().listeners.push(tx);
        rx
    }

    /// Record `snapshot` as latest and broadcast it; disconnected listeners are dropped.
    pub fn publish(&self, snapshot: &WindingSnapshot) {
        let mut inner = self.lock();
        inner.latest = Some(snapshot.clone());
        inner
            .listeners
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }

    pub(crate) fn take_period_request(&self) -> Option<(f64, f64)> {
        self.lock().request_period.take()
    }
}

impl WindingRenderer for SnapshotController {
    fn present(&mut self, snapshot: &WindingSnapshot) {
        self.publish(snapshot);
    }
}

//! Renderer seam: anything that can draw a [`WindingSnapshot`].

use crate::data::snapshot::WindingSnapshot;

/// Receives snapshots produced by
/// [`WindingAggregator::redraw`](crate::data::winding::WindingAggregator::redraw).
///
/// Renderers only read the snapshot; they never reach back into the aggregator.
pub trait WindingRenderer {
    fn present(&mut self, snapshot: &WindingSnapshot);
}

impl<F> WindingRenderer for F
where
    F: FnMut(&WindingSnapshot),
{
    fn present(&mut self, snapshot: &WindingSnapshot) {
        self(snapshot)
    }
}

/// Keeps the most recent snapshot. Handy for polling hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct LatestSnapshot {
    pub latest: Option<WindingSnapshot>,
    pub frames: usize,
}

impl WindingRenderer for LatestSnapshot {
    fn present(&mut self, snapshot: &WindingSnapshot) {
        self.latest = Some(snapshot.clone());
        self.frames += 1;
    }
}

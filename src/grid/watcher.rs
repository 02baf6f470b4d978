// Re-scans the grid when the page reports a change. The event source is a
// channel owned by the caller; nothing here is global.

use crate::error::PriceError;
use crate::grid::annotate::{annotate_row, Annotation, GridRow, RowAnnotation};
use crate::pricing::PricingConfig;
use crossbeam::channel::{Receiver, TryRecvError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Rows were added, removed or replaced
    RowsChanged,
    /// Only attributes changed; row text is unaffected
    AttributesChanged,
    /// The page is going away
    Closed,
}

/// Reads the current rows of the grid
pub trait GridSource {
    fn rows(&self) -> Vec<GridRow>;
}

/// Receives the outcome of each row after a scan
pub trait GridSink {
    fn annotate(&mut self, annotation: &Annotation);

    fn skip(&mut self, _index: usize, _error: &PriceError) {}
}

pub struct GridWatcher {
    events: Receiver<GridEvent>,
    config: PricingConfig,
}

impl GridWatcher {
    pub fn new(events: Receiver<GridEvent>) -> Self {
        Self::with_config(events, PricingConfig::default())
    }

    pub fn with_config(events: Receiver<GridEvent>, config: PricingConfig) -> Self {
        Self { events, config }
    }

    /// Price every row once and hand the results to `sink`.
    /// Returns the number of annotated rows.
    pub fn scan<S, K>(&self, source: &S, sink: &mut K) -> usize
    where
        S: GridSource + ?Sized,
        K: GridSink + ?Sized,
    {
        let rows = source.rows();
        let mut annotated = 0;
        for (index, row) in rows.iter().enumerate() {
            match annotate_row(&self.config, index, row) {
                RowAnnotation::Annotated(annotation) => {
                    sink.annotate(&annotation);
                    annotated += 1;
                }
                RowAnnotation::Skipped { index, error } => sink.skip(index, &error),
            }
        }
        tracing::debug!(rows = rows.len(), annotated, "scanned grid");
        annotated
    }

    /// Handle events until `Closed` arrives or every sender is dropped.
    /// Changes already queued when a scan starts are folded into that scan.
    /// Returns the number of scans performed.
    pub fn run<S, K>(&self, source: &S, sink: &mut K) -> usize
    where
        S: GridSource + ?Sized,
        K: GridSink + ?Sized,
    {
        let mut scans = 0;
        while let Ok(event) = self.events.recv() {
            match event {
                GridEvent::AttributesChanged => continue,
                GridEvent::Closed => break,
                GridEvent::RowsChanged => {
                    let closed = self.drain_pending();
                    self.scan(source, sink);
                    scans += 1;
                    if closed {
                        break;
                    }
                }
            }
        }
        tracing::debug!(scans, "grid watcher stopped");
        scans
    }

    /// Discard queued events; true if one of them closed the grid
    fn drain_pending(&self) -> bool {
        loop {
            match self.events.try_recv() {
                Ok(GridEvent::Closed) | Err(TryRecvError::Disconnected) => return true,
                Ok(_) => continue,
                Err(TryRecvError::Empty) => return false,
            }
        }
    }
}

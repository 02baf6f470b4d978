// Page-free side of the product grid: column lookup, per-row annotation and
// change-driven re-scans. Reading and writing the actual page stays with the caller.

pub mod annotate;
pub mod layout;
pub mod snapshot;
pub mod watcher;

pub use annotate::{
    annotate_row, annotate_rows, annotate_rows_with, annotate_table_with, Annotation, GridRow,
    RowAnnotation,
};
pub use layout::{GridError, GridLayout, HeaderCell};
pub use snapshot::GridSnapshot;
pub use watcher::{GridEvent, GridSink, GridSource, GridWatcher};

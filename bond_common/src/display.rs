//! Grid display capability consumed by the streaming controller.
//!
//! The panel does not render anything itself; it drives an implementation of
//! [`GridDisplay`] with full dataset snapshots. A display receives the ordered
//! record sequence plus the column schema on the initial `render`, then full
//! replacements on every applied batch, followed by a scroll-to-top directive
//! so the newest rows stay visible.
//!
//! Cell interactions flow the other way: a display (or whatever input surface
//! fronts it) pushes [`CellInteraction`] values into a `crossbeam_channel`
//! sender handed to it at construction, and the host loop forwards them to the
//! controller's row-selection toggle.

use crate::columns::ColumnSpec;
use crate::record::QuoteRecord;
use crate::result::Result;

/// Static presentation options passed to the initial `render`.
#[derive(Debug, Clone, Copy)]
pub struct GridOptions {
    /// Number of body rows the display keeps visible.
    pub height_rows: usize,
    /// Leading columns that stay pinned while scrolling horizontally.
    pub frozen_cols: usize,
}

impl Default for GridOptions {
    fn default() -> Self {
        GridOptions {
            height_rows: 20,
            frozen_cols: 3,
        }
    }
}

/// One user interaction with a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellInteraction {
    /// Zero-based body row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

/// Rendering capability the controller drives.
///
/// Implementations own their presentation state; the controller only ever
/// hands them immutable snapshots and scroll directives.
pub trait GridDisplay {
    /// Initial draw with the column schema and presentation options.
    fn render(
        &mut self,
        records: &[QuoteRecord],
        columns: &[ColumnSpec],
        options: GridOptions,
    ) -> Result<()>;

    /// Replace the entire dataset with a fresh snapshot.
    fn replace_dataset(&mut self, records: &[QuoteRecord]) -> Result<()>;

    /// Scroll so that `index` is the first visible row.
    fn scroll_to(&mut self, index: usize) -> Result<()>;
}

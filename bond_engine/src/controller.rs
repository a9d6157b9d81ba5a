//! Streaming buffer controller: the pause/resume state machine that feeds the
//! grid display.
//!
//! The controller owns the bounded record buffer and the pending queue
//! exclusively; no other component mutates them. It is single-threaded and
//! timer-driven: the host loop invokes [`StreamController::tick`] on a fixed
//! cadence, and every operation runs to completion synchronously.
//!
//! State machine:
//! - `Running` (initial) — each tick generates a batch and applies it to the
//!   buffer, then pushes a full snapshot and a scroll-to-top to the display.
//! - `Paused` — ticks keep generating but divert batches to the pending
//!   queue, so pausing never loses data; `resume` replays the backlog in
//!   arrival order before new ticks apply again.
//!
//! Row selection toggles the machine: selecting a row while running pauses
//! and records the selection, selecting again while paused resumes and clears
//! it.

use log::{debug, info};

use bond_common::columns::ColumnSpec;
use bond_common::display::{GridDisplay, GridOptions};
use bond_common::record::QuoteRecord;
use bond_common::Result;

use crate::buffer::QuoteBuffer;
use crate::generator::{BatchPlan, QuoteGenerator, BATCH_STEP_MS};

/// Records generated between periodic statistics log lines.
const STATS_LOG_EVERY: usize = 200;

/// Controller mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Updates are applied to the buffer as they arrive.
    Running,
    /// Updates are queued; the buffer is frozen for inspection.
    Paused,
}

/// Read-only projection of the controller for a host status surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStatus {
    /// Whether the controller is in `Running` mode.
    pub running: bool,
    /// Number of queued batches (zero while running).
    pub pending_batches: usize,
    /// Total records across the queued batches.
    pub pending_records: usize,
    /// Records currently retained in the buffer.
    pub total_records: usize,
    /// Configured retention bound of the buffer.
    pub max_records: usize,
    /// Fields per record.
    pub field_count: usize,
    /// Rough resident size of the buffer in kilobytes, estimated from the
    /// JSON encoding of the newest record.
    pub approx_kb: usize,
}

/// Owns the buffer, the pending queue, and the display handle.
pub struct StreamController<D: GridDisplay> {
    generator: QuoteGenerator,
    batch_plan: BatchPlan,
    buffer: QuoteBuffer,
    pending: Vec<Vec<QuoteRecord>>,
    state: PanelState,
    selected_row: Option<usize>,
    display: D,
    generated_total: usize,
    /// Timestamp of the newest record generated so far, across both the
    /// buffer and the pending queue. Batch bases are clamped past this so a
    /// large batch whose internal span outruns the tick gap cannot overlap
    /// the next batch and break newest-first ordering.
    newest_ms: Option<u64>,
}

impl<D: GridDisplay> StreamController<D> {
    /// Controller in `Running` mode with an empty buffer bounded to `max_len`.
    pub fn new(generator: QuoteGenerator, batch_plan: BatchPlan, max_len: usize, display: D) -> Self {
        StreamController {
            generator,
            batch_plan,
            buffer: QuoteBuffer::new(max_len),
            pending: Vec::new(),
            state: PanelState::Running,
            selected_row: None,
            display,
            generated_total: 0,
            newest_ms: None,
        }
    }

    /// Generate one batch of `count` records based at `now_ms`, clamped so
    /// its timestamps start strictly after everything generated before it.
    fn next_batch(&mut self, count: usize, now_ms: u64) -> Vec<QuoteRecord> {
        let floor = self
            .newest_ms
            .map_or(0, |newest| newest.saturating_add(BATCH_STEP_MS));
        let batch = self.generator.generate_batch(count, now_ms.max(floor));
        if let Some(last) = batch.last() {
            self.newest_ms = Some(last.transact_time);
        }
        batch
    }

    /// Seed the initial population: one batch of `count` records applied
    /// directly to the buffer, without a display refresh. Call [`render`]
    /// afterwards for the initial draw.
    ///
    /// [`render`]: StreamController::render
    pub fn bootstrap(&mut self, count: usize, now_ms: u64) {
        let batch = self.next_batch(count, now_ms);
        self.generated_total += batch.len();
        self.buffer.prepend(batch);
        info!("Seeded panel with {} records", self.buffer.len());
    }

    /// Initial display draw with the column schema and presentation options.
    pub fn render(&mut self, columns: &[ColumnSpec], options: GridOptions) -> Result<()> {
        self.display.render(&self.buffer.snapshot(), columns, options)
    }

    /// One cadence step at clock time `now_ms`: generate a batch and either
    /// apply it (running) or queue it (paused). The batch base is clamped
    /// past the newest record generated so far, so successive batches never
    /// overlap even when a batch's internal span exceeds the tick gap.
    pub fn tick(&mut self, now_ms: u64) -> Result<()> {
        let size = self.batch_plan.next_size();
        let batch = self.next_batch(size, now_ms);
        match self.state {
            PanelState::Running => self.apply(batch),
            PanelState::Paused => {
                debug!(
                    "Paused: queued batch of {} ({} batches pending)",
                    batch.len(),
                    self.pending.len() + 1
                );
                self.pending.push(batch);
                Ok(())
            }
        }
    }

    /// Prepend `batch` to the buffer (newest first, truncating to the bound),
    /// then hand the display a fresh snapshot and scroll to the top.
    pub fn apply(&mut self, batch: Vec<QuoteRecord>) -> Result<()> {
        let before = self.generated_total;
        self.generated_total += batch.len();
        self.buffer.prepend(batch);
        self.display.replace_dataset(&self.buffer.snapshot())?;
        self.display.scroll_to(0)?;
        if before / STATS_LOG_EVERY != self.generated_total / STATS_LOG_EVERY {
            let status = self.status();
            debug!(
                "Panel stats: {} records retained, ~{}KB, {} fields/record",
                status.total_records, status.approx_kb, status.field_count
            );
        }
        Ok(())
    }

    /// Switch to `Paused`. Idempotent; a second pause is a no-op.
    pub fn pause(&mut self) {
        if self.state == PanelState::Paused {
            return;
        }
        self.state = PanelState::Paused;
        info!("Updates paused");
    }

    /// Switch to `Running`, replaying any queued batches in arrival order
    /// first. Idempotent; a second resume is a no-op.
    pub fn resume(&mut self) -> Result<()> {
        if self.state == PanelState::Running {
            return Ok(());
        }
        self.state = PanelState::Running;
        self.selected_row = None;
        if !self.pending.is_empty() {
            let backlog: Vec<Vec<QuoteRecord>> = self.pending.drain(..).collect();
            let total: usize = backlog.iter().map(Vec::len).sum();
            info!("Resuming: applying {} queued records", total);
            for batch in backlog {
                self.apply(batch)?;
            }
        } else {
            info!("Updates resumed");
        }
        Ok(())
    }

    /// Row interaction toggle: pause and remember the row while running,
    /// resume and clear the selection while paused.
    pub fn on_row_selected(&mut self, row_index: usize) -> Result<()> {
        match self.state {
            PanelState::Running => {
                self.pause();
                self.selected_row = Some(row_index);
                Ok(())
            }
            PanelState::Paused => self.resume(),
        }
    }

    /// Change how many records subsequent ticks generate.
    pub fn set_batch_plan(&mut self, plan: BatchPlan) {
        self.batch_plan = plan;
    }

    /// Current mode.
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Row remembered by the pause toggle, if any.
    pub fn selected_row(&self) -> Option<usize> {
        self.selected_row
    }

    /// Shared view of the record buffer.
    pub fn buffer(&self) -> &QuoteBuffer {
        &self.buffer
    }

    /// Read-only status projection for a host UI.
    pub fn status(&self) -> PanelStatus {
        let record_bytes = self
            .buffer
            .get(0)
            .and_then(|r| r.to_json_bytes().ok())
            .map(|b| b.len())
            .unwrap_or(0);
        PanelStatus {
            running: self.state == PanelState::Running,
            pending_batches: self.pending.len(),
            pending_records: self.pending.iter().map(Vec::len).sum(),
            total_records: self.buffer.len(),
            max_records: self.buffer.max_len(),
            field_count: QuoteRecord::field_count(),
            approx_kb: record_bytes * self.buffer.len() / 1024,
        }
    }
}

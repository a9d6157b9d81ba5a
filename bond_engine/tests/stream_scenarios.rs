//! End-to-end scenarios for the streaming buffer controller: sustained
//! running load against the retention bound, and a pause/resume cycle with a
//! large queued backlog.

use bond_common::columns::ColumnSpec;
use bond_common::display::{GridDisplay, GridOptions};
use bond_common::record::QuoteRecord;
use bond_common::Result;
use bond_engine::generator::BATCH_STEP_MS;
use bond_engine::{BatchPlan, PanelState, QuoteGenerator, StreamController};

/// Display that swallows everything; these scenarios only inspect the buffer.
struct NullDisplay;

impl GridDisplay for NullDisplay {
    fn render(
        &mut self,
        _records: &[QuoteRecord],
        _columns: &[ColumnSpec],
        _options: GridOptions,
    ) -> Result<()> {
        Ok(())
    }

    fn replace_dataset(&mut self, _records: &[QuoteRecord]) -> Result<()> {
        Ok(())
    }

    fn scroll_to(&mut self, _index: usize) -> Result<()> {
        Ok(())
    }
}

const TICK_MS: u64 = 800;

#[test]
fn sustained_running_load_retains_the_newest_5000() {
    let mut ctrl = StreamController::new(
        QuoteGenerator::pure_random(),
        BatchPlan::Fixed(43),
        5_000,
        NullDisplay,
    );

    ctrl.bootstrap(43, 0);
    for i in 1..=120u64 {
        ctrl.tick(i * TICK_MS).unwrap();
    }

    assert_eq!(ctrl.buffer().len(), 5_000);

    // Reconstruct every generated timestamp: seed batch at base 0, then one
    // batch per tick at base i*TICK_MS, each stepping BATCH_STEP_MS inside.
    let mut generated: Vec<u64> = Vec::new();
    for j in 0..43u64 {
        generated.push(j * BATCH_STEP_MS);
    }
    for i in 1..=120u64 {
        for j in 0..43u64 {
            generated.push(i * TICK_MS + j * BATCH_STEP_MS);
        }
    }
    generated.sort_unstable_by(|a, b| b.cmp(a));
    let expected: Vec<u64> = generated.into_iter().take(5_000).collect();

    let retained: Vec<u64> = ctrl.buffer().iter().map(|r| r.transact_time).collect();
    assert_eq!(retained, expected);
}

#[test]
fn pause_queues_everything_and_resume_reconciles() {
    let mut ctrl = StreamController::new(
        QuoteGenerator::pure_random(),
        BatchPlan::Fixed(50),
        10_000,
        NullDisplay,
    );

    ctrl.bootstrap(50, 0);
    assert_eq!(ctrl.buffer().len(), 50);

    ctrl.pause();
    for (i, size) in [480usize, 500, 470].into_iter().enumerate() {
        ctrl.set_batch_plan(BatchPlan::Fixed(size));
        ctrl.tick((i as u64 + 1) * TICK_MS).unwrap();
    }

    let paused = ctrl.status();
    assert!(!paused.running);
    assert_eq!(paused.pending_batches, 3);
    assert_eq!(paused.pending_records, 1_450);
    assert_eq!(paused.total_records, 50, "buffer frozen while paused");

    ctrl.resume().unwrap();

    let resumed = ctrl.status();
    assert_eq!(ctrl.state(), PanelState::Running);
    assert_eq!(resumed.total_records, 1_500.min(10_000));
    assert_eq!(resumed.pending_batches, 0);
    assert_eq!(resumed.pending_records, 0);

    // These batches span longer than the tick gap (480 x 2ms > 800ms), so
    // each base is clamped past the previous batch's newest record: bases
    // land at 800, 1760, 2760 rather than the raw tick times.
    let last_base = TICK_MS + (480 + 500) as u64 * BATCH_STEP_MS;
    let times: Vec<u64> = ctrl.buffer().iter().map(|r| r.transact_time).collect();
    assert_eq!(times[0], last_base + 469 * BATCH_STEP_MS);

    // Ordering must hold across the whole replayed backlog, including the
    // seams between consecutive queued batches.
    for pair in times.windows(2) {
        assert!(pair[0] >= pair[1], "ordering violated: {:?}", pair);
    }
}

#[test]
fn double_toggle_round_trip_is_lossless() {
    let mut ctrl = StreamController::new(
        QuoteGenerator::pure_random(),
        BatchPlan::Fixed(10),
        1_000,
        NullDisplay,
    );

    ctrl.bootstrap(10, 0);
    ctrl.on_row_selected(3).unwrap();
    ctrl.tick(TICK_MS).unwrap();
    ctrl.on_row_selected(3).unwrap();

    assert_eq!(ctrl.state(), PanelState::Running);
    assert_eq!(ctrl.selected_row(), None);
    assert_eq!(ctrl.buffer().len(), 20);
}

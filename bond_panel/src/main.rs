//! Bond Panel — a console demo that displays synthetically generated bond
//! quotes in a scrolling grid, pushing a fresh batch on a fixed cadence to
//! simulate a live market feed.
//!
//! Wiring:
//! - `TemplatePool` is loaded from the optional `--templates` JSON; a missing
//!   or unparsable file logs a warning and drops to pure-random generation.
//! - `QuoteGenerator` + `StreamController` (from `bond_engine`) own the
//!   bounded newest-first buffer and the pause/resume state machine.
//! - `ConsoleGrid` implements the `GridDisplay` capability on stdout.
//! - A `crossbeam_channel::tick` drives the cadence; a stdin reader thread
//!   turns typed row numbers into `CellInteraction` events that toggle
//!   pause/resume; Ctrl+C sets a shutdown flag.
//!
//! Usage example (CLI):
//! ```bash
//! bond_panel --templates ./mockup-data.json --max-records 5000 --interval-ms 800
//! ```
#![warn(missing_docs)]
mod args;
mod console;

use crate::args::Args;
use crate::console::ConsoleGrid;
use chrono::Utc;
use clap::Parser;
use crossbeam_channel::{select, tick, unbounded, Sender};
use log::{info, warn};
use std::io::{self, BufRead};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

use bond_common::columns;
use bond_common::display::{CellInteraction, GridOptions};
use bond_common::{PanelError, Result};
use bond_engine::{PanelStatus, QuoteGenerator, StreamController, TemplatePool};

fn main() -> Result<(), PanelError> {
    init_logger();
    let args = Args::parse();

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down panel...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .expect("Error setting Ctrl+C handler");
    }

    let pool = match &args.templates {
        Some(path) => TemplatePool::load(path),
        None => {
            info!("No template file given; using pure-random generation");
            TemplatePool::default()
        }
    };

    let generator = QuoteGenerator::from_pool(pool);
    let seed_count = generator.default_batch_size();
    let plan = args.batch_plan(seed_count)?;

    let grid = ConsoleGrid::new(!args.no_color);
    let mut controller = StreamController::new(generator, plan, args.max_records, grid);
    controller.bootstrap(seed_count, now_ms());
    controller.render(
        &columns::schema(),
        GridOptions {
            height_rows: args.height_rows,
            frozen_cols: args.frozen_cols,
        },
    )?;

    let (interact_tx, interact_rx) = unbounded::<CellInteraction>();
    start_row_input_thread(interact_tx);

    info!(
        "Panel running: {}ms cadence. Type a row number + Enter to pause on it, again to resume. Ctrl+C exits.",
        args.interval_ms
    );

    let cadence = tick(Duration::from_millis(args.interval_ms));
    while !shutdown.load(Ordering::Relaxed) {
        select! {
            recv(cadence) -> msg => if msg.is_ok() {
                controller.tick(now_ms())?;
            },
            recv(interact_rx) -> msg => match msg {
                Ok(event) => {
                    controller.on_row_selected(event.row)?;
                    log_status(controller.status());
                }
                Err(_) => break,
            },
            // Wake up periodically so the shutdown flag is observed even
            // with a long cadence and no input.
            default(Duration::from_millis(200)) => {}
        }
    }

    info!("Panel stopped.");
    Ok(())
}

fn now_ms() -> u64 {
    Utc::now().timestamp_millis() as u64
}

fn log_status(status: PanelStatus) {
    if status.running {
        info!("Live refresh ({} records retained)", status.total_records);
    } else {
        info!(
            "Paused - select again to resume ({} records pending push)",
            status.pending_records
        );
    }
}

/// Spawn the stdin reader that turns typed row numbers into interaction
/// events. The thread ends when stdin closes or the receiver is dropped.
fn start_row_input_thread(tx: Sender<CellInteraction>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(text) = line else { break };
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }
            match trimmed.parse::<usize>() {
                Ok(row) => {
                    if tx.send(CellInteraction { row, col: 0 }).is_err() {
                        break;
                    }
                }
                Err(_) => warn!("Not a row number: {}", trimmed),
            }
        }
    });
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

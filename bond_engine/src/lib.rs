//!
//! Engine for the bond market demo panel.
//!
//! This crate wires together two strictly layered components:
//!
//! - `templates` + `generator` — the Record Generator: synthesizes quote
//!   snapshots either by perturbing templates from a preloaded pool or from
//!   pure uniform draws when no pool is available. Generation is total; the
//!   only failure mode in the whole engine is an unreadable template file,
//!   which degrades to the pure-random strategy with a logged warning.
//! - `buffer` + `controller` — the Streaming Buffer Controller: a bounded
//!   newest-first record buffer plus a two-state (Running/Paused) machine
//!   driven by an external tick cadence. While paused, generated batches are
//!   queued rather than dropped, and `resume` reconciles the full backlog so
//!   the display never observes a gap.
//!
//! The engine owns the buffer and pending queue exclusively; frontends only
//! receive immutable snapshots through the `GridDisplay` capability defined in
//! `bond_common`.
#![warn(missing_docs)]
pub mod buffer;
pub mod controller;
pub mod generator;
pub mod templates;

pub use controller::{PanelState, PanelStatus, StreamController};
pub use generator::{BatchPlan, QuoteGenerator};
pub use templates::TemplatePool;

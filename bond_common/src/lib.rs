//!
//! Common types and utilities shared by the panel engine and its frontends.
//!
//! This crate aggregates:
//! - `error` — unified error type `PanelError` used across the workspace.
//! - `result` — handy `Result<T, PanelError>` alias.
//! - `record` — the flat `QuoteRecord` snapshot type and scalar `FieldValue`.
//! - `instrument` — bond type / exchange / settlement enumerations.
//! - `columns` — ordered column schema consumed by grid displays.
//! - `display` — the grid display capability trait and interaction events.
#![warn(missing_docs)]
pub mod columns;
pub mod display;
pub mod error;
pub mod instrument;
pub mod record;
pub mod result;

pub use error::PanelError;
pub use record::{FieldValue, QuoteRecord};
pub use result::Result;

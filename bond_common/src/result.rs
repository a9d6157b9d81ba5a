//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `PanelError`, so functions can simply return `Result<T>`.
use crate::error::PanelError;

/// Workspace-wide `Result` alias with `PanelError` as the default error.
pub type Result<T, E = PanelError> = std::result::Result<T, E>;

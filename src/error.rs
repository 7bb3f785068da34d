//! Error types for the inspector.
//!
//! The inspector core is total: classification, discovery, flattening,
//! and width/visibility toggles cannot fail. The fallible surface is
//! the terminal lifecycle around the demo binary, covered here.

use thiserror::Error;

/// Errors from terminal setup and teardown.
#[derive(Debug, Error)]
pub enum InspectorError {
    #[error("terminal initialization failed: {0}")]
    TerminalInit(#[source] std::io::Error),

    #[error("terminal restore failed: {0}")]
    TerminalRestore(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InspectorError>;

//! Error types for the marks overlay.

use thiserror::Error;

/// Failures reported by a [`Surface`](super::surface::Surface).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// A floating window is already open on this surface.
    #[error("overlay window is already open")]
    WindowAlreadyOpen,
    /// The operation needs an open window and there is none.
    #[error("no overlay window is open")]
    NoWindow,
    /// The host refused the operation.
    #[error("host refused window operation: {0}")]
    Host(String),
}

/// Failures of overlay controller operations.
///
/// None of these are fatal to the host; the worst case is a missing overlay.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverlayError {
    /// The host surface rejected a window operation.
    #[error("surface error: {0}")]
    Surface(#[from] SurfaceError),
}

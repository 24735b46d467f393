//! Error types for pixel_life.

use thiserror::Error;

/// Errors raised by grid construction and direct cell access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height was zero, or the cell count does not fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A cell outside the grid was addressed.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Anything that can stop the application from starting or running.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixels error: {0}")]
    Pixels(#[from] pixels::Error),
}

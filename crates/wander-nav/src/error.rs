//! Navigation-subsystem error type.

use thiserror::Error;

/// Errors produced while building navigation structures.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("grid must have at least one cell, got {width}x{depth}")]
    EmptyGrid { width: u32, depth: u32 },

    #[error("cell size must be positive and finite, got {0}")]
    BadCellSize(f32),

    #[error("cell ({x}, {z}) is outside the {width}x{depth} grid")]
    CellOutOfRange { x: u32, z: u32, width: u32, depth: u32 },
}

pub type NavResult<T> = Result<T, NavError>;

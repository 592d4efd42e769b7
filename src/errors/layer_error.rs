//! Layer-related error types.

use std::fmt;

use thiserror::Error;

/// Which index of an accessor was out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexAxis {
    /// Position of a neuron within its layer.
    Neuron,
    /// Position of a weight within a neuron.
    Weight,
}

impl fmt::Display for IndexAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexAxis::Neuron => f.write_str("neuron"),
            IndexAxis::Weight => f.write_str("weight"),
        }
    }
}

/// Errors that can occur during layer and neuron operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayerError {
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Invalid {axis} index {index} (length {len})")]
    IndexOutOfRange {
        axis: IndexAxis,
        index: usize,
        len: usize,
    },
}

impl LayerError {
    pub(crate) fn neuron_index(index: usize, len: usize) -> Self {
        LayerError::IndexOutOfRange {
            axis: IndexAxis::Neuron,
            index,
            len,
        }
    }

    pub(crate) fn weight_index(index: usize, len: usize) -> Self {
        LayerError::IndexOutOfRange {
            axis: IndexAxis::Weight,
            index,
            len,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LayerError>;

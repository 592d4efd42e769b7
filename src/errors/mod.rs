//! Error types for layer operations.

mod layer_error;

pub use layer_error::{IndexAxis, LayerError, Result};

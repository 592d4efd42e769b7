//! # feedforward-layer
//!
//! A single fully connected neural network layer with the per-neuron state an
//! external training loop needs for backpropagation.
//!
//! Each [`Neuron`] holds its weights, bias, last output and an error term
//! (`delta`). A [`Layer`] owns a fixed number of neurons sharing one input
//! width and evaluates them in order on every forward pass. Composing layers,
//! computing losses and updating weights are left to the caller, which drives
//! them through the layer's bounds-checked accessors.
//!
//! ## Features
//!
//! - **Four activations**: Sigmoid, ReLU, Tanh and Leaky ReLU, each with a
//!   derivative computed from the neuron's cached output.
//! - **Checked access**: size and index violations are reported as
//!   [`LayerError`] values instead of silent defaults.
//! - **Reproducible init**: weights can be drawn from a seeded RNG.
//!
//! ## Example
//!
//! ```
//! use feedforward::prelude::*;
//!
//! let mut layer = LayerConfig::new(2, 2)
//!     .with_activation(Activation::Sigmoid)
//!     .with_seed(7)
//!     .init();
//!
//! layer.set_neuron_weight(0, 0, 0.5).unwrap();
//! layer.set_neuron_weight(0, 1, -0.5).unwrap();
//! layer.set_neuron_bias(0, 0.0).unwrap();
//!
//! let outputs = layer.forward(&[1.0, 1.0]).unwrap();
//! assert_eq!(outputs.len(), 2);
//! assert!((outputs[0] - 0.5).abs() < 1e-12);
//!
//! // A short input is rejected and the cached outputs are kept.
//! assert!(layer.forward(&[1.0]).is_err());
//! assert_eq!(layer.outputs(), outputs);
//! ```

pub mod errors;
pub mod layers;

// Re-exports for convenience
pub use errors::{IndexAxis, LayerError, Result};
pub use layers::activation::Activation;
pub use layers::layer::{Layer, LayerConfig};
pub use layers::neuron::Neuron;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::errors::{LayerError, Result};
    pub use crate::layers::activation::Activation;
    pub use crate::layers::layer::{Layer, LayerConfig};
    pub use crate::layers::neuron::Neuron;
}

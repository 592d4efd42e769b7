//! Neuron and layer implementations.
//!
//! This module contains the building blocks of a single feedforward layer:
//! the activation functions, the individual neuron, and the layer that owns
//! a fixed set of neurons.

pub mod activation;
pub mod layer;
pub mod neuron;

pub use activation::{Activation, LEAKY_RELU_SLOPE};
pub use layer::{Layer, LayerConfig};
pub use neuron::Neuron;

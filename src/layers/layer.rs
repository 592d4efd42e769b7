//! Fully connected layer of independent neurons.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::errors::{LayerError, Result};
use crate::layers::{Activation, Neuron};

/// Configuration for a Layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Number of neurons in the layer.
    pub neuron_count: usize,
    /// Number of inputs each neuron receives.
    pub input_width: usize,
    /// Activation shared by every neuron at construction.
    #[serde(default)]
    pub activation: Activation,
    /// Seed for weight initialization. `None` uses the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl LayerConfig {
    /// Creates a new LayerConfig with the default activation and no seed.
    pub fn new(neuron_count: usize, input_width: usize) -> Self {
        Self {
            neuron_count,
            input_width,
            activation: Activation::default(),
            seed: None,
        }
    }

    /// Sets the activation function.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    /// Sets the initialization seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Constructs the layer without initializing its weights.
    pub fn build(&self) -> Layer {
        Layer::new(self.neuron_count, self.input_width, self.activation)
    }

    /// Constructs the layer and draws its initial weights.
    pub fn init(&self) -> Layer {
        let mut layer = self.build();
        match self.seed {
            Some(seed) => layer.init_with_rng(&mut StdRng::seed_from_u64(seed)),
            None => layer.init(),
        }
        layer
    }
}

/// An ordered, fixed-size collection of neurons sharing one input width.
///
/// The layer caches the outputs of its most recent forward pass. Training
/// routines read and write per-neuron state (weights, bias, delta,
/// activation) through the indexed accessors, all of which are
/// bounds-checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    input_width: usize,
    last_outputs: Vec<f64>,
}

impl Layer {
    /// Creates `neuron_count` uninitialized neurons using `activation`.
    pub fn new(neuron_count: usize, input_width: usize, activation: Activation) -> Self {
        Self {
            neurons: (0..neuron_count).map(|_| Neuron::new(activation)).collect(),
            input_width,
            last_outputs: vec![0.0; neuron_count],
        }
    }

    /// Gives every neuron random starting weights.
    pub fn init(&mut self) {
        self.init_with_rng(&mut rand::thread_rng());
    }

    /// Same as [`Layer::init`] with a caller-supplied random source.
    pub fn init_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        log::debug!(
            "Initializing layer: {} neurons x {} inputs, activation {}",
            self.neurons.len(),
            self.input_width,
            self.neurons
                .first()
                .map_or(Activation::default(), Neuron::activation)
        );
        for neuron in &mut self.neurons {
            neuron.init_with_rng(self.input_width, rng);
        }
    }

    /// Runs `inputs` through every neuron in order and returns the outputs.
    ///
    /// Fails with [`LayerError::ShapeMismatch`] if `inputs` does not match the
    /// layer's input width, or if any neuron's weights do not (for example
    /// because the layer was never initialized). Nothing is evaluated and
    /// the cached outputs are unchanged in either case.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        if inputs.len() != self.input_width {
            log::debug!(
                "Rejecting forward pass: expected {} inputs, got {}",
                self.input_width,
                inputs.len()
            );
            return Err(LayerError::ShapeMismatch {
                expected: self.input_width,
                actual: inputs.len(),
            });
        }
        if let Some(neuron) = self
            .neurons
            .iter()
            .find(|n| n.input_width() != self.input_width)
        {
            return Err(LayerError::ShapeMismatch {
                expected: self.input_width,
                actual: neuron.input_width(),
            });
        }

        log::trace!("Forward pass through {} neurons", self.neurons.len());
        for (neuron, slot) in self.neurons.iter_mut().zip(&mut self.last_outputs) {
            *slot = neuron.forward(inputs)?;
        }
        Ok(self.last_outputs.clone())
    }

    /// Returns the outputs of the last forward pass (zeros before the first).
    pub fn outputs(&self) -> Vec<f64> {
        self.last_outputs.clone()
    }

    /// Returns the number of neurons in this layer.
    pub fn neuron_count(&self) -> usize {
        self.neurons.len()
    }

    /// Returns the number of inputs each neuron takes.
    pub fn input_width(&self) -> usize {
        self.input_width
    }

    /// Total number of weights and biases, saturating at `usize::MAX`.
    pub fn num_parameters(&self) -> usize {
        self.neurons
            .len()
            .saturating_mul(self.input_width.saturating_add(1))
    }

    /// Returns all neurons in order.
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    /// Returns the neuron at `index`.
    pub fn neuron(&self, index: usize) -> Result<&Neuron> {
        self.neurons
            .get(index)
            .ok_or_else(|| LayerError::neuron_index(index, self.neurons.len()))
    }

    // Kept private: a `&mut Neuron` could resize the weight vector.
    fn neuron_mut(&mut self, index: usize) -> Result<&mut Neuron> {
        let len = self.neurons.len();
        self.neurons
            .get_mut(index)
            .ok_or_else(|| LayerError::neuron_index(index, len))
    }

    /// Returns one weight of one neuron.
    pub fn neuron_weight(&self, neuron_idx: usize, weight_idx: usize) -> Result<f64> {
        self.check_weight_index(weight_idx)?;
        self.neuron(neuron_idx)?.weight(weight_idx)
    }

    /// Changes one weight of one neuron.
    pub fn set_neuron_weight(
        &mut self,
        neuron_idx: usize,
        weight_idx: usize,
        value: f64,
    ) -> Result<()> {
        self.check_weight_index(weight_idx)?;
        self.neuron_mut(neuron_idx)?.set_weight(weight_idx, value)
    }

    /// Replaces every weight of one neuron.
    ///
    /// `weights` must have exactly `input_width` entries; otherwise this fails
    /// with [`LayerError::ShapeMismatch`] and the neuron is left untouched.
    pub fn set_neuron_weights(&mut self, neuron_idx: usize, weights: Vec<f64>) -> Result<()> {
        if weights.len() != self.input_width {
            return Err(LayerError::ShapeMismatch {
                expected: self.input_width,
                actual: weights.len(),
            });
        }
        self.neuron_mut(neuron_idx)?.set_weights(weights);
        Ok(())
    }

    /// Returns the bias of one neuron.
    pub fn neuron_bias(&self, neuron_idx: usize) -> Result<f64> {
        Ok(self.neuron(neuron_idx)?.bias())
    }

    /// Changes the bias of one neuron.
    pub fn set_neuron_bias(&mut self, neuron_idx: usize, value: f64) -> Result<()> {
        self.neuron_mut(neuron_idx)?.set_bias(value);
        Ok(())
    }

    /// Returns what one neuron output on the last forward pass.
    pub fn neuron_output(&self, neuron_idx: usize) -> Result<f64> {
        Ok(self.neuron(neuron_idx)?.output())
    }

    /// Error term for backpropagation, as last written by the caller.
    pub fn neuron_delta(&self, neuron_idx: usize) -> Result<f64> {
        Ok(self.neuron(neuron_idx)?.delta())
    }

    /// Stores the error term of one neuron.
    pub fn set_neuron_delta(&mut self, neuron_idx: usize, value: f64) -> Result<()> {
        self.neuron_mut(neuron_idx)?.set_delta(value);
        Ok(())
    }

    /// Returns the activation of one neuron.
    pub fn neuron_activation(&self, neuron_idx: usize) -> Result<Activation> {
        Ok(self.neuron(neuron_idx)?.activation())
    }

    /// Changes the activation of one neuron only.
    pub fn set_neuron_activation(
        &mut self,
        neuron_idx: usize,
        activation: Activation,
    ) -> Result<()> {
        self.neuron_mut(neuron_idx)?.set_activation(activation);
        Ok(())
    }

    /// Changes the activation of every neuron in the layer.
    pub fn set_activation(&mut self, activation: Activation) {
        for neuron in &mut self.neurons {
            neuron.set_activation(activation);
        }
    }

    /// Activation derivative of each neuron at its cached output.
    pub fn activation_derivatives(&self) -> Vec<f64> {
        self.neurons
            .iter()
            .map(Neuron::activation_derivative)
            .collect()
    }

    /// Error term of each neuron, in order.
    pub fn deltas(&self) -> Vec<f64> {
        self.neurons.iter().map(Neuron::delta).collect()
    }

    fn check_weight_index(&self, weight_idx: usize) -> Result<()> {
        if weight_idx < self.input_width {
            Ok(())
        } else {
            Err(LayerError::weight_index(weight_idx, self.input_width))
        }
    }
}

//! A single neuron: weights, bias, and the state kept for backpropagation.

use rand::Rng;

use crate::errors::{LayerError, Result};
use crate::layers::Activation;

/// One weighted-sum-plus-bias unit followed by an activation function.
///
/// `output` holds the result of the most recent [`Neuron::forward`] call and
/// is `0.0` before the first one. `delta` is an error-signal slot owned by the
/// caller's training routine; the neuron itself never writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
    bias: f64,
    output: f64,
    delta: f64,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with no weights. Call [`Neuron::init`] before use.
    pub fn new(activation: Activation) -> Self {
        Self {
            weights: Vec::new(),
            bias: 0.0,
            output: 0.0,
            delta: 0.0,
            activation,
        }
    }

    /// Draws `input_width` weights and the bias uniformly from [-1, 1],
    /// discarding any previous parameters.
    pub fn init(&mut self, input_width: usize) {
        self.init_with_rng(input_width, &mut rand::thread_rng());
    }

    /// Same as [`Neuron::init`] with a caller-supplied random source.
    pub fn init_with_rng<R: Rng + ?Sized>(&mut self, input_width: usize, rng: &mut R) {
        self.weights = (0..input_width)
            .map(|_| rng.gen_range(-1.0..=1.0))
            .collect();
        self.bias = rng.gen_range(-1.0..=1.0);
    }

    /// Computes `activation(bias + Σ inputs[i] * weights[i])`, caches it as
    /// the neuron's output and returns it.
    ///
    /// Fails with [`LayerError::ShapeMismatch`] when `inputs` and the weight
    /// vector differ in length; the cached output is left untouched.
    pub fn forward(&mut self, inputs: &[f64]) -> Result<f64> {
        if inputs.len() != self.weights.len() {
            return Err(LayerError::ShapeMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }

        let sum = inputs
            .iter()
            .zip(&self.weights)
            .fold(self.bias, |acc, (x, w)| acc + x * w);

        self.output = self.activation.apply(sum);
        Ok(self.output)
    }

    /// Derivative of the activation at the cached output.
    ///
    /// Only meaningful after [`Neuron::forward`] has run with the current
    /// activation.
    pub fn activation_derivative(&self) -> f64 {
        self.activation.derivative(self.output)
    }

    /// Number of inputs this neuron currently accepts.
    pub fn input_width(&self) -> usize {
        self.weights.len()
    }

    /// Returns the weight vector.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Replaces the whole weight vector; this also changes the input width.
    pub fn set_weights(&mut self, weights: Vec<f64>) {
        self.weights = weights;
    }

    /// Returns the weight applied to input `index`.
    pub fn weight(&self, index: usize) -> Result<f64> {
        self.weights
            .get(index)
            .copied()
            .ok_or_else(|| LayerError::weight_index(index, self.weights.len()))
    }

    /// Changes the weight applied to input `index`.
    pub fn set_weight(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.weights.len();
        let slot = self
            .weights
            .get_mut(index)
            .ok_or_else(|| LayerError::weight_index(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Returns the bias.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Sets the bias.
    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    /// Returns the output of the last forward pass.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// Returns the error term for backpropagation.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Sets the error term for backpropagation.
    pub fn set_delta(&mut self, delta: f64) {
        self.delta = delta;
    }

    /// Returns the activation function.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Sets the activation function.
    pub fn set_activation(&mut self, activation: Activation) {
        self.activation = activation;
    }
}

impl Default for Neuron {
    fn default() -> Self {
        Self::new(Activation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const TOLERANCE: f64 = 1e-12;

    fn neuron_with(weights: Vec<f64>, bias: f64, activation: Activation) -> Neuron {
        let mut neuron = Neuron::new(activation);
        neuron.set_weights(weights);
        neuron.set_bias(bias);
        neuron
    }

    #[test]
    fn test_new_neuron_is_empty() {
        let neuron = Neuron::new(Activation::Tanh);
        assert_eq!(neuron.input_width(), 0);
        assert_eq!(neuron.bias(), 0.0);
        assert_eq!(neuron.output(), 0.0);
        assert_eq!(neuron.delta(), 0.0);
        assert_eq!(neuron.activation(), Activation::Tanh);
    }

    #[test]
    fn test_init_fills_weights_in_range() {
        let mut neuron = Neuron::default();
        let mut rng = StdRng::seed_from_u64(7);
        neuron.init_with_rng(16, &mut rng);

        assert_eq!(neuron.input_width(), 16);
        assert!(neuron.weights().iter().all(|w| (-1.0..=1.0).contains(w)));
        assert!((-1.0..=1.0).contains(&neuron.bias()));
    }

    #[test]
    fn test_reinit_overwrites_width() {
        let mut neuron = Neuron::default();
        neuron.init(5);
        neuron.init(2);
        assert_eq!(neuron.input_width(), 2);
    }

    #[test]
    fn test_seeded_init_is_reproducible() {
        let mut a = Neuron::default();
        let mut b = Neuron::default();
        a.init_with_rng(4, &mut StdRng::seed_from_u64(42));
        b.init_with_rng(4, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_forward_weighted_sum() {
        let mut neuron = neuron_with(vec![2.0, -1.0, 0.5], 0.25, Activation::Relu);
        let out = neuron.forward(&[1.0, 3.0, 4.0]).unwrap();
        // 0.25 + 2 - 3 + 2 = 1.25
        assert!((out - 1.25).abs() < TOLERANCE);
        assert_eq!(neuron.output(), out);
    }

    #[test]
    fn test_forward_shape_mismatch_keeps_output() {
        let mut neuron = neuron_with(vec![1.0, 1.0], 0.0, Activation::Sigmoid);
        let first = neuron.forward(&[0.0, 0.0]).unwrap();

        let err = neuron.forward(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            LayerError::ShapeMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(neuron.output(), first);
    }

    #[test]
    fn test_forward_before_init_rejects_inputs() {
        let mut neuron = Neuron::default();
        assert!(neuron.forward(&[1.0]).is_err());
        // an empty neuron with empty input reduces to activation(bias)
        assert!((neuron.forward(&[]).unwrap() - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn test_forward_is_deterministic() {
        let mut neuron = Neuron::new(Activation::Tanh);
        neuron.init_with_rng(8, &mut StdRng::seed_from_u64(3));
        let inputs = [0.3, -1.2, 0.7, 2.0, -0.1, 0.0, 1.1, -0.4];

        let first = neuron.forward(&inputs).unwrap();
        let second = neuron.forward(&inputs).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_derivative_uses_output() {
        let mut neuron = neuron_with(vec![1.0], 0.0, Activation::Sigmoid);
        neuron.forward(&[0.0]).unwrap();
        assert!((neuron.activation_derivative() - 0.25).abs() < TOLERANCE);

        neuron.set_activation(Activation::LeakyRelu);
        neuron.forward(&[-5.0]).unwrap();
        assert!((neuron.output() - (-0.05)).abs() < TOLERANCE);
        assert_eq!(neuron.activation_derivative(), 0.01);
    }

    #[test]
    fn test_weight_accessors() {
        let mut neuron = neuron_with(vec![0.1, 0.2], 0.0, Activation::Relu);
        assert_eq!(neuron.weight(1).unwrap(), 0.2);
        neuron.set_weight(0, -0.7).unwrap();
        assert_eq!(neuron.weights(), &[-0.7, 0.2]);

        assert_eq!(
            neuron.weight(2).unwrap_err(),
            LayerError::weight_index(2, 2)
        );
        assert!(neuron.set_weight(9, 1.0).is_err());
        assert_eq!(neuron.weights(), &[-0.7, 0.2]);
    }

    #[test]
    fn test_delta_is_only_set_explicitly() {
        let mut neuron = neuron_with(vec![1.0], 0.0, Activation::Relu);
        neuron.set_delta(0.3);
        neuron.forward(&[2.0]).unwrap();
        assert_eq!(neuron.delta(), 0.3);
    }
}

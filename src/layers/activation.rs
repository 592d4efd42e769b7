//! Activation functions for neurons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Slope applied to non-positive sums by [`Activation::LeakyRelu`].
pub const LEAKY_RELU_SLOPE: f64 = 0.01;

/// Supported activation functions.
///
/// Every variant has a closed-form derivative expressed in terms of the
/// activation's *output*, so a neuron only needs to keep its last output
/// around for the backward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Activation {
    /// Sigmoid: f(x) = 1 / (1 + exp(-x))
    #[default]
    Sigmoid,
    /// Rectified Linear Unit: f(x) = x for x > 0, else 0
    Relu,
    /// Hyperbolic tangent: f(x) = tanh(x)
    Tanh,
    /// Leaky ReLU: f(x) = x for x > 0, else 0.01 * x
    LeakyRelu,
}

impl Activation {
    /// All activations, in id order.
    pub const ALL: [Activation; 4] = [
        Activation::Sigmoid,
        Activation::Relu,
        Activation::Tanh,
        Activation::LeakyRelu,
    ];

    /// Applies the activation function to a pre-activation sum.
    pub fn apply(&self, sum: f64) -> f64 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-sum).exp()),
            Activation::Relu => {
                if sum > 0.0 {
                    sum
                } else {
                    0.0
                }
            }
            Activation::Tanh => sum.tanh(),
            Activation::LeakyRelu => {
                if sum > 0.0 {
                    sum
                } else {
                    LEAKY_RELU_SLOPE * sum
                }
            }
        }
    }

    /// Returns the derivative of the activation, evaluated from its output.
    ///
    /// `output` must be a value previously returned by [`Activation::apply`]
    /// for the same variant. An output of exactly zero takes the
    /// non-positive branch for `Relu` and `LeakyRelu`.
    pub fn derivative(&self, output: f64) -> f64 {
        match self {
            Activation::Sigmoid => output * (1.0 - output),
            Activation::Relu => {
                if output > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Tanh => 1.0 - output * output,
            Activation::LeakyRelu => {
                if output > 0.0 {
                    1.0
                } else {
                    LEAKY_RELU_SLOPE
                }
            }
        }
    }

    /// Returns the upper-case name, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Sigmoid => "SIGMOID",
            Activation::Relu => "RELU",
            Activation::Tanh => "TANH",
            Activation::LeakyRelu => "LEAKY_RELU",
        }
    }

    /// Creates an Activation from a name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "SIGMOID" => Some(Activation::Sigmoid),
            "RELU" => Some(Activation::Relu),
            "TANH" => Some(Activation::Tanh),
            "LEAKY_RELU" | "LEAKYRELU" => Some(Activation::LeakyRelu),
            _ => None,
        }
    }

    /// Converts activation to a numeric ID.
    pub fn to_id(&self) -> u8 {
        match self {
            Activation::Sigmoid => 0,
            Activation::Relu => 1,
            Activation::Tanh => 2,
            Activation::LeakyRelu => 3,
        }
    }

    /// Creates an Activation from a numeric ID.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

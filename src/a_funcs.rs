use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

#[enum_dispatch]
pub trait ActivFunc {
    fn evaluate(&self, x: f32) -> f32;
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct ReLU;
impl ActivFunc for ReLU {
    fn evaluate(&self, x: f32) -> f32 {
        f32::max(x, 0.)
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Logistic;
impl ActivFunc for Logistic {
    fn evaluate(&self, x: f32) -> f32 {
        1. / (1. + (-x).exp())
    }
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Identity;
impl ActivFunc for Identity {
    fn evaluate(&self, x: f32) -> f32 {
        x
    }
}

/// The complete activation taxonomy of the diagram. Hidden layers apply
/// whichever function the configuration names; output layers never apply one.
#[enum_dispatch(ActivFunc)]
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum Activation {
    ReLU(ReLU),
    Logistic(Logistic),
    Identity(Identity),
}

impl Activation {
    /// Resolves the activation named by the configuration form.
    /// Unknown or empty names fall back to Identity.
    pub fn from_name(name: &str) -> Self {
        match name {
            "relu" => ReLU.into(),
            "logistic" => Logistic.into(),
            _ => Identity.into(),
        }
    }
}

impl Default for Activation {
    fn default() -> Self {
        Identity.into()
    }
}

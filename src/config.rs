use crate::a_funcs::Activation;

use serde::Deserialize;

/// Configuration record handed over by the form the tool does not own.
/// Field names mirror the form's JSON so a frontend can pass its state
/// through [`from_json`](NetworkConfig::from_json) unchanged.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub input_count: usize,
    /// 1 or 2; anything else is treated as 1.
    pub hidden_layer_count: usize,
    pub hidden_layer1_nodes: usize,
    #[serde(default)]
    pub hidden_layer2_nodes: usize,
    pub output_count: usize,
    /// Name of the activation; unknown names mean identity.
    #[serde(default)]
    pub activation: String,
}

impl NetworkConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Hidden layer sizes in network order. The second hidden layer only
    /// exists when the form asked for exactly two.
    pub fn hidden_sizes(&self) -> Vec<usize> {
        if self.hidden_layer_count == 2 {
            vec![self.hidden_layer1_nodes, self.hidden_layer2_nodes]
        } else {
            vec![self.hidden_layer1_nodes]
        }
    }

    pub fn activation(&self) -> Activation {
        Activation::from_name(&self.activation)
    }
}

/// Lenient count parse for form fields: malformed or empty text is 0,
/// never an error.
pub fn parse_count(raw: &str) -> usize {
    raw.trim().parse().unwrap_or(0)
}

/// Lenient value parse for input node text: malformed or empty text is 0,
/// never an error.
pub fn parse_value(raw: &str) -> f32 {
    raw.trim().parse().unwrap_or(0.)
}

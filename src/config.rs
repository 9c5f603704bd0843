//! Generator configuration.
//!
//! ```
//! use dualgraph::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_json(r#"{ "edge_probability": 0.25, "seed": 42 }"#).unwrap();
//! assert_eq!(config.seed, Some(42));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::generate::BernoulliSource;
use rand::rngs::StdRng;

/// Settings for the random generators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Probability that any candidate edge is present.
    pub edge_probability: f64,
    /// Seed for reproducible graphs; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            edge_probability: 0.5,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates a JSON configuration; missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| GraphError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that `edge_probability` lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if (0.0..=1.0).contains(&self.edge_probability) {
            Ok(())
        } else {
            Err(GraphError::InvalidConfig(format!(
                "edge_probability must be within [0, 1], got {}",
                self.edge_probability
            )))
        }
    }

    /// Builds the random source described by this configuration.
    pub fn source(&self) -> Result<BernoulliSource<StdRng>> {
        self.validate()?;
        Ok(BernoulliSource::from_config(self))
    }
}

use crate::annotations::{ParseContext, Preamble};
use crate::error::{read_to_string, Result};

use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Boilerplate prefixes stripped from operation notes, tried in order.
    pub preambles: Vec<String>,
    /// Location reported in notices when a declaration file does not name one.
    pub context: Option<String>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn preamble(&self) -> Preamble {
        if self.preambles.is_empty() {
            Preamble::default()
        } else {
            Preamble::new(self.preambles.iter().cloned())
        }
    }

    pub fn context(&self) -> ParseContext {
        self.context
            .as_deref()
            .map(ParseContext::new)
            .unwrap_or_default()
    }
}

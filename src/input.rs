use crate::annotations::{Declaration, Diagnostics, Operation, OperationValues, ParseContext};
use crate::config::Config;
use crate::error::{read_to_string, Result};

use log::debug;
use serde::Deserialize;
use std::path::Path;

/// An operation declaration together with its nested child declarations,
/// as handed over by the discovery step.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OperationDeclaration {
    pub context: Option<String>,
    pub operation: OperationValues,
    pub children: Vec<Declaration>,
}

impl OperationDeclaration {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading declaration from {}", path.display());
        let yaml = read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Constructs the operation and attaches its children once.
    pub fn build(
        self,
        config: &Config,
        diagnostics: &dyn Diagnostics,
    ) -> (Operation, ParseContext) {
        let ctx = self
            .context
            .map(ParseContext::new)
            .unwrap_or_else(|| config.context());
        let mut operation = Operation::new(self.operation, &config.preamble());
        operation.set_nested_annotations(self.children, &ctx, diagnostics);
        (operation, ctx)
    }
}

use crate::annotations::{Annotation, Diagnostics, ParseContext};

use serde::{Deserialize, Serialize};

pub const PARAM_TYPES: &[&str] = &["path", "query", "body", "header", "form"];

/// A single input of an operation.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    #[serde(rename = "paramType")]
    pub param_type: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub format: String,
    pub required: Option<bool>,
    #[serde(rename = "allowMultiple")]
    pub allow_multiple: Option<bool>,
    #[serde(rename = "defaultValue")]
    pub default_value: String,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_: Vec<String>,
}

impl Parameter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Annotation for Parameter {
    const KIND: &'static str = "Parameter";

    fn validate(&self, ctx: &ParseContext, diagnostics: &dyn Diagnostics) -> bool {
        if self.name.is_empty() {
            diagnostics.notice(&format!(
                "A \"name\" is required for a {} in {ctx}",
                Self::KIND
            ));
            return false;
        }
        if !self.param_type.is_empty() && !PARAM_TYPES.contains(&self.param_type.as_str()) {
            diagnostics.notice(&format!(
                "Invalid paramType `{}` for {} `{}` in {ctx}, expected one of {}",
                self.param_type,
                Self::KIND,
                self.name,
                PARAM_TYPES.join(", ")
            ));
            return false;
        }
        true
    }
}

/// Groups several parameters declared together.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub parameters: Vec<Parameter>,
}

impl Annotation for Parameters {
    const KIND: &'static str = "Parameters";
}

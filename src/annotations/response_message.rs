use crate::annotations::Annotation;

use serde::{Deserialize, Serialize};

/// A documented response case of an operation.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseMessage {
    pub code: i64,
    pub message: String,
    #[serde(rename = "responseModel")]
    pub response_model: String,
}

impl ResponseMessage {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            ..Default::default()
        }
    }
}

impl Annotation for ResponseMessage {
    const KIND: &'static str = "ResponseMessage";
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseMessages {
    #[serde(rename = "responseMessages")]
    pub response_messages: Vec<ResponseMessage>,
}

impl Annotation for ResponseMessages {
    const KIND: &'static str = "ResponseMessages";
}

use crate::annotations::{Annotation, Parameter, Parameters, ResponseMessage, ResponseMessages};

use convert_case::{Case, Casing};
use serde::de;
use serde_yaml::Value;

/// A parsed child declaration handed to its enclosing record.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Parameter(Parameter),
    Parameters(Parameters),
    ResponseMessage(ResponseMessage),
    ResponseMessages(ResponseMessages),
    /// Any declaration kind the enclosing record has no slot for.
    Other { kind: String },
}

impl Declaration {
    pub fn kind(&self) -> &str {
        match self {
            Declaration::Parameter(_) => Parameter::KIND,
            Declaration::Parameters(_) => Parameters::KIND,
            Declaration::ResponseMessage(_) => ResponseMessage::KIND,
            Declaration::ResponseMessages(_) => ResponseMessages::KIND,
            Declaration::Other { kind } => kind.as_str(),
        }
    }

    pub fn other(kind: impl Into<String>) -> Self {
        Declaration::Other { kind: kind.into() }
    }
}

impl From<Parameter> for Declaration {
    fn from(p: Parameter) -> Self {
        Declaration::Parameter(p)
    }
}

impl From<Parameters> for Declaration {
    fn from(p: Parameters) -> Self {
        Declaration::Parameters(p)
    }
}

impl From<ResponseMessage> for Declaration {
    fn from(r: ResponseMessage) -> Self {
        Declaration::ResponseMessage(r)
    }
}

impl From<ResponseMessages> for Declaration {
    fn from(r: ResponseMessages) -> Self {
        Declaration::ResponseMessages(r)
    }
}

fn from_mapping<T, E>(map: serde_yaml::Mapping) -> Result<T, E>
where
    T: de::DeserializeOwned,
    E: de::Error,
{
    serde_yaml::from_value(Value::Mapping(map)).map_err(|e| E::custom(e.to_string()))
}

impl<'de> de::Deserialize<'de> for Declaration {
    fn deserialize<D>(deserializer: D) -> Result<Declaration, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let v: Value = de::Deserialize::deserialize(deserializer)?;

        match v {
            Value::Mapping(mut map) => {
                let kind = match map.remove(&Value::String("kind".into())) {
                    Some(Value::String(kind)) => kind.to_case(Case::UpperCamel),
                    Some(kind) => {
                        return Err(de::Error::custom(format!("invalid `kind` - {kind:?}")))
                    }
                    None => return Err(de::Error::custom("expected `kind` field for declaration")),
                };
                log::trace!("deserializing {kind} declaration");
                match kind.as_str() {
                    "Parameter" => from_mapping(map).map(Declaration::Parameter),
                    "Parameters" => from_mapping(map).map(Declaration::Parameters),
                    "ResponseMessage" => from_mapping(map).map(Declaration::ResponseMessage),
                    "ResponseMessages" => from_mapping(map).map(Declaration::ResponseMessages),
                    _ => Ok(Declaration::Other { kind }),
                }
            }
            v => Err(de::Error::custom(format!(
                "invalid object for declaration `{:?}`",
                v
            ))),
        }
    }
}

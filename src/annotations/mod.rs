pub mod context;
pub mod declaration;
pub mod operation;
pub mod parameter;
pub mod preamble;
pub mod response_message;

pub use context::{Diagnostics, LogDiagnostics, ParseContext};
pub use declaration::Declaration;
pub use operation::{Operation, OperationValues};
pub use parameter::{Parameter, Parameters};
pub use preamble::Preamble;
pub use response_message::{ResponseMessage, ResponseMessages};

use serde::Serialize;
use serde_json::Value;

/// A serialized annotation, keys in field declaration order.
pub type Document = serde_json::Map<String, Value>;

/// Behaviour shared by every annotation record.
pub trait Annotation: Serialize {
    /// Kind name used in notices.
    const KIND: &'static str;

    /// Field-by-field serialization, leaving out fields that hold their default.
    fn to_document(&self) -> Result<Document, serde_json::Error> {
        serialize_fields(self)
    }

    fn validate(&self, _ctx: &ParseContext, _diagnostics: &dyn Diagnostics) -> bool {
        true
    }
}

/// Serializes `value` into a document, dropping `null` and empty string fields
/// at every nesting level.
pub fn serialize_fields<T: Serialize + ?Sized>(value: &T) -> Result<Document, serde_json::Error> {
    let mut data = match serde_json::to_value(value)? {
        Value::Object(map) => map,
        other => {
            let mut map = Document::new();
            map.insert("value".into(), other);
            map
        }
    };
    prune_defaults(&mut data);
    Ok(data)
}

fn prune_defaults(data: &mut Document) {
    data.retain(|_, v| !is_default(v));
    data.values_mut().for_each(prune_nested);
}

fn prune_nested(value: &mut Value) {
    match value {
        Value::Object(map) => prune_defaults(map),
        Value::Array(items) => items.iter_mut().for_each(prune_nested),
        _ => {}
    }
}

fn is_default(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

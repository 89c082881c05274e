use crate::annotations::{
    serialize_fields, Annotation, Declaration, Diagnostics, Document, ParseContext, Parameter,
    Preamble, ResponseMessage,
};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Values an `Operation` is constructed from. Missing keys keep their default.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OperationValues {
    pub method: Option<String>,
    pub summary: Option<String>,
    pub nickname: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub notes: Option<String>,
    pub parameters: Option<Vec<Parameter>>,
    #[serde(rename = "responseMessages")]
    pub response_messages: Option<Vec<ResponseMessage>>,
}

/// One HTTP operation of an API description.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Operation {
    /// HTTP verb, one of GET, POST, PUT, DELETE.
    pub method: String,
    /// Short description, at most 60 characters.
    pub summary: String,
    /// Identifier used by client generators and the UI.
    pub nickname: String,
    /// Return type, empty for void.
    #[serde(rename = "type")]
    pub type_: String,
    pub parameters: Vec<Parameter>,
    #[serde(rename = "responseMessages")]
    pub response_messages: Vec<ResponseMessage>,
    pub notes: String,
}

impl From<OperationValues> for Operation {
    fn from(values: OperationValues) -> Self {
        Operation::new(values, &Preamble::default())
    }
}

impl Operation {
    pub fn new(values: OperationValues, preamble: &Preamble) -> Self {
        let mut operation = Operation {
            method: values.method.unwrap_or_default(),
            summary: values.summary.unwrap_or_default(),
            nickname: values.nickname.unwrap_or_default(),
            type_: values.type_.unwrap_or_default(),
            parameters: values.parameters.unwrap_or_default(),
            response_messages: values.response_messages.unwrap_or_default(),
            notes: values.notes.unwrap_or_default(),
        };
        operation.notes = preamble.strip(&operation.notes);
        debug!("created operation `{}`", operation.nickname);
        operation
    }

    /// Takes over the child declarations found inside this operation, flattening lists.
    pub fn set_nested_annotations(
        &mut self,
        annotations: impl IntoIterator<Item = Declaration>,
        ctx: &ParseContext,
        diagnostics: &dyn Diagnostics,
    ) {
        for annotation in annotations {
            trace!("nesting {} in {}", annotation.kind(), Self::KIND);
            match annotation {
                Declaration::Parameter(parameter) => self.parameters.push(parameter),
                Declaration::Parameters(list) => self.parameters.extend(list.parameters),
                Declaration::ResponseMessage(message) => self.response_messages.push(message),
                Declaration::ResponseMessages(list) => {
                    self.response_messages.extend(list.response_messages)
                }
                Declaration::Other { kind } => diagnostics.notice(&format!(
                    "Unexpected {kind} in a {} in {ctx}",
                    Self::KIND
                )),
            }
        }
    }
}

impl Annotation for Operation {
    const KIND: &'static str = "Operation";

    fn validate(&self, ctx: &ParseContext, diagnostics: &dyn Diagnostics) -> bool {
        if self.nickname.is_empty() {
            diagnostics.notice(&format!(
                "The optional field \"nickname\" is required for the swagger-ui client for an \"{}\" in {ctx}",
                Self::KIND
            ));
        }
        self.parameters
            .iter()
            .all(|parameter| parameter.validate(ctx, diagnostics))
    }

    fn to_document(&self) -> Result<Document, serde_json::Error> {
        let mut data = serialize_fields(self)?;
        if self.response_messages.is_empty() {
            data.remove("responseMessages");
        }
        if self.parameters.is_empty() {
            data.remove("parameters");
        }
        Ok(data)
    }
}

#[cfg(test)]
mod test {
    use super::{Operation, OperationValues};
    use crate::annotations::context::test_support::RecordingDiagnostics;
    use crate::annotations::{
        Annotation, Declaration, Parameter, Parameters, ParseContext, Preamble, ResponseMessage,
        ResponseMessages,
    };
    use serde_json::{json, Value};

    fn ctx() -> ParseContext {
        ParseContext::new("UserController.php:42")
    }

    fn named(nickname: &str) -> Operation {
        Operation::from(OperationValues {
            nickname: Some(nickname.into()),
            ..Default::default()
        })
    }

    #[test]
    fn create_assigns_fields_and_strips_notes_preamble() {
        let values: OperationValues = serde_yaml::from_str(
            r#"
method: GET
summary: Find user by id
nickname: getUserById
type: User
notes: "/** Returns a single user.\n  Second line kept as is. "
unknownKey: 1
"#,
        )
        .unwrap();
        let op = Operation::from(values);
        assert_eq!(op.method, "GET");
        assert_eq!(op.summary, "Find user by id");
        assert_eq!(op.nickname, "getUserById");
        assert_eq!(op.type_, "User");
        assert_eq!(op.notes, " Returns a single user.\n  Second line kept as is. ");
        assert!(op.parameters.is_empty());
        assert!(op.response_messages.is_empty());
    }

    #[test]
    fn create_with_missing_keys_uses_defaults() {
        let op = Operation::from(OperationValues::default());
        assert_eq!(op, Operation::default());
    }

    #[test]
    fn create_with_custom_preamble() {
        let values = OperationValues {
            notes: Some("@notes  body".into()),
            ..Default::default()
        };
        let op = Operation::new(values, &Preamble::new(["@notes"]));
        assert_eq!(op.notes, "  body");
    }

    #[test]
    fn nested_annotations_flatten_in_order() {
        let diagnostics = RecordingDiagnostics::default();
        let mut op = named("listUsers");
        op.set_nested_annotations(
            vec![
                Declaration::from(Parameter::named("a")),
                Declaration::from(ResponseMessage::new(400, "bad")),
                Declaration::from(Parameters {
                    parameters: vec![Parameter::named("b"), Parameter::named("c")],
                }),
                Declaration::from(ResponseMessages {
                    response_messages: vec![
                        ResponseMessage::new(404, "missing"),
                        ResponseMessage::new(500, "error"),
                    ],
                }),
                Declaration::from(Parameter::named("d")),
            ],
            &ctx(),
            &diagnostics,
        );

        let names: Vec<_> = op.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
        let codes: Vec<_> = op.response_messages.iter().map(|r| r.code).collect();
        assert_eq!(codes, [400, 404, 500]);
        assert!(diagnostics.messages().is_empty());
    }

    #[test]
    fn unexpected_declaration_is_noticed_and_skipped() {
        let diagnostics = RecordingDiagnostics::default();
        let mut op = named("listUsers");
        op.set_nested_annotations(
            vec![
                Declaration::other("Model"),
                Declaration::from(Parameter::named("a")),
            ],
            &ctx(),
            &diagnostics,
        );
        assert_eq!(op.parameters, vec![Parameter::named("a")]);
        assert_eq!(
            diagnostics.messages(),
            ["Unexpected Model in a Operation in UserController.php:42"]
        );
    }

    #[test]
    fn empty_nested_annotations_are_a_noop() {
        let diagnostics = RecordingDiagnostics::default();
        let mut op = named("listUsers");
        op.set_nested_annotations(
            vec![Declaration::from(Parameter::named("a"))],
            &ctx(),
            &diagnostics,
        );
        let before = op.clone();
        op.set_nested_annotations(Vec::new(), &ctx(), &diagnostics);
        assert_eq!(op, before);
    }

    #[test]
    fn validate_without_parameters_passes_even_without_nickname() {
        let diagnostics = RecordingDiagnostics::default();
        assert!(named("getUser").validate(&ctx(), &diagnostics));
        assert!(diagnostics.messages().is_empty());

        assert!(Operation::default().validate(&ctx(), &diagnostics));
        let messages = diagnostics.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("\"nickname\""));
        assert!(messages[0].contains("Operation"));
        assert!(messages[0].contains("UserController.php:42"));
    }

    #[test]
    fn validate_stops_at_first_invalid_parameter() {
        let diagnostics = RecordingDiagnostics::default();
        let mut op = named("getUser");
        op.parameters = vec![
            Parameter::named("id"),
            Parameter::default(),
            Parameter {
                param_type: "cookie".into(),
                ..Parameter::named("session")
            },
        ];
        assert!(!op.validate(&ctx(), &diagnostics));
        let messages = diagnostics.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("\"name\""));
    }

    #[test]
    fn document_omits_empty_collections() {
        let op = Operation::from(OperationValues {
            method: Some("GET".into()),
            nickname: Some("getUser".into()),
            parameters: Some(vec![]),
            response_messages: Some(vec![]),
            ..Default::default()
        });
        let doc = op.to_document().unwrap();
        assert!(!doc.contains_key("parameters"));
        assert!(!doc.contains_key("responseMessages"));
        assert_eq!(Value::Object(doc), json!({"method": "GET", "nickname": "getUser"}));
    }

    #[test]
    fn document_keeps_populated_collections_in_field_order() {
        let mut op = Operation::from(OperationValues {
            method: Some("GET".into()),
            summary: Some("Find user".into()),
            nickname: Some("getUser".into()),
            type_: Some("User".into()),
            notes: Some("Looks up a user.".into()),
            ..Default::default()
        });
        op.set_nested_annotations(
            vec![
                Declaration::from(Parameter {
                    param_type: "path".into(),
                    ..Parameter::named("id")
                }),
                Declaration::from(ResponseMessage::new(404, "User not found")),
            ],
            &ctx(),
            &RecordingDiagnostics::default(),
        );

        let doc = op.to_document().unwrap();
        let keys: Vec<_> = doc.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["method", "summary", "nickname", "type", "parameters", "responseMessages", "notes"]
        );
        assert_eq!(
            Value::Object(doc.clone()),
            json!({
                "method": "GET",
                "summary": "Find user",
                "nickname": "getUser",
                "type": "User",
                "parameters": [{"paramType": "path", "name": "id"}],
                "responseMessages": [{"code": 404, "message": "User not found"}],
                "notes": "Looks up a user."
            })
        );
        assert_eq!(op.to_document().unwrap(), doc);
    }
}

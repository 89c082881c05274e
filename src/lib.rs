pub mod annotations;
pub mod config;
pub mod error;
pub mod input;

pub use annotations::{
    Annotation, Declaration, Diagnostics, Document, LogDiagnostics, Operation, OperationValues,
    Parameter, Parameters, ParseContext, Preamble, ResponseMessage, ResponseMessages,
};
pub use config::Config;
pub use error::{Error, Result};
pub use input::OperationDeclaration;

use std::fmt;

/// Describes where in the source material the current declaration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext(String);

impl ParseContext {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn unknown() -> Self {
        Self("unknown location".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sink for advisory notices. A notice never changes control flow.
pub trait Diagnostics {
    fn notice(&self, message: &str);
}

/// Forwards notices to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn notice(&self, message: &str) {
        log::warn!(target: "swagger_annotations", "{message}");
    }
}

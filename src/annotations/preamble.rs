pub const DOC_COMMENT_OPENER: &str = "/**";
pub const DOC_COMMENT_LEADER: &str = "*";

/// Known fixed boilerplate prefixes left behind by comment stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preamble {
    prefixes: Vec<String>,
}

impl Default for Preamble {
    fn default() -> Self {
        Self::new([DOC_COMMENT_OPENER, DOC_COMMENT_LEADER])
    }
}

impl Preamble {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Removes the first matching prefix once, leaving the rest untouched.
    pub fn strip(&self, text: &str) -> String {
        self.prefixes
            .iter()
            .find_map(|prefix| text.strip_prefix(prefix.as_str()))
            .unwrap_or(text)
            .to_string()
    }
}

/// One element matched by a CSS selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    /// Visible text with surrounding whitespace trimmed
    pub text: String,

    /// Serialized outer markup of the element
    pub html: String,
}

impl ElementRecord {
    pub fn new(text: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            html: html.into(),
        }
    }
}

/// Separator used when tags are flattened into a single field
pub const TAG_SEPARATOR: &str = ", ";

/// One quote extracted from a paginated listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    /// The quote body, as it appears on the page
    pub text: String,

    /// The quote's author
    pub author: String,

    /// Tags in the order they were encountered
    pub tags: Vec<String>,
}

impl QuoteRecord {
    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }

    /// Returns the tags joined into one comma-separated string
    pub fn joined_tags(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }
}

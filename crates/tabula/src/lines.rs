//! Line builder: an ordered list of strings joined with a fixed separator.
//!
//! Writers assemble their output piece by piece through this instead of
//! concatenating strings, so each row, statement or markup line can be
//! checked on its own.

/// Indentation unit used by [`LineBuilder::indented`].
const INDENT: &str = "  ";

/// Ordered parts joined by a separator when built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuilder {
    separator: String,
    parts: Vec<String>,
}

impl LineBuilder {
    /// Create an empty builder with the given separator.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            parts: Vec::new(),
        }
    }

    /// Builder for newline-separated output.
    pub fn lines() -> Self {
        Self::new("\n")
    }

    /// Append a part.
    pub fn push(&mut self, part: impl Into<String>) -> &mut Self {
        self.parts.push(part.into());
        self
    }

    /// Append a part prefixed by `depth` indentation levels (two spaces each).
    pub fn indented(&mut self, depth: usize, part: impl AsRef<str>) -> &mut Self {
        self.parts
            .push(format!("{}{}", INDENT.repeat(depth), part.as_ref()));
        self
    }

    /// Consuming variant of [`push`](Self::push).
    pub fn with(mut self, part: impl Into<String>) -> Self {
        self.push(part);
        self
    }

    /// Join the parts with the separator. No trailing separator.
    pub fn build(&self) -> String {
        self.parts.join(&self.separator)
    }
}

impl<S: Into<String>> Extend<S> for LineBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.parts.extend(iter.into_iter().map(Into::into));
    }
}

//! Order-detail markup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One labeled value on the order details view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    /// Localized label, including its trailing colon.
    pub label: String,
    /// Stored value.
    pub value: String,
}

impl RenderedLine {
    /// Creates a line.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Renders the line as an HTML paragraph with label and value escaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<p><strong>{}</strong> {}</p>",
            ammonia::clean_text(&self.label),
            ammonia::clean_text(&self.value)
        )
    }
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.value)
    }
}

/// An ordered run of rendered lines appended to the order details view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupFragment {
    lines: Vec<RenderedLine>,
}

impl MarkupFragment {
    /// Creates an empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line.
    pub fn push(&mut self, line: RenderedLine) {
        self.lines.push(line);
    }

    /// Appends every line of `other`.
    pub fn append(&mut self, other: Self) {
        self.lines.extend(other.lines);
    }

    /// Returns the lines in order.
    #[must_use]
    pub fn lines(&self) -> &[RenderedLine] {
        &self.lines
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the fragment as HTML, one paragraph per line.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.lines.iter().map(RenderedLine::to_html).collect()
    }
}

impl fmt::Display for MarkupFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromIterator<RenderedLine> for MarkupFragment {
    fn from_iter<I: IntoIterator<Item = RenderedLine>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

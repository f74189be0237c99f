//! Styled node labels

use std::fmt;

use unicode_width::UnicodeWidthStr;

/// Semantic role of a title fragment; the terminal maps these to colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    Quantity,
    Tag,
    /// Alternatives are available (left/right cycles)
    Cyclable,
    /// Nothing to choose from
    Missing,
    Heading,
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

/// A label made of styled fragments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Title {
    spans: Vec<Span>,
}

impl Title {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().with(text, SpanStyle::Plain)
    }

    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        Self::new().with(text, style)
    }

    /// Append a fragment
    pub fn with(mut self, text: impl Into<String>, style: SpanStyle) -> Self {
        self.push(text, style);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, style: SpanStyle) {
        self.spans.push(Span {
            text: text.into(),
            style,
        });
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Display width in terminal columns
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.width()).sum()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

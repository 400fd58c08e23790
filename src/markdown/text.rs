//! Text element and centering

use crate::{Error, Result};

/// Plain text element, built up by appending fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    /// Create an empty text element.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment to this text element.
    pub fn add_text(&mut self, txt: &str) -> &mut Self {
        self.content.push_str(txt);
        self
    }

    /// Render the accumulated text.
    #[must_use]
    pub fn render(&self) -> String {
        self.content.clone()
    }
}

impl From<&str> for Text {
    fn from(txt: &str) -> Self {
        Self {
            content: txt.to_string(),
        }
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self { content }
    }
}

/// Center `txt` inside a field of `width` characters.
///
/// Left padding is `(width - len) / 2` (floor); the remainder goes on the
/// right, so any odd leftover space lands after the text.
///
/// # Errors
///
/// Returns `InvalidArgument` if `txt` is longer than `width`.
pub fn center_text(txt: &str, width: usize) -> Result<String> {
    let len = txt.chars().count();
    if len > width {
        return Err(Error::InvalidArgument(format!(
            "cannot center text of length {len} in width {width}"
        )));
    }

    let total = width - len;
    let left = total / 2;
    let right = total - left;
    Ok(format!(
        "{}{}{}",
        " ".repeat(left),
        txt,
        " ".repeat(right)
    ))
}

use serde::{Deserialize, Serialize};

/// An inbound chat message as handed over by the transport layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    pub body: String,
    /// Media caption, when the message carried one.
    #[serde(default)]
    pub caption: Option<String>,
}

impl RawMessage {
    #[must_use]
    pub fn new(body: impl Into<String>, caption: Option<String>) -> Self {
        Self {
            body: body.into(),
            caption,
        }
    }

    /// Returns the caption with surrounding whitespace removed, or `None`
    /// when it is absent or blank.
    #[must_use]
    pub fn caption_hint(&self) -> Option<&str> {
        self.caption
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Body and caption joined by a newline, body first.
    #[must_use]
    pub fn full_text(&self) -> String {
        match self.caption_hint() {
            Some(caption) => format!("{}\n{caption}", self.body),
            None => self.body.clone(),
        }
    }
}

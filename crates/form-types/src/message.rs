use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a validation message attached to a field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    #[default]
    Error,
    Warning,
    Good,
    Info,
}

impl MessageKind {
    /// Key used as the CSS modifier class on rendered messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Error => "error",
            MessageKind::Warning => "warning",
            MessageKind::Good => "good",
            MessageKind::Info => "info",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How message text is treated when rendered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageCast {
    /// Escaped before output.
    #[default]
    Text,
    /// Emitted as-is. The caller vouches for the markup.
    Html,
}

/// A validation message with its severity and cast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldMessage {
    pub text: String,
    #[serde(default)]
    pub kind: MessageKind,
    #[serde(default)]
    pub cast: MessageCast,
}

impl FieldMessage {
    pub fn new(text: impl Into<String>, kind: MessageKind, cast: MessageCast) -> Self {
        Self {
            text: text.into(),
            kind,
            cast,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Error, MessageCast::Text)
    }

    pub fn is_html(&self) -> bool {
        self.cast == MessageCast::Html
    }
}

/// Normalises a setter argument: empty text means "no message".
pub(crate) fn message_from_parts(
    text: String,
    kind: MessageKind,
    cast: MessageCast,
) -> Option<FieldMessage> {
    if text.is_empty() {
        None
    } else {
        Some(FieldMessage::new(text, kind, cast))
    }
}

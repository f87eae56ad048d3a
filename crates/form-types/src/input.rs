use serde::{Deserialize, Serialize};

use crate::message::{message_from_parts, FieldMessage, MessageCast, MessageKind};

/// The control a leaf field renders as.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Hidden,
    Textarea,
}

impl InputType {
    /// Value of the `type` attribute. Textareas have none.
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Number => "number",
            InputType::Hidden => "hidden",
            InputType::Textarea => "textarea",
        }
    }
}

/// A single named form control with its label and auxiliary text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct InputField {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub input_type: InputType,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<FieldMessage>,
}

impl InputField {
    pub fn new(name: impl Into<String>, title: impl Into<String>, input_type: InputType) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            input_type,
            ..Default::default()
        }
    }

    pub fn text(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, InputType::Text)
    }

    pub fn email(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, InputType::Email)
    }

    pub fn textarea(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(name, title, InputType::Textarea)
    }

    /// DOM id derived from the field name.
    pub fn id(&self) -> String {
        dom_id(&self.name)
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) -> &mut Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = non_empty(description.into());
        self
    }

    pub fn set_right_title(&mut self, right_title: impl Into<String>) -> &mut Self {
        self.right_title = non_empty(right_title.into());
        self
    }

    pub fn set_message(
        &mut self,
        text: impl Into<String>,
        kind: MessageKind,
        cast: MessageCast,
    ) -> &mut Self {
        self.message = message_from_parts(text.into(), kind, cast);
        self
    }

    pub fn clear_message(&mut self) -> &mut Self {
        self.message = None;
        self
    }

    pub fn message(&self) -> Option<&FieldMessage> {
        self.message.as_ref()
    }
}

/// Replace characters that are unsafe in an id attribute.
pub(crate) fn dom_id(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

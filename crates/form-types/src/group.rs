use serde::{Deserialize, Serialize};

use crate::details::DetailsField;
use crate::input::{non_empty, InputField};
use crate::message::{message_from_parts, FieldMessage, MessageCast, MessageKind};

/// Any field that can sit inside a group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum Field {
    Input(InputField),
    Details(Box<DetailsField>),
}

impl Field {
    pub fn name(&self) -> &str {
        match self {
            Field::Input(f) => &f.name,
            Field::Details(d) => d.name(),
        }
    }

    /// The field's own message. A nested group's children are not consulted.
    pub fn message(&self) -> Option<&FieldMessage> {
        match self {
            Field::Input(f) => f.message(),
            Field::Details(d) => d.message(),
        }
    }

    pub fn has_message(&self) -> bool {
        self.message().is_some_and(|m| !m.text.is_empty())
    }
}

impl From<InputField> for Field {
    fn from(field: InputField) -> Self {
        Field::Input(field)
    }
}

impl From<DetailsField> for Field {
    fn from(field: DetailsField) -> Self {
        Field::Details(Box::new(field))
    }
}

/// Ordered child storage plus the auxiliary text every field carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FieldGroup {
    pub name: String,
    #[serde(default)]
    pub children: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<FieldMessage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_classes: Vec<String>,
}

impl FieldGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_children<I, F>(name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        let mut group = Self::new(name);
        group.extend(children);
        group
    }

    pub fn push(&mut self, field: impl Into<Field>) -> &mut Self {
        self.children.push(field.into());
        self
    }

    pub fn extend<I, F>(&mut self, fields: I) -> &mut Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        self.children.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn children(&self) -> &[Field] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first lookup through nested groups.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        for child in &self.children {
            if child.name() == name {
                return Some(child);
            }
            if let Field::Details(details) = child {
                if let Some(found) = details.group().field_by_name(name) {
                    return Some(found);
                }
            }
        }
        None
    }

    pub fn field_by_name_mut(&mut self, name: &str) -> Option<&mut Field> {
        for child in self.children.iter_mut() {
            if child.name() == name {
                return Some(child);
            }
            if let Field::Details(details) = child {
                if let Some(found) = details.group_mut().field_by_name_mut(name) {
                    return Some(found);
                }
            }
        }
        None
    }

    /// Removes the first direct child with this name.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Field> {
        let index = self.children.iter().position(|f| f.name() == name)?;
        Some(self.children.remove(index))
    }

    /// Names of every field in the tree, in render order.
    pub fn names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child.name());
            if let Field::Details(details) = child {
                out.extend(details.group().names());
            }
        }
        out
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

    pub fn add_extra_class(&mut self, class: impl Into<String>) -> &mut Self {
        for class in class.into().split_whitespace() {
            if !self.extra_classes.iter().any(|c| c == class) {
                self.extra_classes.push(class.to_string());
            }
        }
        self
    }

    pub fn remove_extra_class(&mut self, class: &str) -> &mut Self {
        self.extra_classes.retain(|c| c != class);
        self
    }

    pub fn extra_class(&self) -> String {
        self.extra_classes.join(" ")
    }
}

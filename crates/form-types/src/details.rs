use serde::{Deserialize, Serialize};

use crate::config::DetailsConfig;
use crate::group::{Field, FieldGroup};
use crate::html::{HtmlFragment, SummaryContent};
use crate::message::{FieldMessage, MessageCast, MessageKind};

/// A group of fields rendered as a `<details>` disclosure element.
///
/// The summary is always visible; the children form the collapsible body.
/// The element opens on its own when the group receives a validation
/// message, or (with `open_when_child_message`) when any direct child
/// carries one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DetailsField {
    #[serde(flatten)]
    group: FieldGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    summary: Option<HtmlFragment>,
    #[serde(default)]
    is_open: bool,
    #[serde(default)]
    config: DetailsConfig,
}

impl DetailsField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            group: FieldGroup::new(name),
            ..Default::default()
        }
    }

    pub fn with_children<I, F>(name: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Self {
            group: FieldGroup::with_children(name, children),
            ..Default::default()
        }
    }

    pub fn with_config(mut self, config: DetailsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_config(&mut self, config: DetailsConfig) -> &mut Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &DetailsConfig {
        &self.config
    }

    /// Set the content shown in `<summary>`.
    ///
    /// Plain text is escaped and, with `auto_strong`, wrapped in `<strong>`.
    /// An [`HtmlFragment`] is kept as-is so headings and inline markup
    /// survive.
    pub fn set_summary(&mut self, summary: impl Into<SummaryContent>) -> &mut Self {
        let html = match summary.into() {
            SummaryContent::Html(html) => html,
            SummaryContent::Text(text) => {
                let escaped = HtmlFragment::from_text(&text);
                if self.config.auto_strong {
                    HtmlFragment::new(format!("<strong>{escaped}</strong>"))
                } else {
                    escaped
                }
            }
        };
        self.summary = Some(html);
        self
    }

    pub fn summary(&self) -> Option<&HtmlFragment> {
        self.summary.as_ref()
    }

    /// The title of a details field is its summary.
    pub fn set_title(&mut self, title: impl Into<SummaryContent>) -> &mut Self {
        self.set_summary(title)
    }

    pub fn title(&self) -> Option<&HtmlFragment> {
        self.summary()
    }

    /// Attach a validation message. A non-empty message opens the field;
    /// an empty one clears the message but never closes it.
    pub fn set_message(
        &mut self,
        text: impl Into<String>,
        kind: MessageKind,
        cast: MessageCast,
    ) -> &mut Self {
        let text = text.into();
        if !text.is_empty() {
            tracing::debug!(field = %self.name(), kind = %kind, "validation message opens details field");
            self.set_is_open(true);
        }
        self.group.set_message(text, kind, cast);
        self
    }

    pub fn clear_message(&mut self) -> &mut Self {
        self.group.clear_message();
        self
    }

    pub fn set_is_open(&mut self, is_open: bool) -> &mut Self {
        self.is_open = is_open;
        self
    }

    /// Effective open state: the stored flag, or a child carrying a message.
    ///
    /// Reading never changes the stored flag, so a field opened only by a
    /// child message closes again once that message is cleared.
    pub fn is_open(&self) -> bool {
        if self.is_open {
            return true;
        }
        self.config.open_when_child_message && self.first_child_with_message().is_some()
    }

    /// The stored flag alone, ignoring children.
    pub fn is_explicitly_open(&self) -> bool {
        self.is_open
    }

    /// First direct child, in insertion order, that has a message.
    pub fn first_child_with_message(&self) -> Option<&Field> {
        let found = self.group.children().iter().find(|f| f.has_message());
        if let Some(field) = found {
            tracing::trace!(field = %self.name(), child = %field.name(), "child message found");
        }
        found
    }

    pub fn name(&self) -> &str {
        &self.group.name
    }

    pub fn group(&self) -> &FieldGroup {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut FieldGroup {
        &mut self.group
    }

    pub fn children(&self) -> &[Field] {
        self.group.children()
    }

    pub fn push(&mut self, field: impl Into<Field>) -> &mut Self {
        self.group.push(field);
        self
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.group.field_by_name(name)
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.group.set_description(description);
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.group.description.as_deref()
    }

    pub fn set_right_title(&mut self, right_title: impl Into<String>) -> &mut Self {
        self.group.set_right_title(right_title);
        self
    }

    pub fn right_title(&self) -> Option<&str> {
        self.group.right_title.as_deref()
    }

    pub fn message(&self) -> Option<&FieldMessage> {
        self.group.message()
    }

    pub fn add_extra_class(&mut self, class: impl Into<String>) -> &mut Self {
        self.group.add_extra_class(class);
        self
    }

    pub fn extra_class(&self) -> String {
        self.group.extra_class()
    }
}

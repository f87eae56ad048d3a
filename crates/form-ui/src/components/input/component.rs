use dioxus::prelude::*;
use form_types::{InputField, InputType};

use crate::components::{FieldDescription, FieldMessageText, FieldRightTitle};

/// A labelled leaf field: `<input>`, or `<textarea>` for multi-line fields.
///
/// The holder carries the field's right title, description and validation
/// message beneath the control.
#[component]
pub fn InputFieldHolder(
    field: InputField,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let id = field.id();
    let is_textarea = field.input_type == InputType::Textarea;
    let is_hidden = field.input_type == InputType::Hidden;

    let control_class = if is_textarea { "textarea" } else { "input" };
    let base = vec![Attribute::new("class", control_class, None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let holder_class = match field.message() {
        Some(message) => format!("field input-wrapper has-message {}", message.kind.as_str()),
        None => "field input-wrapper".to_string(),
    };
    let message = field.message().cloned();
    let description = field.description.clone().unwrap_or_default();
    let right_title = field.right_title.clone().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "{holder_class}", id: "{id}_Holder",
            if !field.title.is_empty() && !is_hidden {
                label { class: "input-label", r#for: "{id}", "{field.title}" }
            }
            if is_textarea {
                textarea {
                    id: "{id}",
                    name: "{field.name}",
                    placeholder: "{field.placeholder}",
                    value: "{field.value}",
                    ..merged,
                }
            } else {
                input {
                    r#type: "{field.input_type.as_str()}",
                    id: "{id}",
                    name: "{field.name}",
                    value: "{field.value}",
                    placeholder: "{field.placeholder}",
                    ..merged,
                }
            }
            FieldRightTitle { text: right_title }
            {message.map(|message| rsx! { FieldMessageText { message: message } })}
            FieldDescription { text: description }
        }
    }
}

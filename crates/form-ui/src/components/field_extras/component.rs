use dioxus::prelude::*;
use form_types::FieldMessage;

/// Help text shown alongside a field. Renders nothing when empty.
///
/// `block` selects a `<p>` (used inside `<summary>`) over an inline `<span>`.
#[component]
pub fn FieldDescription(#[props(default)] text: String, #[props(default)] block: bool) -> Element {
    if text.is_empty() {
        return rsx! {};
    }
    if block {
        rsx! { p { class: "description", "{text}" } }
    } else {
        rsx! { span { class: "description", "{text}" } }
    }
}

/// Secondary label for a field. Renders nothing when empty.
#[component]
pub fn FieldRightTitle(#[props(default)] text: String, #[props(default)] block: bool) -> Element {
    if text.is_empty() {
        return rsx! {};
    }
    if block {
        rsx! { p { class: "right-title", "{text}" } }
    } else {
        rsx! { span { class: "right-title", "{text}" } }
    }
}

/// A validation message, classed by its kind.
///
/// Text-cast messages are escaped; HTML-cast messages are emitted raw.
#[component]
pub fn FieldMessageText(message: FieldMessage, #[props(default)] block: bool) -> Element {
    if message.text.is_empty() {
        return rsx! {};
    }
    let class = format!("message {}", message.kind.as_str());

    match (block, message.is_html()) {
        (true, true) => rsx! { p { class: "{class}", dangerous_inner_html: "{message.text}" } },
        (true, false) => rsx! { p { class: "{class}", "{message.text}" } },
        (false, true) => rsx! { span { class: "{class}", dangerous_inner_html: "{message.text}" } },
        (false, false) => rsx! { span { class: "{class}", "{message.text}" } },
    }
}

use dioxus::prelude::*;
use form_types::DetailsField;

use crate::components::{FieldDescription, FieldHolder, FieldMessageText, FieldRightTitle};

/// A `<details>` disclosure wrapping a group of form fields.
///
/// The summary shows the field's summary markup followed by its
/// description, right title and message, each as its own paragraph.
/// The `open` attribute tracks [`DetailsField::is_open`] at render time.
#[component]
pub fn DetailsFieldHolder(
    field: DetailsField,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let open = field.is_open();
    tracing::trace!(field = %field.name(), open, "rendering details field");

    let extra = field.extra_class();
    let class = if extra.is_empty() {
        "details-field".to_string()
    } else {
        format!("details-field {extra}")
    };
    let base = vec![Attribute::new("class", class, None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    let summary = field
        .summary()
        .map(|s| s.as_str().to_string())
        .unwrap_or_default();
    let description = field.description().unwrap_or_default().to_string();
    let right_title = field.right_title().unwrap_or_default().to_string();
    let message = field.message().cloned();
    let children = field.children().to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        details {
            "name": "{field.name()}",
            open: open.then_some(true),
            ..merged,
            summary { class: "details-summary",
                span { class: "details-summary-label", dangerous_inner_html: "{summary}" }
                FieldDescription { text: description, block: true }
                FieldRightTitle { text: right_title, block: true }
                {message.map(|message| rsx! { FieldMessageText { message: message, block: true } })}
            }
            div { class: "details-content",
                for (index, child) in children.into_iter().enumerate() {
                    FieldHolder { key: "{index}-{child.name()}", field: child }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_types::{DetailsConfig, Field, HtmlFragment, InputField, MessageCast, MessageKind};
    use pretty_assertions::assert_eq;

    fn render(field: DetailsField) -> String {
        dioxus_ssr::render_element(rsx! { DetailsFieldHolder { field: field } })
    }

    /// The opening tag of the first `<tag` element, up to its closing `>`.
    fn opening_tag<'a>(html: &'a str, tag: &str) -> &'a str {
        let start = html
            .find(&format!("<{tag}"))
            .unwrap_or_else(|| panic!("no <{tag}> in {html}"));
        let end = html[start..].find('>').expect("unterminated tag") + start;
        &html[start..=end]
    }

    /// Everything between the first `<tag ...>` and its `</tag>`.
    fn inner<'a>(html: &'a str, tag: &str) -> &'a str {
        let open = opening_tag(html, tag);
        let start = html.find(open).expect("tag present") + open.len();
        let end = html[start..]
            .find(&format!("</{tag}>"))
            .unwrap_or_else(|| panic!("no </{tag}> in {html}"))
            + start;
        &html[start..end]
    }

    /// Text content with tags stripped.
    fn text_content(html: &str) -> String {
        let mut out = String::new();
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
        out
    }

    fn has_open_attribute(html: &str) -> bool {
        opening_tag(html, "details").contains(" open")
    }

    fn person_details(name: &str) -> DetailsField {
        DetailsField::with_children(
            name,
            [
                InputField::text("Salutation", "Salutation"),
                InputField::text("FirstName", "First name"),
                InputField::text("Surname", "Surname"),
            ],
        )
    }

    #[test]
    fn open_field_has_open_attribute() {
        let mut field = DetailsField::new("testIsOpen");
        field.set_summary("Summary").set_is_open(true);
        assert!(field.is_open());

        let html = render(field);
        assert!(has_open_attribute(&html), "<details> has open attribute: {html}");
        assert!(opening_tag(&html, "details").contains(r#"name="testIsOpen""#));
    }

    #[test]
    fn closed_field_has_no_open_attribute() {
        let mut field = DetailsField::new("testIsNotOpen");
        field.set_summary("Summary").set_is_open(false);
        assert!(!field.is_open());

        let html = render(field);
        assert!(!has_open_attribute(&html), "<details> has no open attribute: {html}");
    }

    #[test]
    fn plain_summary_is_wrapped_in_strong() {
        let mut field = DetailsField::new("testSummary");
        field.set_summary("Summary text");

        let html = render(field);
        let summary = inner(&html, "summary");
        assert_eq!(inner(summary, "strong"), "Summary text");
    }

    #[test]
    fn plain_summary_without_auto_strong_has_no_strong() {
        let mut field = DetailsField::new("testSummary").with_config(DetailsConfig {
            auto_strong: false,
            ..Default::default()
        });
        field.set_summary("Summary text");

        let html = render(field);
        let summary = inner(&html, "summary");
        assert!(!summary.contains("<strong"));
        assert!(summary.contains("Summary text"));
    }

    #[test]
    fn html_summary_is_rendered_verbatim() {
        let mut field = DetailsField::new("testSummaryHTML");
        field.set_summary(HtmlFragment::new("<h4>HEADING_4</h4>"));

        let html = render(field);
        let summary = inner(&html, "summary");
        assert_eq!(inner(summary, "h4").trim(), "HEADING_4");
        assert!(!summary.contains("<strong"));
    }

    #[test]
    fn plain_summary_markup_is_escaped() {
        let mut field = DetailsField::new("testEscape");
        field.set_summary("<h4>not a heading</h4>");

        let html = render(field);
        let summary = inner(&html, "summary");
        assert!(!summary.contains("<h4>"));
        assert!(summary.contains("&lt;h4&gt;not a heading&lt;/h4&gt;"));
    }

    #[test]
    fn child_fields_render_one_input_each() {
        let mut field = person_details("testChildFields");
        field.set_summary("CHILD_FIELDS");
        assert_eq!(field.children().len(), 3);

        let html = render(field);
        let details = inner(&html, "details");
        assert_eq!(details.matches("<input").count(), 3, "Correct number of inputs");
        assert_eq!(text_content(inner(details, "summary")).trim(), "CHILD_FIELDS");
        for name in ["Salutation", "FirstName", "Surname"] {
            assert!(details.contains(&format!(r#"name="{name}""#)));
        }
    }

    #[test]
    fn extras_render_as_paragraphs_in_summary() {
        let mut field = person_details("testExtra");
        field
            .set_summary("CHILD_FIELDS")
            .set_description("DESCRIPTION")
            .set_right_title("RIGHT_TITLE")
            .set_message("MESSAGE", MessageKind::Error, MessageCast::Text);

        let html = render(field);
        assert!(has_open_attribute(&html), "details is open when message");

        let summary = inner(&html, "summary");
        assert_eq!(summary.matches("<p").count(), 3, "All extras present");
        for expected in ["DESCRIPTION", "RIGHT_TITLE", "MESSAGE"] {
            assert!(summary.contains(&format!(">{expected}</p>")), "{expected} in {summary}");
        }
        assert!(summary.contains(r#"class="message error""#));
    }

    #[test]
    fn child_message_opens_rendered_field() {
        let mut field = person_details("testChildMessage");
        if let Some(Field::Input(first_name)) = field.group_mut().field_by_name_mut("FirstName") {
            first_name.set_message("FIRSTNAME_MESSAGE", MessageKind::Error, MessageCast::Text);
        }
        field
            .set_summary("TEST_CHILD_FIELD_MESSAGE")
            .set_description("DESCRIPTION")
            .set_right_title("RIGHT_TITLE");

        let html = render(field);
        assert!(has_open_attribute(&html), "details is open when child has a message");
        assert!(inner(&html, "details").contains("FIRSTNAME_MESSAGE"));
    }

    #[test]
    fn child_message_ignored_when_disabled() {
        let mut field = person_details("testChildMessageDisabled").with_config(DetailsConfig {
            open_when_child_message: false,
            ..Default::default()
        });
        if let Some(Field::Input(first_name)) = field.group_mut().field_by_name_mut("FirstName") {
            first_name.set_message("FIRSTNAME_MESSAGE", MessageKind::Error, MessageCast::Text);
        }

        let html = render(field);
        assert!(!has_open_attribute(&html));
    }

    #[test]
    fn nested_details_render_inside_body() {
        let mut inner_field = DetailsField::with_children(
            "Address",
            [InputField::text("Street", "Street"), InputField::text("City", "City")],
        );
        inner_field.set_summary("Address");

        let mut outer = person_details("Person");
        outer.set_summary("Person").push(inner_field);

        let html = render(outer);
        assert_eq!(html.matches("<details").count(), 2);
        assert_eq!(html.matches("<input").count(), 5);
    }

    #[test]
    fn children_with_duplicate_names_all_render() {
        let field = DetailsField::with_children(
            "testDuplicateNames",
            [
                InputField::text("Phone", "Home phone"),
                InputField::text("Phone", "Work phone"),
            ],
        );

        let html = render(field);
        assert_eq!(html.matches("<input").count(), 2);
        assert!(html.contains(">Home phone</label>"));
        assert!(html.contains(">Work phone</label>"));
    }

    #[test]
    fn extra_classes_join_base_class() {
        let mut field = DetailsField::new("testClasses");
        field.add_extra_class("compact");

        let html = render(field);
        assert!(opening_tag(&html, "details").contains("details-field compact"));
    }
}

use dioxus::prelude::*;
use form_types::Field;

use crate::components::{DetailsFieldHolder, InputFieldHolder};

/// Renders any child field, recursing into nested details groups.
#[component]
pub fn FieldHolder(field: Field) -> Element {
    match field {
        Field::Input(input) => rsx! { InputFieldHolder { field: input } },
        Field::Details(details) => rsx! { DetailsFieldHolder { field: *details } },
    }
}

use dioxus::prelude::*;

/// The `#search` field; reports every edit.
#[component]
pub(crate) fn SearchBox(placeholder: String, on_search: EventHandler<String>) -> Element {
    rsx! {
        input {
            id: "search",
            class: "search",
            r#type: "search",
            autocomplete: "off",
            placeholder,
            oninput: move |evt: FormEvent| on_search.call(evt.value()),
        }
    }
}

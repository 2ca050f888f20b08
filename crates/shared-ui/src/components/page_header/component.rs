use dioxus::prelude::*;

/// Heading strip at the top of a page: the title to the left and, when
/// given, an action slot (buttons, links) pinned to the right edge.
#[component]
pub fn PageHeader(title: String, #[props(default)] actions: Option<Element>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            h1 { class: "page-title", "{title}" }
            if let Some(actions) = actions {
                div { class: "page-actions", {actions} }
            }
        }
    }
}

use dioxus::prelude::*;

/// Top navigation bar: brand on the left, links on the right.
#[component]
pub fn Navbar(brand: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "navbar",
            h1 { class: "navbar-brand", "{brand}" }
            div { class: "navbar-links", {children} }
        }
    }
}

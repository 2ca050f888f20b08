use dioxus::prelude::*;

/// Overlay modal. Renders nothing while closed; clicking the overlay or
/// the close button fires `on_close`.
#[component]
pub fn Modal(
    #[props(default = false)] open: bool,
    #[props(default)] on_close: EventHandler<()>,
    #[props(default)] title: String,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                // Keep clicks inside the dialog from closing it.
                onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h3 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "\u{00d7}"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

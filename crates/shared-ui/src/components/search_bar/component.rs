use dioxus::prelude::*;

/// Filter strip for list pages. The controls flow in a wrapping row;
/// with `show_clear` set a trailing button resets them through
/// `on_clear`.
#[component]
pub fn SearchBar(
    #[props(default = false)] show_clear: bool,
    #[props(default)] on_clear: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar", role: "search",
            {children}
            if show_clear {
                button {
                    r#type: "button",
                    class: "search-bar-clear",
                    onclick: move |_| on_clear.call(()),
                    "Limpiar filtros"
                }
            }
        }
    }
}

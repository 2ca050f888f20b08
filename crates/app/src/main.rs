use dioxus::prelude::*;

mod api;
mod format_helpers;
mod platform;
mod routes;
mod session;

use api::ApiClient;
use routes::Route;
use session::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Session first: the API client reads the token through it at the
    // start of every call.
    let session = use_context_provider(SessionState::new);
    use_context_provider(|| ApiClient::new(session));

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}

use crate::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    rsx! {
        div { class: "not-found",
            h2 { "Página no encontrada" }
            p { "No existe la ruta /{route.join(\"/\")}" }
            Link { to: Route::Expedientes {}, "Ir a expedientes" }
        }
    }
}

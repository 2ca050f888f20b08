pub mod expedientes;
pub mod login;
pub mod not_found;
pub mod perfil;
pub mod usuarios;

use crate::api::use_api;
use crate::format_helpers::fmt_fecha;
use crate::session::use_session;
use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{hoy_local, Alerta, EstadoAlerta};
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Modal, Navbar};

use expedientes::create::CrearExpediente;
use expedientes::detail::ExpedienteDetalle;
use expedientes::list::Expedientes;
use login::Login;
use not_found::NotFound;
use perfil::Perfil;
use usuarios::Usuarios;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/expedientes")]
    Expedientes {},
    #[route("/expedientes/nuevo")]
    CrearExpediente {},
    #[route("/expedientes/:id")]
    ExpedienteDetalle { id: i64 },
    #[route("/usuarios")]
    Usuarios {},
    #[route("/perfil")]
    Perfil {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to the login route when no session is
/// present, without issuing any authenticated call.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();

    if !session.is_authenticated() {
        navigator().push(Route::Login {});
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Redirigiendo al inicio de sesión..." }
            }
        };
    }

    rsx! { Outlet::<Route> {} }
}

/// Main layout: navbar, page outlet, and the deadline-alert modal.
#[component]
fn AppLayout() -> Element {
    let session = use_session();
    let saludo = session
        .usuario()
        .map(|u| format!("Hola, {}", shared_types::capitalizar_palabras(&u.nombre)));

    rsx! {
        Navbar { brand: "Sistema Judicial",
            Link { to: Route::Expedientes {}, "Expedientes" }
            Link { to: Route::Usuarios {}, "Usuarios" }
            Link { to: Route::Perfil {}, "Perfil" }
            if let Some(saludo) = saludo {
                span { class: "navbar-saludo", "{saludo}" }
            }
        }
        div { class: "container",
            Outlet::<Route> {}
        }
        AlertasModal {}
    }
}

/// Deadline-alert poller and modal.
///
/// Fires at most once per login session: the one-shot flag is armed by
/// the login page and consumed here, so plain navigation back into the
/// layout does not re-fetch.
#[component]
fn AlertasModal() -> Element {
    let session = use_session();
    let api = use_api();
    let mut alertas = use_signal(Vec::<Alerta>::new);
    let mut abierto = use_signal(|| false);

    use_future(move || {
        let api = api.clone();
        async move {
            if !session.take_just_logged_in() {
                return;
            }
            match api.listar_alertas().await {
                Ok(lista) if !lista.is_empty() => {
                    alertas.set(lista);
                    abierto.set(true);
                }
                Ok(_) => {}
                Err(err) if err.is_unauthorized() => {
                    // decodificar already destroyed the session
                    navigator().push(Route::Login {});
                }
                Err(err) => {
                    tracing::warn!("error cargando alertas: {err}");
                }
            }
        }
    });

    let hoy = hoy_local();
    let titulo = format!("🔔 {} Alertas de Eventos", alertas.read().len());

    rsx! {
        Modal {
            open: abierto(),
            on_close: move |_| abierto.set(false),
            title: titulo,
            p { class: "muted", "Eventos vencidos o por vencer en los próximos 3 días." }
            div { class: "alertas-list",
                for alerta in alertas() {
                    AlertaItem {
                        key: "{alerta.evento_id}",
                        alerta: alerta.clone(),
                        hoy,
                        on_ver: move |id: i64| {
                            abierto.set(false);
                            navigator().push(Route::ExpedienteDetalle { id });
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn AlertaItem(alerta: Alerta, hoy: NaiveDate, on_ver: EventHandler<i64>) -> Element {
    let vencida = alerta.clasificar(hoy) == EstadoAlerta::Vencida;
    let expediente_id = alerta.expediente_id;
    let fecha = fmt_fecha(Some(&alerta.fecha_evento));

    rsx! {
        div {
            class: if vencida { "alerta-item vencida" } else { "alerta-item por-vencer" },
            div { class: "alerta-info",
                strong { "{alerta.tipo_evento}" }
                span { " (Exp: {alerta.numero_expediente})" }
                p { "{alerta.descripcion_o_defecto()}" }
            }
            div { class: "alerta-fecha",
                if vencida {
                    Badge { variant: BadgeVariant::Destructive, "Venció" }
                } else {
                    Badge { variant: BadgeVariant::Warning, "Vence" }
                }
                span { " {fecha}" }
            }
            Button {
                variant: ButtonVariant::Light,
                onclick: move |_| on_ver.call(expediente_id),
                "Ver"
            }
        }
    }
}

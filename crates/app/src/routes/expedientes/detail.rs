use crate::api::use_api;
use crate::format_helpers::fmt_fecha;
use crate::routes::expedientes::archivos::ArchivosPanel;
use crate::routes::expedientes::list::estado_badge;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::Expediente;
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, PageHeader, Skeleton,
};

/// Detail page for one expediente.
///
/// The backend has no single-record endpoint, so the page loads the
/// unfiltered list and picks the record out by id.
#[component]
pub fn ExpedienteDetalle(id: i64) -> Element {
    let api = use_api();
    let data = use_resource(move || {
        let api = api.clone();
        async move { api.listar_expedientes(&Default::default()).await }
    });

    let vista: Option<Result<Option<Expediente>, String>> =
        data.read().as_ref().map(|r| match r {
            Ok(lista) => Ok(lista.iter().find(|e| e.id == id).cloned()),
            Err(err) => Err(err.to_string()),
        });

    rsx! {
        PageHeader {
            title: "Detalle del Expediente",
            actions: rsx! {
                Link { to: Route::Expedientes {}, "Volver" }
            },
        }

        match vista {
            None => rsx! {
                Skeleton {}
                Skeleton {}
            },
            Some(Ok(Some(exp))) => rsx! {
                ExpedienteInfo { expediente: exp }
                ArchivosPanel { expediente_id: id }
            },
            Some(Ok(None)) => rsx! {
                p { class: "empty-state", "No se encontró el expediente solicitado." }
            },
            Some(Err(err)) => rsx! {
                p { class: "error-state", "{err}" }
            },
        }
    }
}

#[component]
fn ExpedienteInfo(expediente: Expediente) -> Element {
    let api = use_api();
    let mut analizando = use_signal(|| false);
    let mut aviso = use_signal(|| Option::<(bool, String)>::None);

    let expediente_id = expediente.id;
    let handle_analizar = move |_| {
        let api = api.clone();
        spawn(async move {
            analizando.set(true);
            aviso.set(None);
            match api.analizar_expediente(expediente_id).await {
                Ok(()) => aviso.set(Some((
                    true,
                    "Análisis iniciado. El resultado estará disponible en unos minutos.".into(),
                ))),
                Err(err) => aviso.set(Some((false, err.to_string()))),
            }
            analizando.set(false);
        });
    };

    let creador = expediente
        .creado_por_nombre
        .clone()
        .or_else(|| expediente.creado_por.clone())
        .unwrap_or_else(|| "—".into());

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{expediente.numero_expediente}" }
                Badge { variant: estado_badge(&expediente.estado), "{expediente.estado}" }
            }
            CardContent {
                dl { class: "info-grid",
                    div {
                        dt { "Demandante" }
                        dd {
                            "{expediente.demandante}"
                            if let Some(doc) = &expediente.demandante_doc {
                                span { class: "muted", " (Doc: {doc})" }
                            }
                        }
                    }
                    div {
                        dt { "Demandado" }
                        dd {
                            "{expediente.demandado}"
                            if let Some(doc) = &expediente.demandado_doc {
                                span { class: "muted", " (Doc: {doc})" }
                            }
                        }
                    }
                    div {
                        dt { "Fecha de inicio" }
                        dd { "{fmt_fecha(expediente.fecha_inicio.as_deref())}" }
                    }
                    div {
                        dt { "Fecha de fin" }
                        dd { "{fmt_fecha(expediente.fecha_fin.as_deref())}" }
                    }
                    div {
                        dt { "Registrado por" }
                        dd { "{creador}" }
                    }
                }

                if let Some((exito, msg)) = aviso() {
                    div {
                        class: if exito { "form-aviso exito" } else { "form-aviso error" },
                        "{msg}"
                    }
                }

                if expediente.archivo.is_some() {
                    Button {
                        variant: ButtonVariant::Secondary,
                        disabled: analizando(),
                        onclick: handle_analizar,
                        if analizando() { "Analizando..." } else { "Analizar con IA" }
                    }
                }
            }
        }
    }
}

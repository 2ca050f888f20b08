use crate::api::use_api;
use crate::format_helpers::fmt_fecha;
use crate::platform;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{Expediente, ExpedienteFiltro, ESTADOS};
use shared_ui::{
    Badge, BadgeVariant, Button, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, FormSelect, Input, PageHeader, SearchBar, Skeleton,
};

/// Quiet period between the last filter edit and the fetch it schedules.
const DEBOUNCE_MS: u32 = 350;

/// Chains the quiet period and the request into one future, so whoever
/// drops it (a resource restart) cancels both: a fetch whose pause was
/// interrupted never runs, and its result can never land.
async fn buscar_con_pausa<T>(
    pausa: impl std::future::Future<Output = ()>,
    consulta: impl std::future::Future<Output = T>,
) -> T {
    pausa.await;
    consulta.await
}

pub(crate) fn estado_badge(estado: &str) -> BadgeVariant {
    match estado {
        "Abierto" => BadgeVariant::Primary,
        "En Proceso" => BadgeVariant::Warning,
        "Cerrado" => BadgeVariant::Secondary,
        _ => BadgeVariant::Secondary,
    }
}

/// Filtered expedientes list.
///
/// The debounce and the request live in one resource future: editing any
/// filter restarts the resource, which drops the previous future mid-
/// sleep or mid-request. Only the last edit's fetch can ever land, so a
/// slow response for a stale filter never overwrites fresher rows.
#[component]
pub fn Expedientes() -> Element {
    let api = use_api();
    let mut q = use_signal(String::new);
    let mut estado = use_signal(String::new);
    let mut desde = use_signal(String::new);
    let mut hasta = use_signal(String::new);

    // The very first load is not an edit, so it skips the quiet period.
    let primera_carga = use_hook(|| std::rc::Rc::new(std::cell::Cell::new(true)));

    let data = use_resource(move || {
        let api = api.clone();
        let filtro = ExpedienteFiltro {
            q: q(),
            estado: estado(),
            desde: desde(),
            hasta: hasta(),
        };
        let primera = primera_carga.replace(false);
        async move {
            if primera {
                api.listar_expedientes(&filtro).await
            } else {
                buscar_con_pausa(
                    platform::sleep_ms(DEBOUNCE_MS),
                    api.listar_expedientes(&filtro),
                )
                .await
            }
        }
    });

    let hay_filtros = !ExpedienteFiltro {
        q: q(),
        estado: estado(),
        desde: desde(),
        hasta: hasta(),
    }
    .esta_vacio();

    rsx! {
        PageHeader {
            title: "Expedientes",
            actions: rsx! {
                Button {
                    onclick: move |_| {
                        navigator().push(Route::CrearExpediente {});
                    },
                    "Nuevo Expediente"
                }
            },
        }

        SearchBar {
            show_clear: hay_filtros,
            on_clear: move |_| {
                q.set(String::new());
                estado.set(String::new());
                desde.set(String::new());
                hasta.set(String::new());
            },
            Input {
                placeholder: "Buscar por número, demandante o demandado...",
                value: q(),
                on_input: move |e: FormEvent| q.set(e.value()),
            }
            FormSelect {
                value: estado(),
                onchange: move |e: FormEvent| estado.set(e.value()),
                option { value: "", "Todos los estados" }
                for opcion in ESTADOS {
                    option { value: opcion, "{opcion}" }
                }
            }
            Input {
                input_type: "date",
                value: desde(),
                on_input: move |e: FormEvent| desde.set(e.value()),
            }
            Input {
                input_type: "date",
                value: hasta(),
                on_input: move |e: FormEvent| hasta.set(e.value()),
            }
        }

        match &*data.read() {
            None => rsx! {
                div { class: "list-loading",
                    Skeleton {}
                    Skeleton {}
                    Skeleton {}
                }
            },
            Some(Ok(lista)) if lista.is_empty() => rsx! {
                p { class: "empty-state",
                    if hay_filtros {
                        "No hay expedientes para los filtros aplicados."
                    } else {
                        "Aún no hay expedientes registrados."
                    }
                }
            },
            Some(Ok(lista)) => rsx! {
                TablaExpedientes { expedientes: lista.clone() }
            },
            Some(Err(err)) => rsx! {
                p { class: "error-state", "{err}" }
            },
        }
    }
}

#[component]
fn TablaExpedientes(expedientes: Vec<Expediente>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "N° Expediente" }
                DataTableColumn { "Demandante" }
                DataTableColumn { "Demandado" }
                DataTableColumn { "Estado" }
                DataTableColumn { "Inicio" }
                DataTableColumn { "Fin" }
                DataTableColumn { "" }
            }
            DataTableBody {
                for exp in expedientes {
                    DataTableRow {
                        key: "{exp.id}",
                        onclick: {
                            let id = exp.id;
                            move |_| {
                                navigator().push(Route::ExpedienteDetalle { id });
                            }
                        },
                        DataTableCell { "{exp.numero_expediente}" }
                        DataTableCell { "{exp.demandante}" }
                        DataTableCell { "{exp.demandado}" }
                        DataTableCell {
                            Badge { variant: estado_badge(&exp.estado), "{exp.estado}" }
                        }
                        DataTableCell { "{fmt_fecha(exp.fecha_inicio.as_deref())}" }
                        DataTableCell { "{fmt_fecha(exp.fecha_fin.as_deref())}" }
                        DataTableCell {
                            Link { to: Route::ExpedienteDetalle { id: exp.id }, "Ver" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::future::Future;
    use std::pin::pin;
    use std::rc::Rc;
    use std::task::{Context, Poll, Waker};

    #[test]
    fn futuro_descartado_en_plena_pausa_nunca_consulta() {
        let consultado = Rc::new(Cell::new(false));
        {
            let flag = consultado.clone();
            let mut fut = pin!(buscar_con_pausa(std::future::pending::<()>(), async move {
                flag.set(true);
            }));
            let mut cx = Context::from_waker(Waker::noop());
            assert!(matches!(fut.as_mut().poll(&mut cx), Poll::Pending));
            assert!(matches!(fut.as_mut().poll(&mut cx), Poll::Pending));
        }
        assert!(!consultado.get(), "la consulta corrió pese al descarte");
    }

    #[test]
    fn pausa_cumplida_deja_pasar_la_consulta() {
        let mut fut = pin!(buscar_con_pausa(async {}, async { 42 }));
        let mut cx = Context::from_waker(Waker::noop());
        assert_eq!(fut.as_mut().poll(&mut cx), Poll::Ready(42));
    }

    #[test]
    fn estados_conocidos_tienen_badge_propio() {
        assert_eq!(estado_badge("Abierto"), BadgeVariant::Primary);
        assert_eq!(estado_badge("En Proceso"), BadgeVariant::Warning);
        assert_eq!(estado_badge("Cerrado"), BadgeVariant::Secondary);
    }

    #[test]
    fn estado_desconocido_cae_en_secondary() {
        assert_eq!(estado_badge("Archivado"), BadgeVariant::Secondary);
    }
}

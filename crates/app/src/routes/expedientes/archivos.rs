use crate::api::use_api;
use crate::format_helpers::fmt_fecha_hora;
use crate::platform;
use dioxus::prelude::*;
use shared_types::{validar_lote_pdf, Archivo, ArchivoParaSubir, PDF_MIME};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Modal, Skeleton,
};

/// Attached-PDF panel for an expediente: listing, batch upload,
/// download, and delete-with-confirmation.
///
/// Deletions are applied locally only after the server confirms, by
/// collecting confirmed ids and filtering them out of the fetched list.
/// A refetch clears the set, since the server list no longer contains
/// those rows.
#[component]
pub fn ArchivosPanel(expediente_id: i64) -> Element {
    let api = use_api();
    let mut data = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.listar_archivos(expediente_id).await }
        }
    });

    let mut eliminados = use_signal(Vec::<i64>::new);
    let mut modal_subir = use_signal(|| false);
    let mut seleccionados = use_signal(Vec::<ArchivoParaSubir>::new);
    let mut subiendo = use_signal(|| false);
    let mut aviso = use_signal(|| Option::<(bool, String)>::None);
    // id y nombre del archivo pendiente de confirmación
    let mut confirmando = use_signal(|| Option::<(i64, String)>::None);

    let handle_files = move |evt: FormEvent| async move {
        let mut lote = Vec::new();
        for f in evt.files() {
            let nombre = f.name();
            let content_type = f.content_type().unwrap_or_else(|| {
                if nombre.to_ascii_lowercase().ends_with(".pdf") {
                    PDF_MIME.to_string()
                } else {
                    "application/octet-stream".to_string()
                }
            });
            match f.read_bytes().await {
                Ok(bytes) => lote.push(ArchivoParaSubir {
                    nombre,
                    content_type,
                    bytes: bytes.to_vec(),
                }),
                Err(err) => {
                    aviso.set(Some((false, format!("No se pudo leer \"{nombre}\": {err}"))));
                    seleccionados.set(Vec::new());
                    return;
                }
            }
        }
        seleccionados.set(lote);
    };

    let handle_subir = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                let lote = seleccionados();
                // Todo el lote se valida antes de emitir cualquier petición.
                if let Err(msg) = validar_lote_pdf(&lote) {
                    aviso.set(Some((false, msg)));
                    return;
                }

                subiendo.set(true);
                aviso.set(None);
                match api.subir_archivos(expediente_id, lote).await {
                    Ok(()) => {
                        modal_subir.set(false);
                        seleccionados.set(Vec::new());
                        eliminados.set(Vec::new());
                        aviso.set(Some((true, "Archivos subidos correctamente.".into())));
                        data.restart();
                    }
                    Err(err) => aviso.set(Some((false, err.to_string()))),
                }
                subiendo.set(false);
            });
        }
    };

    let handle_descargar = {
        let api = api.clone();
        move |archivo: Archivo| {
            let api = api.clone();
            async move {
                match api.descargar_archivo(archivo.id).await {
                    Ok(bytes) => {
                        if let Err(msg) =
                            platform::save_file(&archivo.nombre_original, PDF_MIME, &bytes)
                        {
                            aviso.set(Some((false, format!("No se pudo descargar: {msg}"))));
                        }
                    }
                    Err(err) => aviso.set(Some((false, err.to_string()))),
                }
            }
        }
    };

    let handle_eliminar = move |_| {
        let api = api.clone();
        spawn(async move {
            let Some((id, _)) = confirmando() else {
                return;
            };
            match api.eliminar_archivo(id).await {
                Ok(()) => {
                    // Solo se quita de la vista tras la confirmación del servidor.
                    eliminados.write().push(id);
                    aviso.set(None);
                }
                Err(err) => aviso.set(Some((false, err.to_string()))),
            }
            confirmando.set(None);
        });
    };

    // Filas confirmadas como eliminadas no se muestran hasta el refetch.
    let visibles: Option<Result<Vec<Archivo>, String>> = data.read().as_ref().map(|r| match r {
        Ok(lista) => Ok(lista
            .iter()
            .filter(|a| !eliminados.read().contains(&a.id))
            .cloned()
            .collect()),
        Err(err) => Err(err.to_string()),
    });

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Archivos adjuntos" }
                Button {
                    onclick: move |_| {
                        seleccionados.set(Vec::new());
                        modal_subir.set(true);
                    },
                    "Subir archivos"
                }
            }
            CardContent {
                if let Some((exito, msg)) = aviso() {
                    div {
                        class: if exito { "form-aviso exito" } else { "form-aviso error" },
                        "{msg}"
                    }
                }

                match visibles {
                    None => rsx! { Skeleton {} },
                    Some(Ok(lista)) if lista.is_empty() => rsx! {
                        p { class: "empty-state", "Este expediente no tiene archivos adjuntos." }
                    },
                    Some(Ok(lista)) => rsx! {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Nombre" }
                                DataTableColumn { "Subido por" }
                                DataTableColumn { "Fecha" }
                                DataTableColumn { "" }
                            }
                            DataTableBody {
                                for archivo in lista {
                                    FilaArchivo {
                                        key: "{archivo.id}",
                                        archivo: archivo.clone(),
                                        on_descargar: {
                                            let handle_descargar = handle_descargar.clone();
                                            move |a: Archivo| {
                                                spawn(handle_descargar(a));
                                            }
                                        },
                                        on_eliminar: move |a: Archivo| {
                                            confirmando.set(Some((a.id, a.nombre_original)));
                                        },
                                    }
                                }
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        p { class: "error-state", "{err}" }
                    },
                }
            }
        }

        Modal {
            open: modal_subir(),
            on_close: move |_| modal_subir.set(false),
            title: "Subir archivos PDF",
            p { class: "muted", "Solo se permiten archivos PDF. Si alguno no lo es, no se subirá ninguno." }
            input {
                r#type: "file",
                accept: ".pdf,application/pdf",
                multiple: true,
                onchange: handle_files,
            }
            if !seleccionados.read().is_empty() {
                ul { class: "archivo-lista",
                    for sel in seleccionados() {
                        li { "{sel.nombre}" }
                    }
                }
            }
            div { class: "modal-actions",
                Button {
                    variant: ButtonVariant::Light,
                    onclick: move |_| modal_subir.set(false),
                    "Cancelar"
                }
                Button {
                    disabled: subiendo(),
                    onclick: handle_subir,
                    if subiendo() { "Subiendo..." } else { "Subir" }
                }
            }
        }

        Modal {
            open: confirmando().is_some(),
            on_close: move |_| confirmando.set(None),
            title: "Eliminar archivo",
            if let Some((_, nombre)) = confirmando() {
                p { "¿Eliminar \"{nombre}\"? Esta acción no se puede deshacer." }
            }
            div { class: "modal-actions",
                Button {
                    variant: ButtonVariant::Light,
                    onclick: move |_| confirmando.set(None),
                    "Cancelar"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: handle_eliminar,
                    "Eliminar"
                }
            }
        }
    }
}

#[component]
fn FilaArchivo(
    archivo: Archivo,
    on_descargar: EventHandler<Archivo>,
    on_eliminar: EventHandler<Archivo>,
) -> Element {
    let fecha = fmt_fecha_hora(archivo.subido_en.as_deref());

    rsx! {
        DataTableRow {
            DataTableCell { "{archivo.nombre_original}" }
            DataTableCell { "{archivo.subido_por}" }
            DataTableCell { "{fecha}" }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Light,
                    onclick: {
                        let archivo = archivo.clone();
                        move |_| on_descargar.call(archivo.clone())
                    },
                    "Descargar"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: {
                        let archivo = archivo.clone();
                        move |_| on_eliminar.call(archivo.clone())
                    },
                    "Eliminar"
                }
            }
        }
    }
}

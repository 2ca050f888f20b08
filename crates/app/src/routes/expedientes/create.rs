use crate::api::use_api;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{
    validar_documento, validar_lote_pdf, ArchivoParaSubir, CrearExpedienteForm, ESTADOS, PDF_MIME,
};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, FormSelect, Input, PageHeader,
};

/// Which party a RENIEC lookup fills in.
#[derive(Clone, Copy, PartialEq)]
enum Parte {
    Demandante,
    Demandado,
}

fn mime_de_nombre(nombre: &str) -> String {
    if nombre.to_ascii_lowercase().ends_with(".pdf") {
        PDF_MIME.to_string()
    } else {
        "application/octet-stream".to_string()
    }
}

/// Registration form for a new expediente.
///
/// Each party's document number can be looked up against RENIEC; the
/// lookup only fills fields the service actually returned, never blanks
/// what the user already typed. Submission is a single multipart request
/// carrying the fields and the optional PDF.
#[component]
pub fn CrearExpediente() -> Element {
    let api = use_api();
    let mut form = use_signal(CrearExpedienteForm::default);
    let mut archivo = use_signal(|| Option::<ArchivoParaSubir>::None);
    let mut consultando = use_signal(|| false);
    let mut guardando = use_signal(|| false);
    // (es_exito, mensaje)
    let mut aviso = use_signal(|| Option::<(bool, String)>::None);

    let consultar = {
        let api = api.clone();
        move |parte: Parte| {
            let api = api.clone();
            async move {
                let doc = match parte {
                    Parte::Demandante => form.read().demandante_doc.clone(),
                    Parte::Demandado => form.read().demandado_doc.clone(),
                };
                if !validar_documento(&doc) {
                    aviso.set(Some((
                        false,
                        "Documento inválido: DNI tiene 8 dígitos, carné de extranjería 9.".into(),
                    )));
                    return;
                }

                consultando.set(true);
                aviso.set(None);
                match api.consultar_reniec(&doc).await {
                    Ok(datos) if !datos.success => {
                        aviso.set(Some((
                            false,
                            datos
                                .message
                                .unwrap_or_else(|| "Documento no encontrado en RENIEC".into()),
                        )));
                    }
                    Ok(datos) => {
                        let mut f = form.write();
                        match parte {
                            Parte::Demandante => {
                                if let Some(nombre) = datos.nombre {
                                    f.demandante = nombre;
                                }
                                if let Some(fecha) = datos.fecha_nacimiento {
                                    f.fecha_nacimiento = fecha;
                                }
                                if let Some(direccion) = datos.direccion {
                                    f.direccion = direccion;
                                }
                            }
                            // Para el demandado solo interesa el nombre.
                            Parte::Demandado => {
                                if let Some(nombre) = datos.nombre {
                                    f.demandado = nombre;
                                }
                            }
                        }
                    }
                    Err(err) => aviso.set(Some((false, err.to_string()))),
                }
                consultando.set(false);
            }
        }
    };

    let handle_file = move |evt: FormEvent| async move {
        let files = evt.files();
        if let Some(f) = files.first() {
            let nombre = f.name();
            let content_type = f.content_type().unwrap_or_else(|| mime_de_nombre(&nombre));
            match f.read_bytes().await {
                Ok(bytes) => {
                    let seleccionado = ArchivoParaSubir {
                        nombre,
                        content_type,
                        bytes: bytes.to_vec(),
                    };
                    if let Err(msg) = validar_lote_pdf(std::slice::from_ref(&seleccionado)) {
                        aviso.set(Some((false, msg)));
                        archivo.set(None);
                    } else {
                        aviso.set(None);
                        archivo.set(Some(seleccionado));
                    }
                }
                Err(err) => {
                    aviso.set(Some((false, format!("No se pudo leer el archivo: {err}"))));
                }
            }
        }
    };

    let handle_submit = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            if let Err(msg) = form.read().validar() {
                aviso.set(Some((false, msg)));
                return;
            }

            guardando.set(true);
            aviso.set(None);
            let datos = form.read().clone();
            match api.crear_expediente(&datos, archivo()).await {
                Ok(()) => {
                    form.set(CrearExpedienteForm::default());
                    archivo.set(None);
                    aviso.set(Some((true, "Expediente registrado correctamente.".into())));
                }
                Err(err) => aviso.set(Some((false, err.to_string()))),
            }
            guardando.set(false);
        }
    };

    rsx! {
        PageHeader { title: "Nuevo Expediente" }

        if let Some((exito, msg)) = aviso() {
            div {
                class: if exito { "form-aviso exito" } else { "form-aviso error" },
                "{msg}"
            }
        }

        form { onsubmit: handle_submit,
            Card {
                CardHeader {
                    CardTitle { "Datos del expediente" }
                }
                CardContent {
                    div { class: "form-grid",
                        Input {
                            label: "Número de expediente",
                            placeholder: "EXP-2024-001",
                            value: form.read().numero_expediente.clone(),
                            on_input: move |e: FormEvent| form.write().numero_expediente = e.value(),
                        }
                        FormSelect {
                            label: "Estado",
                            value: form.read().estado.clone(),
                            onchange: move |e: FormEvent| form.write().estado = e.value(),
                            option { value: "", "Selecciona un estado" }
                            for opcion in ESTADOS {
                                option { value: opcion, "{opcion}" }
                            }
                        }
                        Input {
                            input_type: "date",
                            label: "Fecha de inicio",
                            value: form.read().fecha_inicio.clone(),
                            on_input: move |e: FormEvent| form.write().fecha_inicio = e.value(),
                        }
                        Input {
                            input_type: "date",
                            label: "Fecha de fin",
                            value: form.read().fecha_fin.clone(),
                            on_input: move |e: FormEvent| form.write().fecha_fin = e.value(),
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Demandante" }
                }
                CardContent {
                    div { class: "form-grid",
                        div { class: "doc-lookup",
                            Input {
                                label: "DNI / CE",
                                placeholder: "12345678",
                                value: form.read().demandante_doc.clone(),
                                on_input: move |e: FormEvent| form.write().demandante_doc = e.value(),
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                disabled: consultando(),
                                onclick: {
                                    let consultar = consultar.clone();
                                    move |_| {
                                        spawn(consultar(Parte::Demandante));
                                    }
                                },
                                if consultando() { "Consultando..." } else { "Consultar RENIEC" }
                            }
                        }
                        Input {
                            label: "Nombre completo",
                            value: form.read().demandante.clone(),
                            on_input: move |e: FormEvent| form.write().demandante = e.value(),
                        }
                        Input {
                            input_type: "date",
                            label: "Fecha de nacimiento",
                            value: form.read().fecha_nacimiento.clone(),
                            on_input: move |e: FormEvent| form.write().fecha_nacimiento = e.value(),
                        }
                        Input {
                            label: "Dirección",
                            value: form.read().direccion.clone(),
                            on_input: move |e: FormEvent| form.write().direccion = e.value(),
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Demandado" }
                }
                CardContent {
                    div { class: "form-grid",
                        div { class: "doc-lookup",
                            Input {
                                label: "DNI / CE",
                                placeholder: "87654321",
                                value: form.read().demandado_doc.clone(),
                                on_input: move |e: FormEvent| form.write().demandado_doc = e.value(),
                            }
                            Button {
                                variant: ButtonVariant::Secondary,
                                disabled: consultando(),
                                onclick: {
                                    let consultar = consultar.clone();
                                    move |_| {
                                        spawn(consultar(Parte::Demandado));
                                    }
                                },
                                if consultando() { "Consultando..." } else { "Consultar RENIEC" }
                            }
                        }
                        Input {
                            label: "Nombre completo",
                            value: form.read().demandado.clone(),
                            on_input: move |e: FormEvent| form.write().demandado = e.value(),
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Documento adjunto (opcional)" }
                }
                CardContent {
                    input {
                        r#type: "file",
                        accept: ".pdf,application/pdf",
                        onchange: handle_file,
                    }
                    if let Some(sel) = archivo() {
                        p { class: "archivo-seleccionado", "Seleccionado: {sel.nombre}" }
                    }
                }
            }

            div { class: "form-actions",
                Button {
                    variant: ButtonVariant::Light,
                    onclick: move |_| {
                        navigator().push(Route::Expedientes {});
                    },
                    "Cancelar"
                }
                Button {
                    button_type: "submit",
                    disabled: guardando(),
                    if guardando() { "Guardando..." } else { "Registrar Expediente" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extension_pdf_mapea_al_mime() {
        assert_eq!(mime_de_nombre("demanda.PDF"), PDF_MIME);
        assert_eq!(mime_de_nombre("foto.png"), "application/octet-stream");
    }
}

use crate::api::{use_api, ApiClient};
use dioxus::prelude::*;
use shared_types::{capitalizar_palabras, Usuario, UsuarioForm, ROLES};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    FormSelect, Input, Modal, PageHeader, Skeleton,
};

async fn cargar_usuarios(
    api: ApiClient,
    mut usuarios: Signal<Vec<Usuario>>,
    mut cargando: Signal<bool>,
    mut error_lista: Signal<Option<String>>,
) {
    cargando.set(true);
    match api.listar_usuarios().await {
        Ok(lista) => {
            usuarios.set(lista);
            error_lista.set(None);
        }
        Err(err) => error_lista.set(Some(err.to_string())),
    }
    cargando.set(false);
}

fn rol_badge(rol: &str) -> BadgeVariant {
    match rol {
        "Admin" => BadgeVariant::Destructive,
        "Abogado" => BadgeVariant::Primary,
        _ => BadgeVariant::Secondary,
    }
}

/// User administration: list plus create/edit form.
///
/// The list is plain local state. Creating prepends the record the
/// server returned; when the response omits it, the list is re-fetched
/// instead. Edits always re-fetch, the server is the source of truth.
#[component]
pub fn Usuarios() -> Element {
    let api = use_api();
    let mut usuarios = use_signal(Vec::<Usuario>::new);
    let cargando = use_signal(|| true);
    let error_lista = use_signal(|| Option::<String>::None);

    let mut form = use_signal(UsuarioForm::default);
    // Some(id) cuando se edita un usuario existente
    let mut editando = use_signal(|| Option::<i64>::None);
    let mut error_form = use_signal(|| Option::<String>::None);
    let mut guardando = use_signal(|| false);
    let mut confirmando = use_signal(|| Option::<(i64, String)>::None);

    use_future({
        let api = api.clone();
        move || cargar_usuarios(api.clone(), usuarios, cargando, error_lista)
    });

    let mut limpiar = move || {
        form.set(UsuarioForm::default());
        editando.set(None);
        error_form.set(None);
    };

    let handle_submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            let api = api.clone();
            async move {
                evt.prevent_default();
                let es_edicion = editando().is_some();
                let payload = match form.read().validar(es_edicion) {
                    Ok(p) => p,
                    Err(msg) => {
                        error_form.set(Some(msg));
                        return;
                    }
                };

                guardando.set(true);
                error_form.set(None);
                let resultado = match editando() {
                    Some(id) => api.actualizar_usuario(id, &payload).await.map(|_| None),
                    None => api.crear_usuario(&payload).await,
                };
                match resultado {
                    Ok(Some(usuario)) => {
                        usuarios.write().insert(0, usuario);
                        limpiar();
                    }
                    Ok(None) => {
                        cargar_usuarios(api.clone(), usuarios, cargando, error_lista).await;
                        limpiar();
                    }
                    Err(err) => error_form.set(Some(err.to_string())),
                }
                guardando.set(false);
            }
        }
    };

    let handle_eliminar = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                let Some((id, _)) = confirmando() else {
                    return;
                };
                match api.eliminar_usuario(id).await {
                    Ok(()) => {
                        usuarios.write().retain(|u| u.id != id);
                        // Al borrar el usuario en edición, el formulario se descarta.
                        if editando() == Some(id) {
                            limpiar();
                        }
                    }
                    Err(err) => error_form.set(Some(err.to_string())),
                }
                confirmando.set(None);
            });
        }
    };

    let es_edicion = editando().is_some();
    let label_password = if es_edicion {
        "Nueva contraseña (opcional)"
    } else {
        "Contraseña"
    };

    rsx! {
        PageHeader { title: "Usuarios" }

        Card {
            CardHeader {
                CardTitle {
                    if es_edicion { "Editar usuario" } else { "Registrar usuario" }
                }
            }
            CardContent {
                if let Some(msg) = error_form() {
                    div { class: "form-aviso error", "{msg}" }
                }
                form { onsubmit: handle_submit,
                    div { class: "form-grid",
                        Input {
                            label: "Nombre completo",
                            value: form.read().nombre.clone(),
                            on_input: move |e: FormEvent| form.write().nombre = e.value(),
                        }
                        Input {
                            input_type: "email",
                            label: "Email",
                            value: form.read().email.clone(),
                            on_input: move |e: FormEvent| form.write().email = e.value(),
                        }
                        FormSelect {
                            label: "Rol",
                            value: form.read().rol.clone(),
                            onchange: move |e: FormEvent| form.write().rol = e.value(),
                            option { value: "", "Selecciona un rol" }
                            for rol in ROLES {
                                option { value: rol, "{rol}" }
                            }
                        }
                        Input {
                            input_type: "password",
                            label: "{label_password}",
                            value: form.read().password.clone(),
                            on_input: move |e: FormEvent| form.write().password = e.value(),
                        }
                        Input {
                            input_type: "password",
                            label: "Confirmar contraseña",
                            value: form.read().confirmar_password.clone(),
                            on_input: move |e: FormEvent| form.write().confirmar_password = e.value(),
                        }
                    }
                    div { class: "form-actions",
                        if es_edicion {
                            Button {
                                variant: ButtonVariant::Light,
                                onclick: move |_| limpiar(),
                                "Cancelar edición"
                            }
                        }
                        Button {
                            button_type: "submit",
                            disabled: guardando(),
                            if guardando() {
                                "Guardando..."
                            } else if es_edicion {
                                "Guardar cambios"
                            } else {
                                "Registrar"
                            }
                        }
                    }
                }
            }
        }

        if let Some(msg) = error_lista() {
            p { class: "error-state", "{msg}" }
        }

        if cargando() {
            Skeleton {}
        } else if usuarios.read().is_empty() {
            p { class: "empty-state", "No hay usuarios registrados." }
        } else {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Nombre" }
                    DataTableColumn { "Email" }
                    DataTableColumn { "Rol" }
                    DataTableColumn { "" }
                }
                DataTableBody {
                    for usuario in usuarios() {
                        DataTableRow {
                            key: "{usuario.id}",
                            DataTableCell { "{capitalizar_palabras(&usuario.nombre)}" }
                            DataTableCell { "{usuario.email}" }
                            DataTableCell {
                                Badge { variant: rol_badge(&usuario.rol), "{usuario.rol}" }
                            }
                            DataTableCell {
                                Button {
                                    variant: ButtonVariant::Light,
                                    onclick: {
                                        let usuario = usuario.clone();
                                        move |_| {
                                            form.set(UsuarioForm {
                                                nombre: usuario.nombre.clone(),
                                                email: usuario.email.clone(),
                                                rol: usuario.rol.clone(),
                                                password: String::new(),
                                                confirmar_password: String::new(),
                                            });
                                            editando.set(Some(usuario.id));
                                            error_form.set(None);
                                        }
                                    },
                                    "Editar"
                                }
                                Button {
                                    variant: ButtonVariant::Destructive,
                                    onclick: {
                                        let usuario = usuario.clone();
                                        move |_| {
                                            confirmando.set(Some((
                                                usuario.id,
                                                usuario.nombre.clone(),
                                            )));
                                        }
                                    },
                                    "Eliminar"
                                }
                            }
                        }
                    }
                }
            }
        }

        Modal {
            open: confirmando().is_some(),
            on_close: move |_| confirmando.set(None),
            title: "Eliminar usuario",
            if let Some((_, nombre)) = confirmando() {
                p { "¿Eliminar a \"{capitalizar_palabras(&nombre)}\"? Esta acción no se puede deshacer." }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_mapean_a_badges_distintos() {
        assert_eq!(rol_badge("Admin"), BadgeVariant::Destructive);
        assert_eq!(rol_badge("Abogado"), BadgeVariant::Primary);
        assert_eq!(rol_badge("Asistente"), BadgeVariant::Secondary);
    }
}

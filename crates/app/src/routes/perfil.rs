use crate::api::use_api;
use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{capitalizar_palabras, Usuario};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, PageHeader, Skeleton,
};

fn avatar_url(usuario: &Usuario) -> String {
    usuario.avatar.clone().unwrap_or_else(|| {
        format!(
            "https://ui-avatars.com/api/?name={}&background=AD0000&color=fff&rounded=true&size=180",
            urlencoding::encode(&usuario.nombre)
        )
    })
}

/// Own-profile page.
///
/// Loads fresh data from the backend and refreshes the persisted copy;
/// if the request fails the profile stored at login is shown instead,
/// so the page still works offline-ish.
#[component]
pub fn Perfil() -> Element {
    let mut session = use_session();
    let api = use_api();
    let mut perfil = use_signal(|| session.usuario());
    let mut cargando = use_signal(|| true);
    let mut aviso = use_signal(|| Option::<String>::None);

    use_future({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match api.perfil().await {
                    Ok(usuario) => {
                        session.actualizar_usuario(usuario.clone());
                        perfil.set(Some(usuario));
                    }
                    Err(err) if err.is_unauthorized() => {
                        navigator().push(Route::Login {});
                    }
                    Err(err) => {
                        if perfil.read().is_none() {
                            aviso.set(Some(err.to_string()));
                        } else {
                            // Hay copia local: se muestra esa y se avisa.
                            aviso.set(Some(format!(
                                "No se pudo actualizar el perfil, mostrando datos guardados. ({err})"
                            )));
                        }
                    }
                }
                cargando.set(false);
            }
        }
    });

    let handle_logout = move |_| {
        session.cerrar();
        navigator().push(Route::Login {});
    };

    rsx! {
        PageHeader { title: "Mi Perfil" }

        if let Some(msg) = aviso() {
            div { class: "form-aviso error", "{msg}" }
        }

        match &*perfil.read() {
            Some(usuario) => rsx! {
                Card {
                    CardHeader {
                        img {
                            class: "perfil-avatar",
                            src: avatar_url(usuario),
                            alt: "Avatar de {usuario.nombre}",
                        }
                        CardTitle { "{capitalizar_palabras(&usuario.nombre)}" }
                        Badge { "{usuario.rol}" }
                    }
                    CardContent {
                        dl { class: "info-grid",
                            div {
                                dt { "Email" }
                                dd { "{usuario.email}" }
                            }
                            div {
                                dt { "Rol" }
                                dd { "{usuario.rol}" }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: handle_logout,
                            "Cerrar sesión"
                        }
                    }
                }
            },
            None if cargando() => rsx! { Skeleton {} },
            None => rsx! {
                p { class: "empty-state", "No hay datos de perfil disponibles." }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario(avatar: Option<&str>) -> Usuario {
        Usuario {
            id: 1,
            nombre: "ana maría torres".into(),
            email: "ana@example.com".into(),
            rol: "Abogado".into(),
            avatar: avatar.map(Into::into),
        }
    }

    #[test]
    fn avatar_propio_tiene_prioridad() {
        let u = usuario(Some("https://cdn.example.com/ana.png"));
        assert_eq!(avatar_url(&u), "https://cdn.example.com/ana.png");
    }

    #[test]
    fn sin_avatar_se_genera_con_el_nombre_codificado() {
        let url = avatar_url(&usuario(None));
        assert!(url.starts_with("https://ui-avatars.com/api/?name=ana%20mar%C3%ADa%20torres"));
    }
}

use crate::session::SessionState;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use shared_types::{
    Alerta, ApiError, Archivo, ArchivoParaSubir, CrearExpedienteForm, Expediente,
    ExpedienteFiltro, ListaAlertasResponse, ListaArchivosResponse, ListaExpedientesResponse,
    ListaUsuariosResponse, LoginRequest, LoginResponse, ReniecResponse, Sesion, SimpleResponse,
    Usuario, UsuarioPayload, UsuarioResponse,
};

/// Backend base URL. Overridable at build time via `API_BASE`.
pub const API_BASE_DEFAULT: &str = "https://proy-back-production.up.railway.app";

/// Thin REST client over the judicial backend.
///
/// Composes URL, bearer header, and body per call; the token is read
/// through the session at the start of each request, never cached. Any
/// 401 destroys the persisted session before surfacing
/// [`ApiError::Unauthorized`], so the next render redirects to login.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
    session: SessionState,
}

impl ApiClient {
    pub fn new(session: SessionState) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: option_env!("API_BASE").unwrap_or(API_BASE_DEFAULT).to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.session
            .token()
            .map(|t| format!("Bearer {t}"))
            .ok_or(ApiError::Unauthorized)
    }

    fn forzar_cierre(&self) {
        let mut session = self.session;
        session.cerrar();
        tracing::warn!("respuesta 401: sesión destruida");
    }

    /// Decode a response body. A 401 additionally forces the logout;
    /// everything else is status/body interpretation, kept apart in
    /// [`interpretar_respuesta`].
    async fn decodificar<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = resp.status().as_u16();
        let body = if status == 401 {
            None
        } else {
            resp.json::<serde_json::Value>().await.ok()
        };
        let out = interpretar_respuesta(status, body);
        if matches!(out, Err(ApiError::Unauthorized)) {
            self.forzar_cierre();
        }
        out
    }

    fn red(err: reqwest::Error) -> ApiError {
        ApiError::network(err.to_string())
    }

    // ── Sesión ──────────────────────────────────────────

    /// POST /api/login — exchange credentials for token + user.
    pub async fn login(&self, email: String, password: String) -> Result<Sesion, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(Self::red)?;

        // Invalid credentials come back as a failure body (often 401);
        // decode it directly so the server's message survives instead of
        // triggering the session-invalid path.
        let status = resp.status();
        match resp.json::<LoginResponse>().await {
            Ok(body) => body.into_sesion(),
            Err(_) => Err(ApiError::from_status(status.as_u16(), None)),
        }
    }

    // ── Usuarios ────────────────────────────────────────

    /// GET /api/usuarios/me — fetch own profile.
    pub async fn perfil(&self) -> Result<Usuario, ApiError> {
        let resp = self
            .http
            .get(self.url("/api/usuarios/me"))
            .header("Authorization", self.bearer()?)
            .send()
            .await
            .map_err(Self::red)?;
        let body: UsuarioResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(
                body.message.unwrap_or_else(|| "No se pudo obtener el perfil".into()),
            ));
        }
        body.usuario.ok_or(ApiError::InvalidBody)
    }

    pub async fn listar_usuarios(&self) -> Result<Vec<Usuario>, ApiError> {
        let resp = self
            .http
            .get(self.url("/api/usuarios"))
            .header("Authorization", self.bearer()?)
            .send()
            .await
            .map_err(Self::red)?;
        let body: ListaUsuariosResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(
                body.message.unwrap_or_else(|| "No se pudo listar usuarios".into()),
            ));
        }
        Ok(body.usuarios)
    }

    /// POST /api/usuarios. Returns the created user when the backend
    /// echoes it back; `None` means the caller should re-fetch the list.
    pub async fn crear_usuario(&self, payload: &UsuarioPayload) -> Result<Option<Usuario>, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/usuarios"))
            .header("Authorization", self.bearer()?)
            .json(payload)
            .send()
            .await
            .map_err(Self::red)?;
        let body: UsuarioResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(
                body.message.unwrap_or_else(|| "No se pudo crear el usuario".into()),
            ));
        }
        Ok(body.usuario)
    }

    pub async fn actualizar_usuario(
        &self,
        id: i64,
        payload: &UsuarioPayload,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/api/usuarios/{id}")))
            .header("Authorization", self.bearer()?)
            .json(payload)
            .send()
            .await
            .map_err(Self::red)?;
        let body: SimpleResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(body.mensaje_o("No se pudo actualizar el usuario")));
        }
        Ok(())
    }

    pub async fn eliminar_usuario(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/usuarios/{id}")))
            .header("Authorization", self.bearer()?)
            .send()
            .await
            .map_err(Self::red)?;
        let body: SimpleResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(body.mensaje_o("No se pudo eliminar el usuario")));
        }
        Ok(())
    }

    // ── Expedientes ─────────────────────────────────────

    /// GET /api/expedientes with only the non-empty filter fields
    /// serialized into the query string.
    pub async fn listar_expedientes(
        &self,
        filtro: &ExpedienteFiltro,
    ) -> Result<Vec<Expediente>, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/expedientes{}", filtro.query_string())))
            .header("Authorization", self.bearer()?)
            .send()
            .await
            .map_err(Self::red)?;
        let body: ListaExpedientesResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(
                body.message.unwrap_or_else(|| "No se pudo listar expedientes".into()),
            ));
        }
        Ok(body.expedientes)
    }

    /// POST /api/expedientes — one multipart request with the form
    /// fields and, when present, the attached PDF.
    pub async fn crear_expediente(
        &self,
        form: &CrearExpedienteForm,
        archivo: Option<ArchivoParaSubir>,
    ) -> Result<(), ApiError> {
        let creado_por = self
            .session
            .usuario()
            .map(|u| u.id.to_string())
            .unwrap_or_default();

        let mut multipart = Form::new();
        for (nombre, valor) in form.campos() {
            multipart = multipart.text(nombre, valor);
        }
        multipart = multipart.text("creado_por", creado_por);
        if let Some(archivo) = archivo {
            let parte = Part::bytes(archivo.bytes)
                .file_name(archivo.nombre)
                .mime_str(&archivo.content_type)
                .map_err(Self::red)?;
            multipart = multipart.part("archivo", parte);
        }

        let resp = self
            .http
            .post(self.url("/api/expedientes"))
            .header("Authorization", self.bearer()?)
            .multipart(multipart)
            .send()
            .await
            .map_err(Self::red)?;
        let body: SimpleResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(body.mensaje_o("Error al crear expediente")));
        }
        Ok(())
    }

    /// POST /api/expedientes/:id/analizar — trigger server-side analysis.
    pub async fn analizar_expediente(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/api/expedientes/{id}/analizar")))
            .header("Authorization", self.bearer()?)
            .send()
            .await
            .map_err(Self::red)?;
        let body: SimpleResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(body.mensaje_o("No se pudo analizar")));
        }
        Ok(())
    }

    // ── Archivos ────────────────────────────────────────

    pub async fn listar_archivos(&self, expediente_id: i64) -> Result<Vec<Archivo>, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/expedientes/{expediente_id}/archivos")))
            .header("Authorization", self.bearer()?)
            .send()
            .await
            .map_err(Self::red)?;
        let body: ListaArchivosResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(
                body.message.unwrap_or_else(|| "No se pudo listar archivos".into()),
            ));
        }
        Ok(body.archivos)
    }

    /// POST /api/expedientes/:id/archivos — single multipart request for
    /// the whole batch. Callers must have PDF-validated the batch first;
    /// no partial upload exists.
    pub async fn subir_archivos(
        &self,
        expediente_id: i64,
        archivos: Vec<ArchivoParaSubir>,
    ) -> Result<(), ApiError> {
        let subido_por = self
            .session
            .usuario()
            .map(|u| u.id.to_string())
            .unwrap_or_default();

        let mut multipart = Form::new()
            .text("subido_por", subido_por)
            .text("expediente_id", expediente_id.to_string());
        for archivo in archivos {
            let parte = Part::bytes(archivo.bytes)
                .file_name(archivo.nombre)
                .mime_str(&archivo.content_type)
                .map_err(Self::red)?;
            multipart = multipart.part("archivos", parte);
        }

        let resp = self
            .http
            .post(self.url(&format!("/api/expedientes/{expediente_id}/archivos")))
            .header("Authorization", self.bearer()?)
            .multipart(multipart)
            .send()
            .await
            .map_err(Self::red)?;
        let body: SimpleResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(body.mensaje_o("Error al subir archivos")));
        }
        Ok(())
    }

    /// GET /api/archivos/:id/download — authenticated binary fetch (the
    /// endpoint requires the bearer header, so no bare hyperlink works).
    pub async fn descargar_archivo(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/archivos/{id}/download")))
            .header("Authorization", self.bearer()?)
            .send()
            .await
            .map_err(Self::red)?;

        let status = resp.status();
        if status.as_u16() == 401 {
            self.forzar_cierre();
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let message = resp
                .json::<SimpleResponse>()
                .await
                .ok()
                .and_then(|b| b.message);
            return Err(ApiError::from_status(status.as_u16(), message));
        }
        let bytes = resp.bytes().await.map_err(Self::red)?;
        Ok(bytes.to_vec())
    }

    pub async fn eliminar_archivo(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/api/archivos/{id}")))
            .header("Authorization", self.bearer()?)
            .send()
            .await
            .map_err(Self::red)?;
        let body: SimpleResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(body.mensaje_o("Error al eliminar")));
        }
        Ok(())
    }

    // ── Alertas ─────────────────────────────────────────

    /// GET /api/alertas — pending deadline alerts for the session user.
    pub async fn listar_alertas(&self) -> Result<Vec<Alerta>, ApiError> {
        let resp = self
            .http
            .get(self.url("/api/alertas"))
            .header("Authorization", self.bearer()?)
            .send()
            .await
            .map_err(Self::red)?;
        let body: ListaAlertasResponse = self.decodificar(resp).await?;
        if !body.success {
            return Err(ApiError::server(
                body.message.unwrap_or_else(|| "No se pudo cargar alertas".into()),
            ));
        }
        Ok(body.alertas)
    }

    // ── RENIEC ──────────────────────────────────────────

    /// GET /api/reniec/:doc — external identity lookup, no auth. The
    /// caller inspects the `success` flag: a miss is not an error.
    pub async fn consultar_reniec(&self, doc: &str) -> Result<ReniecResponse, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/api/reniec/{doc}")))
            .send()
            .await
            .map_err(Self::red)?;
        resp.json::<ReniecResponse>()
            .await
            .map_err(|_| ApiError::InvalidBody)
    }
}

/// Map an HTTP status plus decoded JSON body to the call's outcome: 401
/// always means the session is invalid, any other non-2xx surfaces the
/// server's `message` field when the body carries one, and a 2xx body
/// that does not parse into the expected type is [`ApiError::InvalidBody`].
fn interpretar_respuesta<T: DeserializeOwned>(
    status: u16,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    let body = body.ok_or(ApiError::InvalidBody)?;
    if !(200..300).contains(&status) {
        let message = body
            .get("message")
            .and_then(|m| m.as_str())
            .map(String::from);
        return Err(ApiError::from_status(status, message));
    }
    serde_json::from_value(body).map_err(|_| ApiError::InvalidBody)
}

/// Hook to access the API client.
pub fn use_api() -> ApiClient {
    dioxus::prelude::use_context::<ApiClient>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn un_401_invalida_la_sesion_sin_mirar_el_cuerpo() {
        let res: Result<SimpleResponse, ApiError> = interpretar_respuesta(401, None);
        assert!(res.unwrap_err().is_unauthorized());
    }

    #[test]
    fn error_del_servidor_conserva_su_mensaje() {
        let res: Result<SimpleResponse, ApiError> =
            interpretar_respuesta(500, Some(json!({ "message": "Fallo interno" })));
        assert_eq!(res.unwrap_err().to_string(), "Fallo interno");
    }

    #[test]
    fn exito_decodifica_el_cuerpo() {
        let res: Result<SimpleResponse, ApiError> =
            interpretar_respuesta(200, Some(json!({ "success": true })));
        assert!(res.unwrap().success);
    }

    #[test]
    fn exito_con_cuerpo_ilegible_es_invalido() {
        let res: Result<Usuario, ApiError> =
            interpretar_respuesta(200, Some(json!({ "cualquier": "cosa" })));
        assert_eq!(res.unwrap_err(), ApiError::InvalidBody);
    }
}

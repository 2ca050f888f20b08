use crate::error::ApiError;
use crate::usuario::Usuario;
use serde::{Deserialize, Serialize};

/// An authenticated session: the bearer token plus the logged-in user.
///
/// Presence of a token is necessary but not sufficient — the server is
/// the sole authority, and any 401 response must destroy the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sesion {
    pub token: String,
    pub user: Usuario,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Usuario>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Turn a login response into a session, treating a missing token or
    /// user as a server-reported failure.
    pub fn into_sesion(self) -> Result<Sesion, ApiError> {
        if !self.success {
            return Err(ApiError::server(
                self.message.unwrap_or_else(|| "Credenciales inválidas".into()),
            ));
        }
        match (self.token, self.user) {
            (Some(token), Some(user)) => Ok(Sesion { token, user }),
            _ => Err(ApiError::InvalidBody),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn usuario() -> Usuario {
        Usuario {
            id: 1,
            nombre: "Ana Torres".into(),
            email: "ana@example.com".into(),
            rol: "Admin".into(),
            avatar: None,
        }
    }

    #[test]
    fn respuesta_completa_produce_sesion() {
        let resp = LoginResponse {
            success: true,
            token: Some("jwt".into()),
            user: Some(usuario()),
            message: None,
        };
        let sesion = resp.into_sesion().unwrap();
        assert_eq!(sesion.token, "jwt");
        assert_eq!(sesion.user.nombre, "Ana Torres");
    }

    #[test]
    fn fallo_del_servidor_conserva_su_mensaje() {
        let resp = LoginResponse {
            success: false,
            token: None,
            user: None,
            message: Some("Credenciales inválidas".into()),
        };
        assert_eq!(
            resp.into_sesion().unwrap_err(),
            ApiError::server("Credenciales inválidas")
        );
    }

    #[test]
    fn exito_sin_token_es_cuerpo_invalido() {
        let resp = LoginResponse {
            success: true,
            token: None,
            user: Some(usuario()),
            message: None,
        };
        assert_eq!(resp.into_sesion().unwrap_err(), ApiError::InvalidBody);
    }
}

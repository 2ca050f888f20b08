use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// A staff account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
    pub rol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// The fixed role enumeration, in canonical casing.
pub const ROLES: [&str; 3] = ["Admin", "Abogado", "Asistente"];

/// Resolve a role value to its canonical casing (case-insensitive match).
/// Returns `None` for values outside the enumeration.
pub fn rol_canonico(rol: &str) -> Option<&'static str> {
    let wanted = rol.trim().to_lowercase();
    ROLES.iter().find(|r| r.to_lowercase() == wanted).copied()
}

/// Password policy: at least 8 characters with one uppercase letter,
/// one lowercase letter and one digit. Symbols are allowed.
pub fn validar_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn validar_email(email: &str) -> bool {
    email.validate_email()
}

/// Capitalize each word of a display name ("ana maría" → "Ana María").
pub fn capitalizar_palabras(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => {
                    c.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Local form state for the create/edit user form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsuarioForm {
    pub nombre: String,
    pub email: String,
    pub rol: String,
    pub password: String,
    pub confirmar_password: String,
}

/// Body sent to POST/PUT `/api/usuarios`. The password is write-only:
/// required on create, omitted on edit unless explicitly set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsuarioPayload {
    pub nombre: String,
    pub email: String,
    pub rol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UsuarioForm {
    /// Field-level validation, run before any network call. Returns the
    /// payload with the role canonicalized, or the first error found.
    pub fn validar(&self, es_edicion: bool) -> Result<UsuarioPayload, String> {
        let nombre = self.nombre.trim();
        let email = self.email.trim();

        if nombre.is_empty() {
            return Err("Nombre es obligatorio".into());
        }
        if email.is_empty() {
            return Err("Email es obligatorio".into());
        }
        if !validar_email(email) {
            return Err("Formato de email inválido".into());
        }
        if self.rol.trim().is_empty() {
            return Err("Selecciona un rol".into());
        }
        let rol = rol_canonico(&self.rol)
            .ok_or_else(|| format!("Rol inválido. Valores válidos: {}", ROLES.join(", ")))?;

        let password = if es_edicion {
            // Optional on edit; validated only when the user typed one.
            if self.password.is_empty() {
                None
            } else {
                Self::validar_passwords(&self.password, &self.confirmar_password)?;
                Some(self.password.clone())
            }
        } else {
            if self.password.is_empty() {
                return Err("Contraseña es obligatoria".into());
            }
            Self::validar_passwords(&self.password, &self.confirmar_password)?;
            Some(self.password.clone())
        };

        Ok(UsuarioPayload {
            nombre: nombre.to_string(),
            email: email.to_string(),
            rol: rol.to_string(),
            password,
        })
    }

    fn validar_passwords(password: &str, confirmar: &str) -> Result<(), String> {
        if !validar_password(password) {
            return Err(
                "La contraseña debe tener mínimo 8 caracteres e incluir mayúscula, minúscula y número"
                    .into(),
            );
        }
        if password != confirmar {
            return Err("Las contraseñas no coinciden".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListaUsuariosResponse {
    pub success: bool,
    #[serde(default)]
    pub usuarios: Vec<Usuario>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usuario: Option<Usuario>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form_base() -> UsuarioForm {
        UsuarioForm {
            nombre: "Ana Torres".into(),
            email: "ana@example.com".into(),
            rol: "Abogado".into(),
            password: "Abcd1234".into(),
            confirmar_password: "Abcd1234".into(),
        }
    }

    #[test]
    fn password_sin_mayuscula_falla() {
        assert!(!validar_password("abc12345"));
    }

    #[test]
    fn password_valida_pasa() {
        assert!(validar_password("Abcd1234"));
    }

    #[test]
    fn password_corta_o_sin_digito_falla() {
        assert!(!validar_password("Ab1"));
        assert!(!validar_password("Abcdefgh"));
        assert!(!validar_password("ABCD1234"));
    }

    #[test]
    fn rol_minuscula_se_canonicaliza() {
        assert_eq!(rol_canonico("admin"), Some("Admin"));
        assert_eq!(rol_canonico("  ABOGADO "), Some("Abogado"));
    }

    #[test]
    fn rol_fuera_de_enumeracion_se_rechaza() {
        assert_eq!(rol_canonico("Auditor"), None);
        assert_eq!(rol_canonico(""), None);
    }

    #[test]
    fn validar_envia_rol_canonico() {
        let mut form = form_base();
        form.rol = "asistente".into();
        let payload = form.validar(false).unwrap();
        assert_eq!(payload.rol, "Asistente");
        assert_eq!(payload.password.as_deref(), Some("Abcd1234"));
    }

    #[test]
    fn validar_exige_campos_obligatorios() {
        let mut form = form_base();
        form.nombre = "   ".into();
        assert_eq!(form.validar(false).unwrap_err(), "Nombre es obligatorio");

        let mut form = form_base();
        form.email = "no-es-un-email".into();
        assert_eq!(form.validar(false).unwrap_err(), "Formato de email inválido");
    }

    #[test]
    fn validar_crear_exige_password() {
        let mut form = form_base();
        form.password = String::new();
        assert_eq!(form.validar(false).unwrap_err(), "Contraseña es obligatoria");
    }

    #[test]
    fn validar_editar_permite_omitir_password() {
        let mut form = form_base();
        form.password = String::new();
        form.confirmar_password = String::new();
        let payload = form.validar(true).unwrap();
        assert_eq!(payload.password, None);
    }

    #[test]
    fn validar_confirmacion_distinta_falla() {
        let mut form = form_base();
        form.confirmar_password = "Abcd12345".into();
        assert_eq!(form.validar(false).unwrap_err(), "Las contraseñas no coinciden");
    }

    #[test]
    fn password_omitido_no_se_serializa() {
        let payload = UsuarioPayload {
            nombre: "Ana".into(),
            email: "ana@example.com".into(),
            rol: "Admin".into(),
            password: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("password"));
    }

    #[test]
    fn capitalizar_palabras_normaliza() {
        assert_eq!(capitalizar_palabras("ana  maría torres"), "Ana María Torres");
        assert_eq!(capitalizar_palabras(""), "");
    }
}

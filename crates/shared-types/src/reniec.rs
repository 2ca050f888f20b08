use serde::{Deserialize, Serialize};

/// Response of the external identity lookup (`GET /api/reniec/:doc`).
/// Fields the service does not return stay `None` and must not
/// overwrite what the user already typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReniecResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_nacimiento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// DNI has 8 digits, carné de extranjería 9.
pub fn validar_documento(doc: &str) -> bool {
    (doc.len() == 8 || doc.len() == 9) && doc.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dni_y_ce_son_validos() {
        assert!(validar_documento("12345678"));
        assert!(validar_documento("123456789"));
    }

    #[test]
    fn longitudes_y_caracteres_invalidos_se_rechazan() {
        assert!(!validar_documento("1234567"));
        assert!(!validar_documento("1234567890"));
        assert!(!validar_documento("1234567a"));
        assert!(!validar_documento(""));
    }
}

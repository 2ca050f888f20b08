use serde::{Deserialize, Serialize};

/// Minimal `{ success, message }` envelope returned by mutation
/// endpoints (analizar, eliminar archivo, subir archivos).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SimpleResponse {
    /// The server message, or a generic fallback for silent failures.
    pub fn mensaje_o(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mensaje_o_prefers_server_message() {
        let resp = SimpleResponse {
            success: false,
            message: Some("Archivo en uso".into()),
        };
        assert_eq!(resp.mensaje_o("Error desconocido"), "Archivo en uso");
    }

    #[test]
    fn mensaje_o_falls_back_when_missing_or_empty() {
        let resp = SimpleResponse {
            success: false,
            message: None,
        };
        assert_eq!(resp.mensaje_o("Error desconocido"), "Error desconocido");

        let resp = SimpleResponse {
            success: false,
            message: Some(String::new()),
        };
        assert_eq!(resp.mensaje_o("Error desconocido"), "Error desconocido");
    }
}

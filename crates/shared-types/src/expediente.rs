use serde::{Deserialize, Serialize};

/// A case file record as returned by the backend.
///
/// The list view holds an ephemeral, query-dependent snapshot of these;
/// they are never mutated in place, only replaced by a re-fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expediente {
    pub id: i64,
    pub numero_expediente: String,
    pub demandante: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demandante_doc: Option<String>,
    pub demandado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demandado_doc: Option<String>,
    pub estado: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creado_por: Option<String>,
    /// Display name of the creator, when the backend joins it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creado_por_nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archivo: Option<String>,
}

/// The estado enumeration offered by the filter and create forms.
pub const ESTADOS: [&str; 3] = ["Abierto", "En Proceso", "Cerrado"];

/// Filter state for the expedientes list: free text, estado, date range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpedienteFiltro {
    pub q: String,
    pub estado: String,
    pub desde: String,
    pub hasta: String,
}

impl ExpedienteFiltro {
    /// Serialize the non-empty fields as a query string (`?q=...&estado=...`).
    ///
    /// Blank fields are omitted entirely — never sent as empty parameters.
    /// Returns the empty string when no filter is active.
    pub fn query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        let q = self.q.trim();
        if !q.is_empty() {
            parts.push(format!("q={}", urlencoding::encode(q)));
        }
        if !self.estado.is_empty() {
            parts.push(format!("estado={}", urlencoding::encode(&self.estado)));
        }
        if !self.desde.is_empty() {
            parts.push(format!("from={}", urlencoding::encode(&self.desde)));
        }
        if !self.hasta.is_empty() {
            parts.push(format!("to={}", urlencoding::encode(&self.hasta)));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }

    pub fn esta_vacio(&self) -> bool {
        self.q.trim().is_empty()
            && self.estado.is_empty()
            && self.desde.is_empty()
            && self.hasta.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListaExpedientesResponse {
    pub success: bool,
    #[serde(default)]
    pub expedientes: Vec<Expediente>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Local form state for the create-expediente form. Flat key-value
/// fields; `creado_por` travels with the multipart body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrearExpedienteForm {
    pub numero_expediente: String,
    pub demandante_doc: String,
    pub demandante: String,
    pub fecha_nacimiento: String,
    pub direccion: String,
    pub demandado_doc: String,
    pub demandado: String,
    pub estado: String,
    pub fecha_inicio: String,
    pub fecha_fin: String,
}

impl CrearExpedienteForm {
    /// Synchronous field validation, run before submission.
    pub fn validar(&self) -> Result<(), String> {
        if self.numero_expediente.trim().is_empty() {
            return Err("Número de expediente es obligatorio".into());
        }
        if self.estado.is_empty() {
            return Err("Selecciona un estado".into());
        }
        if !ESTADOS.contains(&self.estado.as_str()) {
            return Err(format!(
                "Estado inválido. Valores válidos: {}",
                ESTADOS.join(", ")
            ));
        }
        Ok(())
    }

    /// The multipart text fields, in submission order.
    pub fn campos(&self) -> Vec<(&'static str, String)> {
        vec![
            ("numero_expediente", self.numero_expediente.trim().to_string()),
            ("demandante_doc", self.demandante_doc.clone()),
            ("demandante", self.demandante.clone()),
            ("fecha_nacimiento", self.fecha_nacimiento.clone()),
            ("direccion", self.direccion.clone()),
            ("demandado_doc", self.demandado_doc.clone()),
            ("demandado", self.demandado.clone()),
            ("estado", self.estado.clone()),
            ("fecha_inicio", self.fecha_inicio.clone()),
            ("fecha_fin", self.fecha_fin.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn campos_vacios_se_omiten_del_query() {
        let filtro = ExpedienteFiltro {
            q: String::new(),
            estado: "Abierto".into(),
            desde: String::new(),
            hasta: String::new(),
        };
        assert_eq!(filtro.query_string(), "?estado=Abierto");
    }

    #[test]
    fn sin_filtros_no_hay_query() {
        assert_eq!(ExpedienteFiltro::default().query_string(), "");
        assert!(ExpedienteFiltro::default().esta_vacio());
    }

    #[test]
    fn q_se_recorta_y_codifica() {
        let filtro = ExpedienteFiltro {
            q: "  pérez gómez ".into(),
            ..Default::default()
        };
        assert_eq!(filtro.query_string(), "?q=p%C3%A9rez%20g%C3%B3mez");
    }

    #[test]
    fn q_solo_espacios_cuenta_como_vacio() {
        let filtro = ExpedienteFiltro {
            q: "   ".into(),
            hasta: "2024-06-30".into(),
            ..Default::default()
        };
        assert_eq!(filtro.query_string(), "?to=2024-06-30");
        assert!(!filtro.esta_vacio());
    }

    #[test]
    fn todos_los_campos_en_orden() {
        let filtro = ExpedienteFiltro {
            q: "123".into(),
            estado: "En Proceso".into(),
            desde: "2024-01-01".into(),
            hasta: "2024-06-30".into(),
        };
        assert_eq!(
            filtro.query_string(),
            "?q=123&estado=En%20Proceso&from=2024-01-01&to=2024-06-30"
        );
    }

    #[test]
    fn crear_valida_numero_y_estado() {
        let mut form = CrearExpedienteForm {
            numero_expediente: "EXP-2024-001".into(),
            estado: "Abierto".into(),
            ..Default::default()
        };
        assert!(form.validar().is_ok());

        form.estado = "Archivado".into();
        assert!(form.validar().unwrap_err().starts_with("Estado inválido"));

        form.numero_expediente = "  ".into();
        assert_eq!(
            form.validar().unwrap_err(),
            "Número de expediente es obligatorio"
        );
    }

    #[test]
    fn expediente_deserializa_campos_opcionales_ausentes() {
        let json = r#"{
            "id": 7,
            "numero_expediente": "EXP-7",
            "demandante": "Ana",
            "demandado": "Luis",
            "estado": "Abierto"
        }"#;
        let exp: Expediente = serde_json::from_str(json).unwrap();
        assert_eq!(exp.id, 7);
        assert_eq!(exp.archivo, None);
        assert_eq!(exp.fecha_inicio, None);
    }
}

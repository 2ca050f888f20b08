use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A deadline/event reminder tied to an expediente. Read-only snapshot,
/// fetched once per login session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alerta {
    pub evento_id: i64,
    pub expediente_id: i64,
    pub numero_expediente: String,
    pub tipo_evento: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub fecha_evento: String,
}

/// Overdue/upcoming classification of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstadoAlerta {
    Vencida,
    PorVencer,
}

impl Alerta {
    /// Classify against local-midnight "today": overdue when the event
    /// date, normalized to its UTC calendar day, is strictly before it.
    pub fn clasificar(&self, hoy: NaiveDate) -> EstadoAlerta {
        clasificar_fecha(&self.fecha_evento, hoy)
    }

    pub fn descripcion_o_defecto(&self) -> &str {
        self.descripcion
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Sin descripción")
    }
}

/// UTC-normalize an event timestamp and compare it to today's date.
///
/// Accepts full RFC 3339 timestamps (converted to UTC first, so the
/// result does not depend on the event's or viewer's offset) or bare
/// `YYYY-MM-DD` dates. Unparseable dates classify as upcoming rather
/// than alarming the user about nothing.
pub fn clasificar_fecha(fecha_evento: &str, hoy: NaiveDate) -> EstadoAlerta {
    let fecha_utc = DateTime::parse_from_rfc3339(fecha_evento)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .ok()
        .or_else(|| {
            fecha_evento
                .get(..10)
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        });

    match fecha_utc {
        Some(fecha) if fecha < hoy => EstadoAlerta::Vencida,
        _ => EstadoAlerta::PorVencer,
    }
}

/// Today's date in the viewer's local timezone.
pub fn hoy_local() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListaAlertasResponse {
    pub success: bool,
    #[serde(default)]
    pub alertas: Vec<Alerta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hoy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn fecha_anterior_es_vencida() {
        assert_eq!(clasificar_fecha("2024-01-10", hoy()), EstadoAlerta::Vencida);
    }

    #[test]
    fn fecha_posterior_es_por_vencer() {
        assert_eq!(
            clasificar_fecha("2024-01-20", hoy()),
            EstadoAlerta::PorVencer
        );
    }

    #[test]
    fn fecha_de_hoy_no_esta_vencida() {
        // Strictly-before comparison: same-day events are still upcoming.
        assert_eq!(
            clasificar_fecha("2024-01-15", hoy()),
            EstadoAlerta::PorVencer
        );
    }

    #[test]
    fn el_offset_del_evento_no_cambia_el_dia_utc() {
        // 2024-01-14 20:00 at -07:00 is 2024-01-15 03:00 UTC — not overdue.
        assert_eq!(
            clasificar_fecha("2024-01-14T20:00:00-07:00", hoy()),
            EstadoAlerta::PorVencer
        );
        // 2024-01-15 01:30 at +05:00 is 2024-01-14 20:30 UTC — overdue.
        assert_eq!(
            clasificar_fecha("2024-01-15T01:30:00+05:00", hoy()),
            EstadoAlerta::Vencida
        );
    }

    #[test]
    fn timestamp_utc_se_clasifica_por_dia() {
        assert_eq!(
            clasificar_fecha("2024-01-10T23:59:59Z", hoy()),
            EstadoAlerta::Vencida
        );
    }

    #[test]
    fn fecha_invalida_queda_como_por_vencer() {
        assert_eq!(clasificar_fecha("", hoy()), EstadoAlerta::PorVencer);
        assert_eq!(clasificar_fecha("ayer", hoy()), EstadoAlerta::PorVencer);
    }

    #[test]
    fn descripcion_vacia_usa_texto_por_defecto() {
        let alerta = Alerta {
            evento_id: 1,
            expediente_id: 2,
            numero_expediente: "EXP-2".into(),
            tipo_evento: "Audiencia".into(),
            descripcion: Some(String::new()),
            fecha_evento: "2024-01-20".into(),
        };
        assert_eq!(alerta.descripcion_o_defecto(), "Sin descripción");
    }
}

//! Shared formatting utilities for the UI layer.
//!
//! Backend dates arrive as ISO-8601 strings; display formatting is
//! plain string slicing, no parsing.

/// Date-only portion of an ISO string ("2024-03-01T10:00:00Z" → "2024-03-01").
/// Empty or missing dates render as an em dash.
pub fn fmt_fecha(fecha: Option<&str>) -> String {
    match fecha {
        Some(f) if f.len() >= 10 => f[..10].to_string(),
        Some(f) if !f.is_empty() => f.to_string(),
        _ => "—".to_string(),
    }
}

/// Date and time ("2024-03-01T10:35:00Z" → "2024-03-01 10:35").
pub fn fmt_fecha_hora(fecha: Option<&str>) -> String {
    match fecha {
        Some(f) if f.len() >= 16 => format!("{} {}", &f[..10], &f[11..16]),
        otro => fmt_fecha(otro),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fecha_recorta_a_dia() {
        assert_eq!(fmt_fecha(Some("2024-03-01T10:00:00Z")), "2024-03-01");
        assert_eq!(fmt_fecha(Some("2024-03-01")), "2024-03-01");
    }

    #[test]
    fn fecha_ausente_es_guion() {
        assert_eq!(fmt_fecha(None), "—");
        assert_eq!(fmt_fecha(Some("")), "—");
    }

    #[test]
    fn fecha_hora_incluye_minutos() {
        assert_eq!(fmt_fecha_hora(Some("2024-03-01T10:35:00Z")), "2024-03-01 10:35");
        assert_eq!(fmt_fecha_hora(Some("2024-03-01")), "2024-03-01");
        assert_eq!(fmt_fecha_hora(None), "—");
    }
}

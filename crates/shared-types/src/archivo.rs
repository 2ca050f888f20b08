use serde::{Deserialize, Serialize};

/// Metadata of a file attached to an expediente (PDF only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archivo {
    pub id: i64,
    pub nombre_original: String,
    pub subido_por: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subido_en: Option<String>,
    pub expediente_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListaArchivosResponse {
    pub success: bool,
    #[serde(default)]
    pub archivos: Vec<Archivo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A file the user selected for upload, read into memory client-side.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivoParaSubir {
    pub nombre: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub const PDF_MIME: &str = "application/pdf";

/// All-or-nothing PDF check for an upload batch. If any file's declared
/// content type is not `application/pdf`, the whole batch is rejected
/// and the offending file is named; no partial request may be issued.
pub fn validar_lote_pdf(archivos: &[ArchivoParaSubir]) -> Result<(), String> {
    if archivos.is_empty() {
        return Err("Selecciona al menos un archivo".into());
    }
    for archivo in archivos {
        if archivo.content_type != PDF_MIME {
            return Err(format!(
                "El archivo \"{}\" no es un PDF. Solo se permiten archivos PDF.",
                archivo.nombre
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pdf(nombre: &str) -> ArchivoParaSubir {
        ArchivoParaSubir {
            nombre: nombre.into(),
            content_type: PDF_MIME.into(),
            bytes: vec![0x25, 0x50, 0x44, 0x46],
        }
    }

    #[test]
    fn lote_de_pdfs_pasa() {
        assert!(validar_lote_pdf(&[pdf("a.pdf"), pdf("b.pdf")]).is_ok());
    }

    #[test]
    fn un_no_pdf_rechaza_el_lote_entero() {
        let lote = vec![
            pdf("demanda.pdf"),
            ArchivoParaSubir {
                nombre: "foto.png".into(),
                content_type: "image/png".into(),
                bytes: vec![],
            },
            pdf("anexo.pdf"),
        ];
        let err = validar_lote_pdf(&lote).unwrap_err();
        assert_eq!(
            err,
            "El archivo \"foto.png\" no es un PDF. Solo se permiten archivos PDF."
        );
    }

    #[test]
    fn lote_vacio_se_rechaza() {
        assert_eq!(
            validar_lote_pdf(&[]).unwrap_err(),
            "Selecciona al menos un archivo"
        );
    }
}

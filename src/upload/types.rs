use serde_json::Value;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

pub const NO_FILE_MESSAGE: &str = "Selecione um arquivo primeiro!";
pub const SUCCESS_MESSAGE: &str = "Upload realizado com sucesso!";
pub const FAILURE_MESSAGE: &str = "Erro ao enviar o arquivo.";
pub const READ_FAILURE_MESSAGE: &str = "Não foi possível ler o arquivo.";

/// A file picked by the user, held in memory until it is replaced.
///
/// The content is shared, so cloning a `SelectedFile` into a dispatch does not
/// copy the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub content: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        content: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let content = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, mime_type_for(path), content))
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

fn mime_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") | Some("log") => "text/plain",
        Some("csv") => "text/csv",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("html") | Some("htm") => "text/html",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("zip") => "application/zip",
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// What the backend answered, reduced to the fields the window shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReply {
    pub message: Option<String>,
    pub files: Vec<String>,
}

impl UploadReply {
    /// Reads a JSON reply body. Any JSON value other than `null` is accepted;
    /// non-object values simply carry no message.
    pub fn parse(body: &[u8]) -> Result<Self, UploadError> {
        let value: Value = serde_json::from_slice(body)?;
        if value.is_null() {
            return Err(UploadError::NullReply);
        }

        let message = value.get("message").and_then(display_message);

        let files = value
            .get("files")
            .and_then(Value::as_array)
            .map(|files| {
                files
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { message, files })
    }

    pub fn status_message(&self) -> &str {
        self.message.as_deref().unwrap_or(SUCCESS_MESSAGE)
    }
}

/// Falsy values (`""`, `0`, `false`, `null`) fall back to the generic notice,
/// as do objects and arrays.
fn display_message(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("response body is JSON null")]
    NullReply,
}

impl UploadError {
    pub fn status_message(&self) -> &'static str {
        match self {
            UploadError::NoFileSelected => NO_FILE_MESSAGE,
            UploadError::Transport(_) | UploadError::Parse(_) | UploadError::NullReply => {
                FAILURE_MESSAGE
            }
        }
    }
}

/// A finished upload attempt as delivered back to the UI thread.
#[derive(Debug)]
pub struct CompletedAttempt {
    pub attempt: u64,
    pub file_name: String,
    pub outcome: Result<UploadReply, UploadError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reply_with_message_uses_it() {
        let reply = UploadReply::parse(br#"{"message": "OK"}"#).unwrap();
        assert_eq!(reply.status_message(), "OK");
        assert!(reply.files.is_empty());
    }

    #[test]
    fn reply_without_message_uses_generic_success() {
        let reply = UploadReply::parse(br#"{"status": "done"}"#).unwrap();
        assert_eq!(reply.message, None);
        assert_eq!(reply.status_message(), SUCCESS_MESSAGE);
    }

    #[test]
    fn falsy_message_uses_generic_success() {
        for body in [
            br#"{"message": ""}"#.as_slice(),
            br#"{"message": 0}"#.as_slice(),
            br#"{"message": false}"#.as_slice(),
            br#"{"message": null}"#.as_slice(),
            br#"{"message": {"text": "OK"}}"#.as_slice(),
        ] {
            let reply = UploadReply::parse(body).unwrap();
            assert_eq!(reply.status_message(), SUCCESS_MESSAGE);
        }
    }

    #[test]
    fn truthy_scalar_message_is_shown_as_text() {
        let numeric = UploadReply::parse(br#"{"message": 42}"#).unwrap();
        assert_eq!(numeric.status_message(), "42");

        let flag = UploadReply::parse(br#"{"message": true}"#).unwrap();
        assert_eq!(flag.status_message(), "true");
    }

    #[test]
    fn non_object_json_counts_as_success() {
        let reply = UploadReply::parse(b"[1, 2, 3]").unwrap();
        assert_eq!(reply.status_message(), SUCCESS_MESSAGE);
    }

    #[test]
    fn produced_files_are_collected() {
        let reply = UploadReply::parse(
            br#"{"message": "Arquivos processados com sucesso", "files": ["uploads/a.xlsx", 3, "uploads/b.xlsx"]}"#,
        )
        .unwrap();
        assert_eq!(reply.files, vec!["uploads/a.xlsx", "uploads/b.xlsx"]);
    }

    #[test]
    fn null_and_garbage_bodies_are_failures() {
        let null = UploadReply::parse(b"null").unwrap_err();
        assert!(matches!(null, UploadError::NullReply));
        assert_eq!(null.status_message(), FAILURE_MESSAGE);

        let html = UploadReply::parse(b"<html>Internal Server Error</html>").unwrap_err();
        assert!(matches!(html, UploadError::Parse(_)));
        assert_eq!(html.status_message(), FAILURE_MESSAGE);
    }

    #[test]
    fn missing_file_maps_to_selection_notice() {
        assert_eq!(UploadError::NoFileSelected.status_message(), NO_FILE_MESSAGE);
    }

    #[test]
    fn from_path_reads_name_type_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.PDF");
        fs::write(&path, b"%PDF-1.4 test").unwrap();

        let file = SelectedFile::from_path(&path).unwrap();
        assert_eq!(file.name, "report.PDF");
        assert_eq!(file.mime_type, "application/pdf");
        assert_eq!(file.size(), 13);
        assert_eq!(&file.content[..], b"%PDF-1.4 test");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(mime_type_for(Path::new("data.bin")), "application/octet-stream");
        assert_eq!(mime_type_for(Path::new("README")), "application/octet-stream");
    }

    #[test]
    fn from_path_fails_for_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SelectedFile::from_path(&dir.path().join("missing.pdf")).is_err());
    }
}

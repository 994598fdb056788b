use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::decode::{DecodeError, DocumentKind};
use crate::errors::AppError;
use crate::extraction::assemble;
use crate::models::profile::Profile;
use crate::state::AppState;

pub const UNSUPPORTED_TYPE_MESSAGE: &str =
    "Please upload a PDF or Word document (.pdf, .doc, .docx)";

/// Multipart part carrying the document.
const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    pub raw_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Text,
    Pdf,
    Docx,
    LegacyWord,
}

impl From<DocumentKind> for SourceKind {
    fn from(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Pdf => SourceKind::Pdf,
            DocumentKind::Docx => SourceKind::Docx,
            DocumentKind::LegacyWord => SourceKind::LegacyWord,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentSource {
    pub kind: SourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    pub bytes: usize,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub extraction_id: Uuid,
    pub extracted_at: DateTime<Utc>,
    pub source: DocumentSource,
    pub profile: Profile,
}

impl ExtractResponse {
    fn new(source: DocumentSource, profile: Profile) -> Self {
        ExtractResponse {
            extraction_id: Uuid::new_v4(),
            extracted_at: Utc::now(),
            source,
            profile,
        }
    }
}

struct FilePart {
    file_name: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

/// POST /api/v1/profiles/extract
pub async fn handle_extract_text(
    Json(req): Json<ExtractTextRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    let bytes = req.raw_text.len();
    let profile = tokio::task::spawn_blocking(move || assemble(&req.raw_text))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?;

    let response = ExtractResponse::new(
        DocumentSource {
            kind: SourceKind::Text,
            file_name: None,
            content_type: None,
            bytes,
        },
        profile,
    );
    info!(extraction_id = %response.extraction_id, bytes, "extracted profile from text");
    Ok(Json(response))
}

/// POST /api/v1/profiles/upload
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let part = read_file_part(&mut multipart).await?;

    if part.data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }
    let max = state.config.max_upload_bytes;
    if part.data.len() > max {
        return Err(AppError::PayloadTooLarge(format!(
            "File is {} bytes; the upload limit is {max} bytes",
            part.data.len()
        )));
    }

    let kind = DocumentKind::resolve(part.content_type.as_deref(), part.file_name.as_deref())
        .ok_or_else(|| AppError::UnsupportedMediaType(UNSUPPORTED_TYPE_MESSAGE.to_string()))?;

    let decoder = state.decoder.clone();
    let data = part.data.clone();
    let profile = tokio::task::spawn_blocking(move || -> Result<Profile, DecodeError> {
        let text = decoder.decode(kind, &data)?;
        Ok(assemble(&text))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("decode task failed: {e}")))??;

    let response = ExtractResponse::new(
        DocumentSource {
            kind: kind.into(),
            file_name: part.file_name,
            content_type: part.content_type,
            bytes: part.data.len(),
        },
        profile,
    );
    info!(
        extraction_id = %response.extraction_id,
        kind = ?kind,
        bytes = response.source.bytes,
        "extracted profile from upload"
    );
    Ok(Json(response))
}

/// Reads the first `file` part; other parts are skipped.
async fn read_file_part(multipart: &mut Multipart) -> Result<FilePart, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok(FilePart {
            file_name,
            content_type,
            data,
        });
    }
    Err(AppError::Validation(format!(
        "Multipart body has no '{FILE_FIELD}' part"
    )))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(err.body_text())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    use super::*;
    use crate::config::Config;
    use crate::decode::DocumentDecoder;
    use crate::extraction::vocabulary::DEFAULT_NAME;
    use crate::routes::build_router;

    const BOUNDARY: &str = "folio-test-boundary";
    const MAX_UPLOAD: usize = 1024;

    /// Treats document bytes as UTF-8 text. `corrupt` fails, `panic` panics.
    struct StubDecoder;

    impl DocumentDecoder for StubDecoder {
        fn decode(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, DecodeError> {
            match (kind, bytes) {
                (_, b"panic") => panic!("decoder blew up"),
                (DocumentKind::LegacyWord, _) => Err(DecodeError::Unsupported("doc".into())),
                (_, b"corrupt") => Err(DecodeError::Pdf("no xref table".into())),
                _ => Ok(String::from_utf8_lossy(bytes).into_owned()),
            }
        }
    }

    fn app() -> Router {
        build_router(AppState {
            config: Config {
                max_upload_bytes: MAX_UPLOAD,
                ..Config::default()
            },
            decoder: Arc::new(StubDecoder),
        })
    }

    fn upload_request(
        part_name: &str,
        file_name: Option<&str>,
        content_type: Option<&str>,
        data: &[u8],
    ) -> Request<Body> {
        let mut body = format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{part_name}\"");
        if let Some(name) = file_name {
            body.push_str(&format!("; filename=\"{name}\""));
        }
        body.push_str("\r\n");
        if let Some(ct) = content_type {
            body.push_str(&format!("Content-Type: {ct}\r\n"));
        }
        body.push_str("\r\n");

        let mut bytes = body.into_bytes();
        bytes.extend_from_slice(data);
        bytes.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/profiles/upload")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(bytes))
            .unwrap()
    }

    fn text_request(raw_text: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/profiles/extract")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::json!({ "raw_text": raw_text }).to_string(),
            ))
            .unwrap()
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, json) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "folio-api");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_extract_text() {
        let (status, json) =
            send(text_request("Jane Doe\njane@example.com\nSkills\nPython, Rust")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["source"]["kind"], "text");
        assert!(json["source"].get("file_name").is_none());
        assert_eq!(json["profile"]["name"], "Jane Doe");
        assert_eq!(json["profile"]["contact"]["email"], "jane@example.com");
        assert!(json["profile"]["contact"].get("phone").is_none());
        assert_eq!(json["profile"]["skills"], serde_json::json!(["Python", "Rust"]));

        let id = json["extraction_id"].as_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
        let stamp = json["extracted_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[tokio::test]
    async fn test_extract_empty_text_uses_fallbacks() {
        let (status, json) = send(text_request("")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["profile"]["name"], DEFAULT_NAME);
        assert_eq!(json["profile"]["raw_text"], "");
        assert_eq!(json["source"]["bytes"], 0);
    }

    #[tokio::test]
    async fn test_upload_pdf() {
        let data = b"Jane Doe\nSkills\nPython, Rust";
        let (status, json) = send(upload_request(
            "file",
            Some("cv.pdf"),
            Some("application/pdf"),
            data,
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["source"]["kind"], "pdf");
        assert_eq!(json["source"]["file_name"], "cv.pdf");
        assert_eq!(json["source"]["content_type"], "application/pdf");
        assert_eq!(json["source"]["bytes"], data.len());
        assert_eq!(json["profile"]["name"], "Jane Doe");
        assert_eq!(json["profile"]["skills"], serde_json::json!(["Python", "Rust"]));
    }

    #[tokio::test]
    async fn test_upload_octet_stream_uses_extension() {
        let (status, json) = send(upload_request(
            "file",
            Some("resume.docx"),
            Some("application/octet-stream"),
            b"Jane Doe",
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["source"]["kind"], "docx");
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_type() {
        let (status, json) = send(upload_request(
            "file",
            Some("photo.png"),
            Some("image/png"),
            b"\x89PNG",
        ))
        .await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(json["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
        assert_eq!(json["error"]["message"], UNSUPPORTED_TYPE_MESSAGE);
    }

    #[tokio::test]
    async fn test_upload_legacy_word_is_unsupported() {
        let (status, json) = send(upload_request(
            "file",
            Some("old.doc"),
            Some("application/msword"),
            b"\xD0\xCF\x11\xE0",
        ))
        .await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(json["error"]["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[tokio::test]
    async fn test_upload_requires_file_part() {
        let (status, json) = send(upload_request(
            "resume",
            Some("cv.pdf"),
            Some("application/pdf"),
            b"Jane Doe",
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_file() {
        let (status, json) =
            send(upload_request("file", Some("cv.pdf"), Some("application/pdf"), b"")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["message"], "Uploaded file is empty");
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file() {
        let data = vec![b'a'; MAX_UPLOAD + 1];
        let (status, json) = send(upload_request(
            "file",
            Some("cv.pdf"),
            Some("application/pdf"),
            &data,
        ))
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_upload_decode_failure() {
        let (status, json) = send(upload_request(
            "file",
            Some("cv.pdf"),
            Some("application/pdf"),
            b"corrupt",
        ))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"]["code"], "DECODE_ERROR");
    }

    #[tokio::test]
    async fn test_decoder_panic_becomes_internal_error() {
        let (status, json) = send(upload_request(
            "file",
            Some("cv.pdf"),
            Some("application/pdf"),
            b"panic",
        ))
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}

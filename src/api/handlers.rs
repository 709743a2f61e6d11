//! Request handlers for the upload form

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use super::page::FormPage;
use super::server::AppState;

/// Shown when the form is submitted without a file
pub const MISSING_FILE_MESSAGE: &str = "Please choose an Excel file.";

/// Name of the multipart field carrying the workbook
pub const FILE_FIELD: &str = "file";

/// A workbook received from the form
#[derive(Debug)]
struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

/// GET / - upload form
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    form_response(&state.page, StatusCode::OK, None)
}

/// POST / - convert the uploaded workbook and return it as a CSV attachment
pub async fn upload(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    let upload = match read_upload(multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            warn!("form submitted without a file");
            return form_response(&state.page, StatusCode::OK, Some(MISSING_FILE_MESSAGE));
        }
        Err(e) => {
            warn!("malformed upload: {}", e);
            return e.into_response();
        }
    };

    let file_name = upload.file_name;
    let bytes = upload.bytes;
    let size = bytes.len();
    let converted = tokio::task::spawn_blocking(move || crate::convert_bytes(bytes)).await;

    match converted {
        Ok(Ok(csv)) => {
            let download = csv_file_name(&file_name);
            info!(upload = %file_name, bytes = size, download = %download, "converted upload");
            csv_attachment(csv, &download)
        }
        Ok(Err(e)) => {
            warn!(upload = %file_name, "conversion failed: {}", e);
            form_response(
                &state.page,
                StatusCode::BAD_REQUEST,
                Some(&format!("Could not convert {}: {}", file_name, e)),
            )
        }
        Err(e) => {
            warn!("conversion task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "conversion task failed").into_response()
        }
    }
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health - health check
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Pull the `file` field out of the form.
///
/// Returns `None` when the field is absent or the browser sent it without a
/// file name or content (nothing selected).
async fn read_upload(mut multipart: Multipart) -> Result<Option<Upload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        if file_name.is_empty() || bytes.is_empty() {
            return Ok(None);
        }

        return Ok(Some(Upload {
            file_name,
            bytes: bytes.to_vec(),
        }));
    }
    Ok(None)
}

fn form_response(page: &FormPage, status: StatusCode, message: Option<&str>) -> Response {
    match page.render(message) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("failed to render upload form: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render upload form").into_response()
        }
    }
}

fn csv_attachment(csv: String, download: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(download)),
        ],
        csv,
    )
        .into_response()
}

/// Download name for an upload: last path component with its final extension
/// replaced by `.csv`.
pub fn csv_file_name(original: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or(original);
    let stem = base.rsplit_once('.').map_or(base, |(stem, _)| stem);
    format!("{}.csv", stem)
}

/// `attachment` disposition with an ASCII fallback name and, for non-ASCII
/// names, an RFC 5987 `filename*` parameter.
pub fn content_disposition(file_name: &str) -> String {
    let fallback: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii() && !c.is_ascii_control() => c,
            _ => '_',
        })
        .collect();

    if file_name.is_ascii() && !file_name.chars().any(|c| c.is_ascii_control()) {
        format!("attachment; filename=\"{}\"", fallback)
    } else {
        format!(
            "attachment; filename=\"{}\"; filename*=UTF-8''{}",
            fallback,
            urlencoding::encode(file_name)
        )
    }
}

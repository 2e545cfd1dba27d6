use serde::Serialize;
use axum::Json;
use axum::http::StatusCode;
use chrono::Utc;

/// Envelope returned by every JSON endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub meta: ResponseMeta,
}

#[derive(Serialize)]
pub struct ResponseMeta {
    pub status: &'static str,
    pub status_code: u16,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<&'static str>,
    pub message: Option<String>,
}

impl ResponseMeta {
    fn new(status: StatusCode, message: Option<String>, error_kind: Option<&'static str>) -> Self {
        ResponseMeta {
            status: if status.is_success() { "success" } else { "error" },
            status_code: status.as_u16(),
            timestamp: Utc::now().to_rfc3339(),
            error_kind,
            message,
        }
    }
}

pub fn success<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        StatusCode::OK,
        Json(ApiResponse {
            data: Some(data),
            meta: ResponseMeta::new(StatusCode::OK, None, None),
        }),
    )
}

pub fn error<T>(status: StatusCode, kind: &'static str, message: String) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        status,
        Json(ApiResponse {
            data: None,
            meta: ResponseMeta::new(status, Some(message), Some(kind)),
        }),
    )
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("请输入需要翻译的文本")]
    EmptyText,

    #[error("翻译服务异常：{0}")]
    Internal(String),
}

impl TranslateError {
    pub fn status(&self) -> StatusCode {
        match self {
            TranslateError::EmptyText => StatusCode::BAD_REQUEST,
            TranslateError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TranslateError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            warn!("Translate request failed: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
            "original_text": "",
            "translated_text": "",
        }));

        (status, body).into_response()
    }
}

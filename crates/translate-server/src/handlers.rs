use axum::{
    Form, Json,
    extract::{FromRequest, Request, State, rejection::FormRejection},
    http::header::CONTENT_TYPE,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::info;

use crate::{error::TranslateError, state::AppState, translator::is_separator};

const DEFAULT_SOURCE_LANG: &str = "ja";
const DEFAULT_TARGET_LANG: &str = "zh";

/// Body of `POST /api/translate`, accepted as JSON or as a url-encoded form.
///
/// Fields stay untyped so a JSON `null` or a number can be told apart from a
/// missing field; `None` only ever means absent.
#[derive(Debug, Default, Deserialize)]
pub struct TranslationRequest {
    #[serde(default, deserialize_with = "present")]
    pub text: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub src_lang: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub tgt_lang: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A language code as sent. Non-string values become their JSON text, which
/// never names a supported language.
fn language_code(value: Option<&Value>, default: &str) -> String {
    match value {
        None => default.to_string(),
        Some(Value::String(code)) => code.clone(),
        Some(other) => other.to_string(),
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub corrected: bool,
}

fn is_json_request(req: &Request) -> bool {
    let Some(content_type) = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let Ok(mime) = content_type.parse::<mime::Mime>() else {
        return false;
    };

    mime.type_() == mime::APPLICATION
        && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}

impl<S> FromRequest<S> for TranslationRequest
where
    S: Send + Sync,
{
    type Rejection = TranslateError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json_request(&req) {
            return match Json::<TranslationRequest>::from_request(req, state).await {
                Ok(Json(body)) => Ok(body),
                Err(err) => Err(TranslateError::Internal(err.body_text())),
            };
        }

        match Form::<TranslationRequest>::from_request(req, state).await {
            Ok(Form(body)) => Ok(body),
            // Neither JSON nor a form: nothing to read a `text` field from.
            Err(FormRejection::InvalidFormContentType(_)) => Ok(Self::default()),
            Err(err) => Err(TranslateError::Internal(err.body_text())),
        }
    }
}

// --- Handlers ---

pub async fn translate_handler(
    State(state): State<AppState>,
    request: TranslationRequest,
) -> Result<Json<TranslationResponse>, TranslateError> {
    let text = match &request.text {
        None => "",
        Some(Value::String(text)) => text.trim_matches(is_separator),
        Some(other) => {
            return Err(TranslateError::Internal(format!(
                "text must be a string, got {other}"
            )));
        }
    };
    if text.is_empty() {
        return Err(TranslateError::EmptyText);
    }

    let src_lang = language_code(request.src_lang.as_ref(), DEFAULT_SOURCE_LANG);
    let tgt_lang = language_code(request.tgt_lang.as_ref(), DEFAULT_TARGET_LANG);
    info!(
        "Translate Handler: {} chars {}->{}",
        text.chars().count(),
        src_lang,
        tgt_lang
    );

    let translated_text = state.translator.translate(text, &src_lang, &tgt_lang);
    state.record_request();

    Ok(Json(TranslationResponse {
        original_text: text.to_string(),
        translated_text,
        corrected: true,
    }))
}

pub async fn status_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "running",
        "backend": "Rust (ylkf-translate-server)",
        "requests_processed": state.requests_processed(),
        "corpus_entries": state.translator.corpus().len(),
    }))
}

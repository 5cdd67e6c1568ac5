//! HTTP routes.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::{JsonRejection, QueryRejection},
        DefaultBodyLimit, Multipart, Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use monmaker_domain::{GameData, ValidationReport, ValidationRules};
use monmaker_shared::{
    ErrorBody, ExportFormatQuery, GenerateContentRequest, GenerateContentResponse,
    NextIdResponse, PluginListResponse, ValidateQuery, WelcomeResponse,
};

use crate::app::App;
use crate::infrastructure::codec::{DocumentFormat, ExportError, ImportError};
use crate::stores::IdCounterError;
use crate::use_cases::GenerationError;

/// Multipart field carrying the uploaded game document.
pub const UPLOAD_FIELD: &str = "file";

/// Upper bound for uploaded and posted game documents.
pub const MAX_DOCUMENT_BYTES: usize = 16 * 1024 * 1024;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(welcome))
        .route("/api/health", get(health))
        .route("/api/export", post(export_game))
        .route("/api/import", post(import_game))
        .route("/api/validate", post(validate_game))
        .route("/api/id/{entity_type}", get(next_id))
        .route("/api/plugins", get(list_plugins))
        .route("/api/gemini/generate", post(generate_content))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(DefaultBodyLimit::max(MAX_DOCUMENT_BYTES))
}

async fn welcome() -> Json<WelcomeResponse> {
    let endpoints = [
        ("export", "/api/export"),
        ("import", "/api/import"),
        ("validate", "/api/validate"),
        ("gemini", "/api/gemini/generate"),
        ("plugins", "/api/plugins"),
        ("next_id", "/api/id/{entity_type}"),
    ]
    .into_iter()
    .map(|(name, path)| (name.to_string(), path.to_string()))
    .collect::<BTreeMap<_, _>>();

    Json(WelcomeResponse {
        message: "Welcome to the MonMaker API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

async fn health() -> &'static str {
    "OK"
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

// =============================================================================
// Game data
// =============================================================================

async fn export_game(
    State(app): State<Arc<App>>,
    query: Result<Query<ExportFormatQuery>, QueryRejection>,
    body: Result<Json<GameData>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let Json(data) = body?;
    let format = match query.format.as_deref() {
        Some(requested) => requested.parse::<DocumentFormat>()?,
        None => DocumentFormat::Json,
    };

    let document = app.use_cases.game_data.export.execute(&data, format)?;
    let disposition = format!("attachment; filename=\"{}\"", document.filename());

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.body,
    )
        .into_response())
}

async fn import_game(
    State(app): State<Arc<App>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<GameData>, ApiError> {
    let mut multipart = multipart?;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid upload: {e}")))?;

        let data = app.use_cases.game_data.import.execute(&bytes, &filename)?;
        return Ok(Json(data));
    }

    Err(ApiError::BadRequest(format!(
        "No file uploaded. Send the document in the '{UPLOAD_FIELD}' field"
    )))
}

async fn validate_game(
    State(app): State<Arc<App>>,
    query: Result<Query<ValidateQuery>, QueryRejection>,
    body: Result<Json<GameData>, JsonRejection>,
) -> Result<Json<ValidationReport>, ApiError> {
    let Query(query) = query?;
    let Json(data) = body?;
    let rules = if query.strict {
        ValidationRules::strict()
    } else {
        ValidationRules::default()
    };
    Ok(Json(app.use_cases.game_data.validate.execute(&data, rules)))
}

// =============================================================================
// Ids, plugins, generation
// =============================================================================

async fn next_id(
    State(app): State<Arc<App>>,
    Path(entity_type): Path<String>,
) -> Result<Json<NextIdResponse>, ApiError> {
    Ok(Json(app.use_cases.ids.next.execute(&entity_type)?))
}

async fn list_plugins(State(app): State<Arc<App>>) -> Json<PluginListResponse> {
    Json(app.use_cases.plugins.list.execute().await)
}

async fn generate_content(
    State(app): State<Arc<App>>,
    body: Result<Json<GenerateContentRequest>, JsonRejection>,
) -> Result<Json<GenerateContentResponse>, ApiError> {
    let Json(request) = body?;
    let response = app.use_cases.generation.generate.execute(request).await?;
    Ok(Json(response))
}

// =============================================================================
// Errors
// =============================================================================

/// Error returned by handlers, rendered as `{"detail": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    MethodNotAllowed,
    BadRequest(String),
    Unauthorized(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };
        (status, Json(ErrorBody::new(detail))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<IdCounterError> for ApiError {
    fn from(e: IdCounterError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<ImportError> for ApiError {
    fn from(e: ImportError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::UnsupportedFormat(_) => ApiError::BadRequest(e.to_string()),
            ExportError::Serialization(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<GenerationError> for ApiError {
    fn from(e: GenerationError) -> Self {
        match e {
            GenerationError::Unauthorized(_) => ApiError::Unauthorized(e.to_string()),
            GenerationError::Provider(_) => ApiError::Internal(e.to_string()),
            _ => ApiError::BadRequest(e.to_string()),
        }
    }
}

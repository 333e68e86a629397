use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};

use stockroom_recipes::{suggest_recipes, FAILURE_FALLBACK};

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/suggest", post(suggest))
}

/// Router for the bare completion pass-through, mounted at the root.
pub fn ask_router() -> Router {
    Router::new().route("/ask", post(ask))
}

/// `POST /recipes/suggest` — build the prompt from the last-fetched item
/// list and ask the completion service. Always 200: failures have already
/// been degraded to the fixed fallback string.
pub async fn suggest(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = {
        let tracker = services.tracker.lock().await;
        tracker.items().to_vec()
    };

    let answer = suggest_recipes(services.completion.as_ref(), &items).await;
    (StatusCode::OK, Json(serde_json::json!({ "answer": answer }))).into_response()
}

/// `POST /ask` — forward one raw query to the completion service.
pub async fn ask(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AskRequest>,
) -> axum::response::Response {
    match services.completion.ask(&body.query).await {
        Ok(answer) => {
            (StatusCode::OK, Json(serde_json::json!({ "answer": answer }))).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "completion pass-through failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": FAILURE_FALLBACK })),
            )
                .into_response()
        }
    }
}

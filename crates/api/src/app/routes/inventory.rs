use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(add_item))
        .route("/items/:name", axum::routing::put(update_item).delete(remove_item))
}

/// `GET /inventory/items?q=` — refresh the view, then filter it.
pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::SearchParams>,
) -> axum::response::Response {
    let mut tracker = services.tracker.lock().await;

    if let Err(e) = tracker.refresh().await {
        return errors::store_error_to_response(e);
    }
    tracker.set_query(params.q.unwrap_or_default());

    (StatusCode::OK, Json(dto::items_to_json(tracker.filtered()))).into_response()
}

/// `POST /inventory/items` — add, summing onto any existing record.
pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ItemPayload>,
) -> axum::response::Response {
    if let Err(resp) = body.validate() {
        return resp;
    }

    let mut tracker = services.tracker.lock().await;
    if let Err(e) = tracker.add_item(&body.name, body.quantity).await {
        return errors::store_error_to_response(e);
    }

    (
        StatusCode::CREATED,
        Json(dto::items_to_json(tracker.items())),
    )
        .into_response()
}

/// `PUT /inventory/items/:name` — rename and/or set an absolute quantity.
/// The path carries the original name, the body the new values.
pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(original_name): Path<String>,
    Json(body): Json<dto::ItemPayload>,
) -> axum::response::Response {
    if let Err(resp) = body.validate() {
        return resp;
    }

    let mut tracker = services.tracker.lock().await;
    if let Err(e) = tracker
        .update_item(&original_name, &body.name, body.quantity)
        .await
    {
        return errors::store_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::items_to_json(tracker.items()))).into_response()
}

/// `DELETE /inventory/items/:name` — remove exactly one; 200 even when the
/// item is absent (the domain treats that as a no-op).
pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
) -> axum::response::Response {
    let mut tracker = services.tracker.lock().await;
    if let Err(e) = tracker.remove_item(&name).await {
        return errors::store_error_to_response(e);
    }

    (StatusCode::OK, Json(dto::items_to_json(tracker.items()))).into_response()
}

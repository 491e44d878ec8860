//! JSON API over the repositories.
//!
//! `GET /api/{collection}` returns the current snapshot, `/events` streams
//! every new snapshot as server-sent events, and `PATCH`/`DELETE` on a
//! document write through the repository.

use std::convert::Infallible;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use client::model::{BlogPatch, ProjectPatch};
use futures::Stream;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, warn};

use crate::repo::{Record, Repository};
use crate::state::AppState;
use crate::store::{Collection, StoreError};

/// Event name carrying a JSON snapshot on the events stream.
pub const SNAPSHOT_EVENT: &str = "snapshot";

pub(crate) fn store_error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        StoreError::Request(_) | StoreError::Response { .. } | StoreError::Decode(_) | StoreError::Database(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

fn collection(raw: &str) -> Result<Collection, StatusCode> {
    Collection::parse(raw).ok_or(StatusCode::NOT_FOUND)
}

/// `GET /api/{collection}`: current snapshot as JSON.
pub async fn list(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Response, StatusCode> {
    Ok(match collection(&raw)? {
        Collection::Projects => Json(state.projects.snapshot()).into_response(),
        Collection::Blogs => Json(state.blogs.snapshot()).into_response(),
    })
}

/// `GET /api/{collection}/events`: the current snapshot, then one event per change.
pub async fn events(State(state): State<AppState>, Path(raw): Path<String>) -> Result<Response, StatusCode> {
    Ok(match collection(&raw)? {
        Collection::Projects => sse(snapshot_stream(&state.projects)),
        Collection::Blogs => sse(snapshot_stream(&state.blogs)),
    })
}

fn sse<S>(stream: S) -> Response
where
    S: Stream<Item = Result<Event, Infallible>> + Send + 'static,
{
    Sse::new(stream).keep_alive(KeepAlive::default()).into_response()
}

fn snapshot_stream<T: Record>(repo: &Repository<T>) -> impl Stream<Item = Result<Event, Infallible>> + Send + 'static {
    let rx = repo.subscribe();
    futures::stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }
        let event = {
            let snapshot = rx.borrow_and_update();
            Event::default().event(SNAPSHOT_EVENT).json_data(&*snapshot)
        };
        let event = event.unwrap_or_else(|e| {
            warn!(error = %e, "snapshot event encode failed");
            Event::default().comment("encode failed")
        });
        Some((Ok(event), (rx, false)))
    })
}

/// `PATCH /api/{collection}/{id}`: merge the given fields.
pub async fn update(
    State(state): State<AppState>,
    Path((raw, id)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<StatusCode, StatusCode> {
    match collection(&raw)? {
        Collection::Projects => apply_update(&state.projects, &id, parse_patch::<ProjectPatch>(body)?).await,
        Collection::Blogs => apply_update(&state.blogs, &id, parse_patch::<BlogPatch>(body)?).await,
    }
}

fn parse_patch<P: DeserializeOwned>(body: Value) -> Result<P, StatusCode> {
    serde_json::from_value(body).map_err(|_| StatusCode::UNPROCESSABLE_ENTITY)
}

async fn apply_update<T: Record>(repo: &Repository<T>, id: &str, patch: T::Patch) -> Result<StatusCode, StatusCode> {
    repo.update(id, patch).await.map_err(|e| {
        error!(collection = %repo.collection(), %id, error = %e, "update failed");
        store_error_to_status(&e)
    })?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/{collection}/{id}`
pub async fn delete(State(state): State<AppState>, Path((raw, id)): Path<(String, String)>) -> Result<StatusCode, StatusCode> {
    let result = match collection(&raw)? {
        Collection::Projects => state.projects.delete(&id).await,
        Collection::Blogs => state.blogs.delete(&id).await,
    };
    result.map_err(|e| {
        error!(collection = %raw, %id, error = %e, "delete failed");
        store_error_to_status(&e)
    })?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;

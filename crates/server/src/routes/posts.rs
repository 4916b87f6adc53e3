//! Post route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use minimart_core::PostId;

use crate::db::PostRepository;
use crate::error::{AppError, Result};
use crate::models::Post;
use crate::state::AppState;

/// Create/replace post request body.
#[derive(Debug, Deserialize)]
pub struct PostBody {
    pub title: String,
    pub body: String,
}

/// List all posts.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Post>>> {
    let posts = PostRepository::new(state.pool()).list().await?;
    Ok(Json(posts))
}

/// Create a post.
#[instrument(skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<PostBody>,
) -> Result<impl IntoResponse> {
    let post = PostRepository::new(state.pool())
        .create(&body.title, &body.body)
        .await?;

    let location = format!("/api/posts/{}", post.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(post),
    ))
}

/// Show a single post.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<PostId>) -> Result<Json<Post>> {
    let post = PostRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;

    Ok(Json(post))
}

/// Replace a post's title and body.
#[instrument(skip(state, body))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
    Json(body): Json<PostBody>,
) -> Result<Json<Post>> {
    let post = PostRepository::new(state.pool())
        .update(id, &body.title, &body.body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id}")))?;

    Ok(Json(post))
}

/// Delete a post.
#[instrument(skip(state))]
pub async fn destroy(State(state): State<AppState>, Path(id): Path<PostId>) -> Result<StatusCode> {
    let deleted = PostRepository::new(state.pool()).delete(id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("post {id}")));
    }

    Ok(StatusCode::NO_CONTENT)
}

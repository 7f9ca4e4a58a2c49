//! Comment controller.

use crate::{
    extractors::{AuthenticatedUser, IdPath, JsonBody, QueryParams},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use skein_core::Comment;
use skein_service::{CommentListQuery, CreateCommentRequest, UpdateCommentRequest};

pub async fn list_comments(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<CommentListQuery>,
) -> ApiResult<Vec<Comment>> {
    let response = state.comment_service.list_comments(query.product_id).await?;
    ok(response)
}

pub async fn get_comment(State(state): State<AppState>, IdPath(id): IdPath) -> ApiResult<Comment> {
    let response = state.comment_service.get_comment(id).await?;
    ok(response)
}

pub async fn create_comment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    JsonBody(request): JsonBody<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let response = state.comment_service.create_comment(&user, request).await?;
    created(response)
}

pub async fn update_comment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
    JsonBody(request): JsonBody<UpdateCommentRequest>,
) -> ApiResult<Comment> {
    let response = state.comment_service.update_comment(&user, id, request).await?;
    ok(response)
}

pub async fn delete_comment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    IdPath(id): IdPath,
) -> Result<StatusCode, AppError> {
    state.comment_service.delete_comment(&user, id).await?;
    no_content()
}

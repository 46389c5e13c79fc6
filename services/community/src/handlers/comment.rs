use axum::extract::State;
use serde::{Deserialize, Serialize};

use campusmap_core::envelope::Envelope;

use crate::domain::types::Comment;
use crate::error::CommunityError;
use crate::handlers::{ApiJson, ApiPath, required, required_text};
use crate::state::AppState;
use crate::usecase::comment::{
    CreateCommentInput, CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i32,
    pub user_id: i32,
    pub map_id: i32,
    pub content: String,
    #[serde(serialize_with = "campusmap_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            map_id: comment.map_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

// ── GET /api/maps/{id}/comments ──────────────────────────────────────────────

pub async fn list_comments(
    State(state): State<AppState>,
    ApiPath(map_id): ApiPath<i32>,
) -> Result<Envelope<Vec<CommentResponse>>, CommunityError> {
    let usecase = ListCommentsUseCase {
        maps: state.map_repo(),
        comments: state.comment_repo(),
    };
    let comments = usecase.execute(map_id).await?;
    Ok(Envelope::ok(comments.into_iter().map(Into::into).collect()))
}

// ── POST /api/maps/{id}/comments ─────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub user_id: Option<i32>,
    pub content: Option<String>,
}

pub async fn create_comment(
    State(state): State<AppState>,
    ApiPath(map_id): ApiPath<i32>,
    ApiJson(body): ApiJson<CreateCommentRequest>,
) -> Result<Envelope<CommentResponse>, CommunityError> {
    let input = CreateCommentInput {
        user_id: required(body.user_id, "userId")?,
        content: required_text(body.content, "content")?,
    };
    let usecase = CreateCommentUseCase {
        maps: state.map_repo(),
        users: state.user_repo(),
        comments: state.comment_repo(),
    };
    Ok(Envelope::ok(usecase.execute(map_id, input).await?.into()))
}

// ── DELETE /api/comments/{id} ────────────────────────────────────────────────

pub async fn delete_comment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Envelope<CommentResponse>, CommunityError> {
    let usecase = DeleteCommentUseCase {
        repo: state.comment_repo(),
    };
    Ok(Envelope::ok(usecase.execute(id).await?.into()))
}

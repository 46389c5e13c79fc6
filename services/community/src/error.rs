use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use campusmap_core::envelope::Envelope;

/// Community service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CommunityError {
    #[error("school not found")]
    SchoolNotFound,
    #[error("department not found")]
    DepartmentNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("map not found")]
    MapNotFound,
    #[error("comment not found")]
    CommentNotFound,
    #[error("keyword not found")]
    KeywordNotFound,
    #[error("school not found in directory")]
    DirectoryRecordNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("invalid login id or password")]
    InvalidCredentials,
    #[error("invalid handle")]
    InvalidHandle,
    #[error("missing field: {0}")]
    MissingField(&'static str),
    #[error("invalid field: {0}")]
    InvalidField(&'static str),
    #[error("school directory unavailable: {0}")]
    Directory(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CommunityError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SchoolNotFound => "SCHOOL_NOT_FOUND",
            Self::DepartmentNotFound => "DEPARTMENT_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::MapNotFound => "MAP_NOT_FOUND",
            Self::CommentNotFound => "COMMENT_NOT_FOUND",
            Self::KeywordNotFound => "KEYWORD_NOT_FOUND",
            Self::DirectoryRecordNotFound => "DIRECTORY_RECORD_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidHandle => "INVALID_HANDLE",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::Directory(_) => "DIRECTORY_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::SchoolNotFound
            | Self::DepartmentNotFound
            | Self::UserNotFound
            | Self::MapNotFound
            | Self::CommentNotFound
            | Self::KeywordNotFound
            | Self::DirectoryRecordNotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidHandle | Self::MissingField(_) | Self::InvalidField(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Directory(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Extractor rejections render through the envelope like every other 400.

impl From<JsonRejection> for CommunityError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(%rejection, "rejected request body");
        Self::InvalidField("body")
    }
}

impl From<QueryRejection> for CommunityError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(%rejection, "rejected query string");
        Self::InvalidField("query")
    }
}

impl From<PathRejection> for CommunityError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection, "rejected path parameter");
        Self::InvalidField("path")
    }
}

impl IntoResponse for CommunityError {
    fn into_response(self) -> Response {
        // 4xx are expected client errors and already visible in the TraceLayer span.
        match &self {
            Self::Internal(e) => tracing::error!(error = ?e, kind = "INTERNAL", "internal error"),
            Self::Directory(message) => {
                tracing::error!(error = %message, kind = "DIRECTORY_UNAVAILABLE", "directory error")
            }
            _ => {}
        }
        Envelope::<()>::failure(self.status(), self.kind(), self.to_string()).into_response()
    }
}

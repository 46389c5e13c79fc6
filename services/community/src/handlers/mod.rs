pub mod comment;
pub mod department;
pub mod directory;
pub mod health;
pub mod keyword;
pub mod map;
pub mod school;
pub mod user;

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::CommunityError;

/// `axum::Json` whose rejection renders as the error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(CommunityError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` whose rejection renders as the error envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(CommunityError))]
pub struct ApiQuery<T>(pub T);

/// `axum::extract::Path` whose rejection renders as the error envelope.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(CommunityError))]
pub struct ApiPath<T>(pub T);

/// Unwrap a required body field, naming it in the error when absent.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T, CommunityError> {
    value.ok_or(CommunityError::MissingField(field))
}

/// Like [`required`], but blank strings count as absent.
pub(crate) fn required_text(
    value: Option<String>,
    field: &'static str,
) -> Result<String, CommunityError> {
    required(value.filter(|v| !v.trim().is_empty()), field)
}

use axum::extract::State;
use serde::{Deserialize, Serialize};

use campusmap_core::envelope::Envelope;

use crate::domain::types::Keyword;
use crate::error::CommunityError;
use crate::handlers::{ApiJson, ApiPath, required, required_text};
use crate::state::AppState;
use crate::usecase::keyword::{
    ListKeywordsUseCase, ListUserKeywordsUseCase, RegisterKeywordUseCase, SetUserKeywordsUseCase,
};

#[derive(Serialize)]
pub struct KeywordResponse {
    pub id: i32,
    pub word: String,
}

impl From<Keyword> for KeywordResponse {
    fn from(keyword: Keyword) -> Self {
        Self {
            id: keyword.id,
            word: keyword.word,
        }
    }
}

fn to_responses(keywords: Vec<Keyword>) -> Vec<KeywordResponse> {
    keywords.into_iter().map(Into::into).collect()
}

// ── GET /api/keywords ────────────────────────────────────────────────────────

pub async fn list_keywords(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<KeywordResponse>>, CommunityError> {
    let usecase = ListKeywordsUseCase {
        repo: state.keyword_repo(),
    };
    Ok(Envelope::ok(to_responses(usecase.execute().await?)))
}

// ── POST /api/keywords ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterKeywordRequest {
    pub word: Option<String>,
}

pub async fn register_keyword(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterKeywordRequest>,
) -> Result<Envelope<KeywordResponse>, CommunityError> {
    let word = required_text(body.word, "word")?;
    let usecase = RegisterKeywordUseCase {
        repo: state.keyword_repo(),
    };
    Ok(Envelope::ok(usecase.execute(&word).await?.into()))
}

// ── GET /api/users/{id}/keywords ─────────────────────────────────────────────

pub async fn list_user_keywords(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<Envelope<Vec<KeywordResponse>>, CommunityError> {
    let usecase = ListUserKeywordsUseCase {
        users: state.user_repo(),
        keywords: state.keyword_repo(),
    };
    Ok(Envelope::ok(to_responses(usecase.execute(user_id).await?)))
}

// ── POST /api/users/{id}/keywords ────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetUserKeywordsRequest {
    pub keyword_ids: Option<Vec<i32>>,
}

pub async fn set_user_keywords(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(body): ApiJson<SetUserKeywordsRequest>,
) -> Result<Envelope<Vec<KeywordResponse>>, CommunityError> {
    let keyword_ids = required(body.keyword_ids, "keywordIds")?;
    let usecase = SetUserKeywordsUseCase {
        users: state.user_repo(),
        keywords: state.keyword_repo(),
    };
    let keywords = usecase.execute(user_id, &keyword_ids).await?;
    Ok(Envelope::ok(to_responses(keywords)))
}

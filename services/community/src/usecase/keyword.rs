use crate::domain::repository::{KeywordRepository, UserRepository};
use crate::domain::types::{Keyword, distinct_ids};
use crate::error::CommunityError;

// ── ListKeywords ─────────────────────────────────────────────────────────────

pub struct ListKeywordsUseCase<K: KeywordRepository> {
    pub repo: K,
}

impl<K: KeywordRepository> ListKeywordsUseCase<K> {
    pub async fn execute(&self) -> Result<Vec<Keyword>, CommunityError> {
        self.repo.list().await
    }
}

// ── RegisterKeyword ──────────────────────────────────────────────────────────

pub struct RegisterKeywordUseCase<K: KeywordRepository> {
    pub repo: K,
}

impl<K: KeywordRepository> RegisterKeywordUseCase<K> {
    /// Find-or-create; the same word always yields the same keyword.
    pub async fn execute(&self, word: &str) -> Result<Keyword, CommunityError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(CommunityError::MissingField("word"));
        }
        self.repo.register(word).await
    }
}

// ── ListUserKeywords ─────────────────────────────────────────────────────────

pub struct ListUserKeywordsUseCase<U: UserRepository, K: KeywordRepository> {
    pub users: U,
    pub keywords: K,
}

impl<U: UserRepository, K: KeywordRepository> ListUserKeywordsUseCase<U, K> {
    pub async fn execute(&self, user_id: i32) -> Result<Vec<Keyword>, CommunityError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(CommunityError::UserNotFound);
        }
        self.keywords.list_by_user(user_id).await
    }
}

// ── SetUserKeywords ──────────────────────────────────────────────────────────

pub struct SetUserKeywordsUseCase<U: UserRepository, K: KeywordRepository> {
    pub users: U,
    pub keywords: K,
}

impl<U: UserRepository, K: KeywordRepository> SetUserKeywordsUseCase<U, K> {
    /// Replace the user's keyword set with `keyword_ids` and return the new set.
    ///
    /// Repeated ids collapse to one. The user and every keyword must exist; the
    /// replacement itself is a single transaction, so a failure keeps the old set.
    pub async fn execute(
        &self,
        user_id: i32,
        keyword_ids: &[i32],
    ) -> Result<Vec<Keyword>, CommunityError> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(CommunityError::UserNotFound);
        }
        let ids = distinct_ids(keyword_ids);
        let found = self.keywords.find_by_ids(&ids).await?;
        if found.len() != ids.len() {
            return Err(CommunityError::KeywordNotFound);
        }
        self.keywords.set_user_keywords(user_id, &ids).await?;
        tracing::debug!(user_id, count = ids.len(), "user keywords replaced");
        self.keywords.list_by_user(user_id).await
    }
}

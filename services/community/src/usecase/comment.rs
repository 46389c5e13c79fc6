use crate::domain::repository::{CommentRepository, MapRepository, UserRepository};
use crate::domain::types::Comment;
use crate::error::CommunityError;

// ── CreateComment ────────────────────────────────────────────────────────────

pub struct CreateCommentInput {
    pub user_id: i32,
    pub content: String,
}

pub struct CreateCommentUseCase<M: MapRepository, U: UserRepository, C: CommentRepository> {
    pub maps: M,
    pub users: U,
    pub comments: C,
}

impl<M: MapRepository, U: UserRepository, C: CommentRepository> CreateCommentUseCase<M, U, C> {
    pub async fn execute(
        &self,
        map_id: i32,
        input: CreateCommentInput,
    ) -> Result<Comment, CommunityError> {
        let content = input.content.trim();
        if content.is_empty() {
            return Err(CommunityError::MissingField("content"));
        }
        if self.maps.find_by_id(map_id).await?.is_none() {
            return Err(CommunityError::MapNotFound);
        }
        if self.users.find_by_id(input.user_id).await?.is_none() {
            return Err(CommunityError::UserNotFound);
        }
        self.comments.create(input.user_id, map_id, content).await
    }
}

// ── ListComments ─────────────────────────────────────────────────────────────

pub struct ListCommentsUseCase<M: MapRepository, C: CommentRepository> {
    pub maps: M,
    pub comments: C,
}

impl<M: MapRepository, C: CommentRepository> ListCommentsUseCase<M, C> {
    pub async fn execute(&self, map_id: i32) -> Result<Vec<Comment>, CommunityError> {
        if self.maps.find_by_id(map_id).await?.is_none() {
            return Err(CommunityError::MapNotFound);
        }
        self.comments.list_by_map(map_id).await
    }
}

// ── DeleteComment ────────────────────────────────────────────────────────────

pub struct DeleteCommentUseCase<C: CommentRepository> {
    pub repo: C,
}

impl<C: CommentRepository> DeleteCommentUseCase<C> {
    /// Returns the comment as it was before deletion.
    pub async fn execute(&self, id: i32) -> Result<Comment, CommunityError> {
        let comment = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CommunityError::CommentNotFound)?;
        // A concurrent delete may win between the lookup and this statement.
        if !self.repo.delete(id).await? {
            return Err(CommunityError::CommentNotFound);
        }
        Ok(comment)
    }
}

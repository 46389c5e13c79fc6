use crate::domain::repository::MapRepository;
use crate::domain::types::Map;
use crate::error::CommunityError;

pub struct CreateMapUseCase<R: MapRepository> {
    pub repo: R,
}

impl<R: MapRepository> CreateMapUseCase<R> {
    pub async fn execute(&self, name: &str) -> Result<Map, CommunityError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CommunityError::MissingField("name"));
        }
        self.repo.create(name).await
    }
}

pub struct ListMapsUseCase<R: MapRepository> {
    pub repo: R,
}

impl<R: MapRepository> ListMapsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Map>, CommunityError> {
        self.repo.list().await
    }
}

pub struct GetMapUseCase<R: MapRepository> {
    pub repo: R,
}

impl<R: MapRepository> GetMapUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Map, CommunityError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CommunityError::MapNotFound)
    }
}

use axum::extract::State;
use serde::{Deserialize, Serialize};

use campusmap_core::envelope::Envelope;

use crate::domain::types::Map;
use crate::error::CommunityError;
use crate::handlers::{ApiJson, ApiPath, required_text};
use crate::state::AppState;
use crate::usecase::map::{CreateMapUseCase, GetMapUseCase, ListMapsUseCase};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapResponse {
    pub id: i32,
    pub name: String,
    #[serde(serialize_with = "campusmap_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Map> for MapResponse {
    fn from(map: Map) -> Self {
        Self {
            id: map.id,
            name: map.name,
            created_at: map.created_at,
        }
    }
}

// ── GET /api/maps ────────────────────────────────────────────────────────────

pub async fn list_maps(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<MapResponse>>, CommunityError> {
    let usecase = ListMapsUseCase {
        repo: state.map_repo(),
    };
    let maps = usecase.execute().await?;
    Ok(Envelope::ok(maps.into_iter().map(Into::into).collect()))
}

// ── POST /api/maps ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateMapRequest {
    pub name: Option<String>,
}

pub async fn create_map(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<CreateMapRequest>,
) -> Result<Envelope<MapResponse>, CommunityError> {
    let name = required_text(body.name, "name")?;
    let usecase = CreateMapUseCase {
        repo: state.map_repo(),
    };
    Ok(Envelope::ok(usecase.execute(&name).await?.into()))
}

// ── GET /api/maps/{id} ───────────────────────────────────────────────────────

pub async fn get_map(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Envelope<MapResponse>, CommunityError> {
    let usecase = GetMapUseCase {
        repo: state.map_repo(),
    };
    Ok(Envelope::ok(usecase.execute(id).await?.into()))
}

use serde::Deserialize;

use campusmap_core::config::Config;

/// Community service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct CommunityConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `COMMUNITY_PORT`.
    #[serde(default = "default_port")]
    pub community_port: u16,
    /// Upper bound on pooled database connections (default 10).
    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,
    /// NEIS open API base URL, without the endpoint segment.
    #[serde(default = "default_neis_api_url")]
    pub neis_api_url: String,
    pub neis_api_key: String,
    /// `SCHUL_KND_SC_NM` filter applied to directory searches.
    #[serde(default = "default_neis_school_kind")]
    pub neis_school_kind: String,
    /// Directory served for paths no route matches.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Config for CommunityConfig {}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_neis_api_url() -> String {
    "https://open.neis.go.kr/hub".to_owned()
}

fn default_neis_school_kind() -> String {
    "고등학교".to_owned()
}

fn default_static_dir() -> String {
    "public".to_owned()
}

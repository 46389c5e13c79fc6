use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbCommentRepository, DbDepartmentRepository, DbKeywordRepository, DbMapRepository,
    DbSchoolRepository, DbUserRepository,
};
use crate::infra::neis::NeisClient;
use crate::password::Passwords;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub directory: NeisClient,
    pub passwords: Passwords,
}

impl AppState {
    pub fn school_repo(&self) -> DbSchoolRepository {
        DbSchoolRepository {
            db: self.db.clone(),
        }
    }

    pub fn department_repo(&self) -> DbDepartmentRepository {
        DbDepartmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn map_repo(&self) -> DbMapRepository {
        DbMapRepository {
            db: self.db.clone(),
        }
    }

    pub fn comment_repo(&self) -> DbCommentRepository {
        DbCommentRepository {
            db: self.db.clone(),
        }
    }

    pub fn keyword_repo(&self) -> DbKeywordRepository {
        DbKeywordRepository {
            db: self.db.clone(),
        }
    }
}

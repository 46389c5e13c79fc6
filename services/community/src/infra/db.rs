use anyhow::{Context as _, anyhow};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, SqlErr, TransactionTrait,
    sea_query::{Expr, OnConflict, Query},
};

use campusmap_community_schema::{
    keyword_users, keywords, map_comments, maps, school_departments, schools, users,
};

use crate::domain::repository::{
    CommentRepository, DepartmentRepository, KeywordRepository, MapRepository, SchoolRepository,
    UserRepository,
};
use crate::domain::types::{
    Comment, Department, Keyword, Map, NewDepartment, NewUser, School, User, UserChanges,
};
use crate::error::CommunityError;

// ── School repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSchoolRepository {
    pub db: DatabaseConnection,
}

impl SchoolRepository for DbSchoolRepository {
    async fn add(
        &self,
        name: &str,
        external_code: Option<&str>,
    ) -> Result<School, CommunityError> {
        let model = schools::ActiveModel {
            name: Set(name.to_owned()),
            external_code: Set(external_code.map(str::to_owned)),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("add school")?;
        Ok(school_from_model(model))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<School>, CommunityError> {
        let model = schools::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find school by id")?;
        Ok(model.map(school_from_model))
    }

    async fn find_by_external_code(&self, code: &str) -> Result<Option<School>, CommunityError> {
        let model = schools::Entity::find()
            .filter(schools::Column::ExternalCode.eq(code))
            .one(&self.db)
            .await
            .context("find school by external code")?;
        Ok(model.map(school_from_model))
    }

    async fn search_by_name(&self, fragment: &str) -> Result<Vec<School>, CommunityError> {
        let models = schools::Entity::find()
            .filter(schools::Column::Name.contains(fragment))
            .order_by_asc(schools::Column::Id)
            .all(&self.db)
            .await
            .context("search schools by name")?;
        Ok(models.into_iter().map(school_from_model).collect())
    }

    async fn register(
        &self,
        name: &str,
        external_code: &str,
    ) -> Result<(School, bool), CommunityError> {
        let school = schools::ActiveModel {
            name: Set(name.to_owned()),
            external_code: Set(Some(external_code.to_owned())),
            ..Default::default()
        };
        let inserted = schools::Entity::insert(school)
            .on_conflict(
                OnConflict::column(schools::Column::ExternalCode)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("register school")?;
        let school = self
            .find_by_external_code(external_code)
            .await?
            .ok_or_else(|| anyhow!("school {external_code} missing after upsert"))?;
        Ok((school, inserted > 0))
    }
}

fn school_from_model(model: schools::Model) -> School {
    School {
        id: model.id,
        name: model.name,
        external_code: model.external_code,
    }
}

// ── Department repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDepartmentRepository {
    pub db: DatabaseConnection,
}

impl DepartmentRepository for DbDepartmentRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, CommunityError> {
        let model = school_departments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find department by id")?;
        Ok(model.map(department_from_model))
    }

    async fn list_by_school(&self, school_id: i32) -> Result<Vec<Department>, CommunityError> {
        let models = school_departments::Entity::find()
            .filter(school_departments::Column::SchoolId.eq(school_id))
            .order_by_asc(school_departments::Column::Id)
            .all(&self.db)
            .await
            .context("list departments by school")?;
        Ok(models.into_iter().map(department_from_model).collect())
    }

    async fn find_by_school_and_name(
        &self,
        school_id: i32,
        name: &str,
    ) -> Result<Option<Department>, CommunityError> {
        let model = school_departments::Entity::find()
            .filter(school_departments::Column::SchoolId.eq(school_id))
            .filter(school_departments::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find department by school and name")?;
        Ok(model.map(department_from_model))
    }

    async fn register(
        &self,
        school_id: i32,
        department: &NewDepartment,
    ) -> Result<(Department, bool), CommunityError> {
        let inserted = school_departments::Entity::insert(department_active_model(
            school_id, department,
        ))
        .on_conflict(department_conflict())
        .exec_without_returning(&self.db)
        .await
        .context("register department")?;
        let stored = self
            .find_by_school_and_name(school_id, &department.name)
            .await?
            .ok_or_else(|| anyhow!("department {} missing after upsert", department.name))?;
        Ok((stored, inserted > 0))
    }

    async fn register_many(
        &self,
        school_id: i32,
        departments: &[NewDepartment],
    ) -> Result<u64, CommunityError> {
        if departments.is_empty() {
            return Ok(0);
        }
        let inserted = school_departments::Entity::insert_many(
            departments
                .iter()
                .map(|department| department_active_model(school_id, department)),
        )
        .on_conflict(department_conflict())
        .exec_without_returning(&self.db)
        .await
        .context("register departments")?;
        Ok(inserted)
    }
}

fn department_active_model(
    school_id: i32,
    department: &NewDepartment,
) -> school_departments::ActiveModel {
    school_departments::ActiveModel {
        school_id: Set(school_id),
        name: Set(department.name.clone()),
        external_code: Set(department.external_code.clone()),
        ..Default::default()
    }
}

fn department_conflict() -> OnConflict {
    OnConflict::columns([
        school_departments::Column::SchoolId,
        school_departments::Column::Name,
    ])
    .do_nothing()
    .to_owned()
}

fn department_from_model(model: school_departments::Model) -> Department {
    Department {
        id: model.id,
        school_id: model.school_id,
        name: model.name,
        external_code: model.external_code,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn create(&self, user: &NewUser) -> Result<i32, CommunityError> {
        let result = users::ActiveModel {
            login_id: Set(user.login_id.clone()),
            name: Set(user.name.clone()),
            password_hash: Set(user.password_hash.clone()),
            comment: Set(user.comment.clone()),
            grade: Set(user.grade),
            class_num: Set(user.class_num),
            profile_photo: Set(user.profile_photo.clone()),
            school_id: Set(user.school_id),
            department_id: Set(user.department_id),
            created_at: Set(user.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(model) => Ok(model.id),
            Err(e) if is_unique_violation(&e) => Err(CommunityError::UserAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CommunityError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_login_id(&self, login_id: &str) -> Result<Option<User>, CommunityError> {
        let model = users::Entity::find()
            .filter(users::Column::LoginId.eq(login_id))
            .one(&self.db)
            .await
            .context("find user by login id")?;
        Ok(model.map(user_from_model))
    }

    async fn list_by_school(&self, school_id: i32) -> Result<Vec<User>, CommunityError> {
        let models = users::Entity::find()
            .filter(users::Column::SchoolId.eq(school_id))
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .context("list users by school")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn update(&self, id: i32, changes: &UserChanges) -> Result<bool, CommunityError> {
        if changes.is_empty() {
            return Ok(true);
        }
        let mut update = users::Entity::update_many().filter(users::Column::Id.eq(id));
        if let Some(name) = &changes.name {
            update = update.col_expr(users::Column::Name, Expr::value(name.clone()));
        }
        if let Some(password_hash) = &changes.password_hash {
            update = update.col_expr(
                users::Column::PasswordHash,
                Expr::value(password_hash.clone()),
            );
        }
        if let Some(comment) = &changes.comment {
            update = update.col_expr(users::Column::Comment, Expr::value(comment.clone()));
        }
        if let Some(grade) = changes.grade {
            update = update.col_expr(users::Column::Grade, Expr::value(grade));
        }
        if let Some(class_num) = changes.class_num {
            update = update.col_expr(users::Column::ClassNum, Expr::value(class_num));
        }
        if let Some(profile_photo) = &changes.profile_photo {
            update = update.col_expr(
                users::Column::ProfilePhoto,
                Expr::value(profile_photo.clone()),
            );
        }
        if let Some(department_id) = changes.department_id {
            update = update.col_expr(users::Column::DepartmentId, Expr::value(department_id));
        }
        let result = update.exec(&self.db).await.context("update user")?;
        Ok(result.rows_affected > 0)
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        login_id: model.login_id,
        name: model.name,
        password_hash: model.password_hash,
        comment: model.comment,
        grade: model.grade,
        class_num: model.class_num,
        profile_photo: model.profile_photo,
        school_id: model.school_id,
        department_id: model.department_id,
        created_at: model.created_at,
    }
}

// ── Map repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMapRepository {
    pub db: DatabaseConnection,
}

impl MapRepository for DbMapRepository {
    async fn create(&self, name: &str) -> Result<Map, CommunityError> {
        let model = maps::ActiveModel {
            name: Set(name.to_owned()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create map")?;
        Ok(map_from_model(model))
    }

    async fn list(&self) -> Result<Vec<Map>, CommunityError> {
        let models = maps::Entity::find()
            .order_by_asc(maps::Column::Id)
            .all(&self.db)
            .await
            .context("list maps")?;
        Ok(models.into_iter().map(map_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Map>, CommunityError> {
        let model = maps::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find map by id")?;
        Ok(model.map(map_from_model))
    }
}

fn map_from_model(model: maps::Model) -> Map {
    Map {
        id: model.id,
        name: model.name,
        created_at: model.created_at,
    }
}

// ── Comment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCommentRepository {
    pub db: DatabaseConnection,
}

impl CommentRepository for DbCommentRepository {
    async fn create(
        &self,
        user_id: i32,
        map_id: i32,
        content: &str,
    ) -> Result<Comment, CommunityError> {
        let model = map_comments::ActiveModel {
            user_id: Set(user_id),
            map_id: Set(map_id),
            content: Set(content.to_owned()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create map comment")?;
        Ok(comment_from_model(model))
    }

    async fn list_by_map(&self, map_id: i32) -> Result<Vec<Comment>, CommunityError> {
        let models = map_comments::Entity::find()
            .filter(map_comments::Column::MapId.eq(map_id))
            .order_by_asc(map_comments::Column::Id)
            .all(&self.db)
            .await
            .context("list map comments")?;
        Ok(models.into_iter().map(comment_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, CommunityError> {
        let model = map_comments::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find map comment by id")?;
        Ok(model.map(comment_from_model))
    }

    async fn delete(&self, id: i32) -> Result<bool, CommunityError> {
        let result = map_comments::Entity::delete_many()
            .filter(map_comments::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete map comment")?;
        Ok(result.rows_affected > 0)
    }
}

fn comment_from_model(model: map_comments::Model) -> Comment {
    Comment {
        id: model.id,
        user_id: model.user_id,
        map_id: model.map_id,
        content: model.content,
        created_at: model.created_at,
    }
}

// ── Keyword repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbKeywordRepository {
    pub db: DatabaseConnection,
}

impl KeywordRepository for DbKeywordRepository {
    async fn list(&self) -> Result<Vec<Keyword>, CommunityError> {
        let models = keywords::Entity::find()
            .order_by_asc(keywords::Column::Id)
            .all(&self.db)
            .await
            .context("list keywords")?;
        Ok(models.into_iter().map(keyword_from_model).collect())
    }

    async fn find_by_word(&self, word: &str) -> Result<Option<Keyword>, CommunityError> {
        let model = keywords::Entity::find()
            .filter(keywords::Column::Word.eq(word))
            .one(&self.db)
            .await
            .context("find keyword by word")?;
        Ok(model.map(keyword_from_model))
    }

    async fn register(&self, word: &str) -> Result<Keyword, CommunityError> {
        keywords::Entity::insert(keywords::ActiveModel {
            word: Set(word.to_owned()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(keywords::Column::Word)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("register keyword")?;
        let keyword = self
            .find_by_word(word)
            .await?
            .ok_or_else(|| anyhow!("keyword {word} missing after upsert"))?;
        Ok(keyword)
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Keyword>, CommunityError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = keywords::Entity::find()
            .filter(keywords::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(keywords::Column::Id)
            .all(&self.db)
            .await
            .context("find keywords by ids")?;
        Ok(models.into_iter().map(keyword_from_model).collect())
    }

    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Keyword>, CommunityError> {
        let models = keywords::Entity::find()
            .filter(
                keywords::Column::Id.in_subquery(
                    Query::select()
                        .column(keyword_users::Column::KeywordId)
                        .from(keyword_users::Entity)
                        .and_where(Expr::col(keyword_users::Column::UserId).eq(user_id))
                        .to_owned(),
                ),
            )
            .order_by_asc(keywords::Column::Id)
            .all(&self.db)
            .await
            .context("list keywords by user")?;
        Ok(models.into_iter().map(keyword_from_model).collect())
    }

    async fn set_user_keywords(
        &self,
        user_id: i32,
        keyword_ids: &[i32],
    ) -> Result<(), CommunityError> {
        let keyword_ids = keyword_ids.to_vec();
        self.db
            .transaction::<_, (), DbErr>(move |txn| {
                Box::pin(async move {
                    keyword_users::Entity::delete_many()
                        .filter(keyword_users::Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;

                    if !keyword_ids.is_empty() {
                        keyword_users::Entity::insert_many(keyword_ids.into_iter().map(
                            |keyword_id| keyword_users::ActiveModel {
                                user_id: Set(user_id),
                                keyword_id: Set(keyword_id),
                            },
                        ))
                        .exec_without_returning(txn)
                        .await?;
                    }
                    Ok(())
                })
            })
            .await
            .context("set user keywords")?;
        Ok(())
    }
}

fn keyword_from_model(model: keywords::Model) -> Keyword {
    Keyword {
        id: model.id,
        word: model.word,
    }
}

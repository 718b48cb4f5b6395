use sea_orm::sea_query::{Expr, Func};
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, DatabaseConnection, DbErr, QueryFilter, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "server")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub city: String,
    pub is_online: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Creation input; identity is assigned by storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewServer {
    pub name: String,
    pub city: String,
    pub is_online: bool,
}

pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
    Entity::find().all(db).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(db).await
}

/// Case-insensitive substring match on city.
pub async fn filter_by_city(db: &DatabaseConnection, city: &str) -> Result<Vec<Model>, DbErr> {
    let pattern = format!("%{}%", city.to_lowercase());
    Entity::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::City))).like(pattern))
        .all(db)
        .await
}

/// Case-insensitive substring match on name.
pub async fn search_by_name(db: &DatabaseConnection, name: &str) -> Result<Vec<Model>, DbErr> {
    let pattern = format!("%{}%", name.to_lowercase());
    Entity::find()
        .filter(Expr::expr(Func::lower(Expr::col(Column::Name))).like(pattern))
        .all(db)
        .await
}

pub async fn insert(db: &DatabaseConnection, input: NewServer) -> Result<Model, DbErr> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(input.name),
        city: Set(input.city),
        is_online: Set(input.is_online),
    };
    am.insert(db).await
}

/// Replace all mutable fields of the record identified by `id`.
/// Returns `false` without touching storage when `id` does not match the
/// record's own identity, or when no such record exists.
pub async fn replace(db: &DatabaseConnection, id: i32, server: &Model) -> Result<bool, DbErr> {
    if id != server.id {
        return Ok(false);
    }
    let Some(existing) = Entity::find_by_id(id).one(db).await? else {
        return Ok(false);
    };
    let mut am: ActiveModel = existing.into();
    am.name = Set(server.name.clone());
    am.city = Set(server.city.clone());
    am.is_online = Set(server.is_online);
    am.update(db).await?;
    Ok(true)
}

/// Remove the record; `false` when it was already absent.
pub async fn remove(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

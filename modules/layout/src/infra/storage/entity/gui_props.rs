use sea_orm::entity::prelude::*;
use sea_orm::EntityTrait;

/// Stored GUI preferences, one row per user. Either field may be NULL
/// or empty; both cases mean "use the system default".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_gui_props")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub lang: Option<String>,
    pub layout: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Find the stored GUI preferences row for a user
pub async fn find_by_user_id(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(user_id).one(db).await
}

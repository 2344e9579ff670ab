use sea_orm::entity::prelude::*;
use sea_orm::EntityTrait;

/// Account row carrying the profile fields used for menu substitution.
/// The legacy schema allows NULL in every profile column; `state` is
/// additionally absent on older installations.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admin")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub admin_id: i64,
    pub customer_id: Option<String>,
    pub fname: Option<String>,
    pub lname: Option<String>,
    pub firm: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub street1: Option<String>,
    pub street2: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Find the profile row for an account
pub async fn find_profile(
    db: &DatabaseConnection,
    admin_id: i64,
) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(admin_id).one(db).await
}

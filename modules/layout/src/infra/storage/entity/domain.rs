use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

/// A domain owned by an account. Accounts may own several.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "domain")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub domain_id: i64,
    pub domain_name: String,
    pub domain_admin_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The account's primary domain: lowest `domain_id` wins, so the pick
/// is stable regardless of storage-engine row order.
pub async fn find_primary_domain(
    db: &DatabaseConnection,
    admin_id: i64,
) -> Result<Option<Model>, DbErr> {
    Entity::find()
        .filter(Column::DomainAdminId.eq(admin_id))
        .order_by_asc(Column::DomainId)
        .one(db)
        .await
}

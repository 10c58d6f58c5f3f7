use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub level: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bug_status::Entity")]
    BugStatus,
}

impl Related<super::bug_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BugStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub app_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bug_app::Entity")]
    BugApp,
}

impl Related<super::bug_app::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BugApp.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bug_status")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub bug_id: i32,
    pub status_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bug::Entity",
        from = "Column::BugId",
        to = "super::bug::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bug,
    #[sea_orm(
        belongs_to = "super::status::Entity",
        from = "Column::StatusId",
        to = "super::status::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Status,
}

impl Related<super::bug::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bug.def()
    }
}

impl Related<super::status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

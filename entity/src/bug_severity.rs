use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bug_severity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub bug_id: i32,
    pub severity_id: i32,
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
        belongs_to = "super::severity::Entity",
        from = "Column::SeverityId",
        to = "super::severity::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Severity,
}

impl Related<super::bug::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bug.def()
    }
}

impl Related<super::severity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Severity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

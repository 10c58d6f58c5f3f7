use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comment_thread")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bug_id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub created_at: DateTimeUtc,
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
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::bug::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bug.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_name: String,
    pub full_name: String,
    pub password: String,
    pub dev: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bug::Entity")]
    Bug,
    #[sea_orm(has_many = "super::comment_thread::Entity")]
    CommentThread,
}

impl Related<super::bug::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bug.def()
    }
}

impl Related<super::comment_thread::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommentThread.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

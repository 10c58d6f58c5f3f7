use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bug")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bug_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub user_id: i32,
    pub created_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub completed_notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    User,
    #[sea_orm(has_one = "super::bug_status::Entity")]
    BugStatus,
    #[sea_orm(has_one = "super::bug_app::Entity")]
    BugApp,
    #[sea_orm(has_one = "super::bug_severity::Entity")]
    BugSeverity,
    #[sea_orm(has_many = "super::comment_thread::Entity")]
    CommentThread,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::bug_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BugStatus.def()
    }
}

impl Related<super::bug_app::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BugApp.def()
    }
}

impl Related<super::bug_severity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BugSeverity.def()
    }
}

impl Related<super::comment_thread::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommentThread.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

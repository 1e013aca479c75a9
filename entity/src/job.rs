use sea_orm::entity::prelude::*;

/// Job listing posted on behalf of a startup.
///
/// Visible while `is_active` and `expires_at` is unset or in the future.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub startup_id: i32,
    pub posted_by_id: i32,
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub salary_currency: String,
    pub job_type: String,
    pub location_type: String,
    pub city: Option<String>,
    pub apply_url: Option<String>,
    pub apply_email: Option<String>,
    pub skills: String,
    pub is_active: bool,
    pub is_featured: bool,
    pub expires_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::startup::Entity",
        from = "Column::StartupId",
        to = "super::startup::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Startup,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::PostedById",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PostedBy,
}

impl Related<super::startup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Startup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

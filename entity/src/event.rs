use sea_orm::entity::prelude::*;

/// Community event.
///
/// `registered_count` mirrors the number of `registered` RSVPs and is the
/// counter the capacity check updates conditionally.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub event_date: DateTimeUtc,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub is_virtual: bool,
    pub virtual_link: Option<String>,
    pub capacity: Option<i32>,
    pub registered_count: i32,
    pub is_featured: bool,
    pub is_published: bool,
    pub organizer_id: Option<i32>,
    pub tags: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_rsvp::Entity")]
    EventRsvp,
}

impl Related<super::event_rsvp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventRsvp.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

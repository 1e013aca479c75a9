pub use super::event::Entity as Event;
pub use super::event_rsvp::Entity as EventRsvp;
pub use super::forum_reply::Entity as ForumReply;
pub use super::forum_thread::Entity as ForumThread;
pub use super::introduction::Entity as Introduction;
pub use super::job::Entity as Job;
pub use super::profile::Entity as Profile;
pub use super::startup::Entity as Startup;
pub use super::subscription::Entity as Subscription;
pub use super::user::Entity as User;

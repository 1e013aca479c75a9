pub mod prelude;

pub mod event;
pub mod event_rsvp;
pub mod forum_reply;
pub mod forum_thread;
pub mod introduction;
pub mod job;
pub mod profile;
pub mod startup;
pub mod subscription;
pub mod user;

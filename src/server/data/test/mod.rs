mod forum;
mod introduction;
mod job;
mod profile;
mod rsvp;
mod subscription;
mod user;
